use anyhow::{anyhow, bail, Context, Result};
use binding::{FrameRenderer, ManualTimeSource, RecordingRenderer, RenderBinding, TimeSource};
use library::{find, presets, Category, Preset};
use session::{format_value, ControlKind, ParamChange, Session};
use tracing_subscriber::EnvFilter;

use crate::cli::{ExportArgs, ListArgs, PreviewArgs, ShowArgs};

pub fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn resolve_preset(id: &str) -> Result<&'static Preset> {
    find(id).ok_or_else(|| anyhow!("unknown preset '{id}'; run `lumina list` to see the gallery"))
}

pub fn run_list(args: ListArgs) -> Result<()> {
    let filtered: Vec<&Preset> = presets()
        .iter()
        .filter(|preset| args.category.map_or(true, |category| preset.category == category))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    for category in Category::ALL {
        let count = presets()
            .iter()
            .filter(|preset| preset.category == category)
            .count();
        print!("{category}: {count}  ");
    }
    println!();
    println!();

    for preset in &filtered {
        println!(
            "  {:<26} {:<9} {}",
            preset.id, preset.category, preset.name
        );
        println!("  {:<26} {:<9} {}", "", "", preset.description);
    }
    println!();
    println!("{} presets", filtered.len());
    Ok(())
}

pub fn run_show(args: ShowArgs) -> Result<()> {
    let preset = resolve_preset(&args.id)?;
    let session = Session::new(preset);
    let controls = session.controls();

    if args.json {
        let payload = serde_json::json!({
            "preset": preset,
            "controls": controls,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{} ({})", preset.name, preset.id);
    println!("category:    {}", preset.category);
    println!("description: {}", preset.description);
    println!();

    if controls.is_empty() {
        println!("no adjustable parameters");
        return Ok(());
    }

    println!("parameters:");
    for control in controls {
        let value = session
            .value_of(&control.name)
            .map(format_value)
            .unwrap_or_default();
        let widget = match &control.kind {
            ControlKind::Slider(range) => format!(
                "slider [{}..{}] step {}",
                range.min, range.max, range.step
            ),
            ControlKind::ColorPicker => "color picker".to_string(),
            ControlKind::Toggle => "toggle".to_string(),
            ControlKind::Readout => "read-only".to_string(),
        };
        println!(
            "  {:<14} {:<22} {:<28} {}",
            control.name, control.label, widget, value
        );
    }
    Ok(())
}

fn apply_overrides(session: &mut Session<'_>, overrides: &[String]) -> Result<()> {
    for entry in overrides {
        let (name, raw) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("expected NAME=VALUE, got '{entry}'"))?;
        let name = name.trim();
        let spec = session
            .preset()
            .parameters
            .get(name)
            .ok_or_else(|| {
                anyhow!(
                    "preset '{}' has no parameter '{name}'",
                    session.preset().id
                )
            })?;
        let value = spec
            .parse_value(raw)
            .with_context(|| format!("invalid value for parameter '{name}'"))?;
        if !session.apply(ParamChange {
            name: name.to_string(),
            value,
        }) {
            bail!("override '{entry}' was not accepted");
        }
        tracing::debug!(parameter = name, "applied parameter override");
    }
    Ok(())
}

pub fn run_export(args: ExportArgs) -> Result<()> {
    let preset = resolve_preset(&args.id)?;
    let mut session = Session::new(preset);
    apply_overrides(&mut session, &args.set)?;
    println!("{}", session.export());
    Ok(())
}

pub fn run_preview(args: PreviewArgs) -> Result<()> {
    if args.frames == 0 {
        bail!("preview needs at least one frame");
    }
    if !(args.fps > 0.0) {
        bail!("fps must be positive");
    }

    let preset = resolve_preset(&args.id)?;
    let mut session = Session::new(preset);
    apply_overrides(&mut session, &args.set)?;

    let mut clock = ManualTimeSource::with_step(1.0 / args.fps);
    let mut render_binding = RenderBinding::new(args.size);
    let mut renderer = RecordingRenderer::new();

    for _ in 0..args.frames {
        let inputs = render_binding.prepare(preset, session.store(), args.size, clock.sample());
        renderer.render_frame(&preset.shader_source, inputs)?;
    }

    let last = renderer
        .last()
        .ok_or_else(|| anyhow!("renderer recorded no frames"))?;

    println!("preset:   {} ({})", preset.name, preset.id);
    println!("viewport: {}x{}", args.size.0, args.size.1);
    println!(
        "frames:   {} at {} fps (shader time {:.3}s)",
        renderer.frame_count(),
        args.fps,
        last.time
    );
    println!("rebuilds: {}", render_binding.rebuild_count());

    let bound: Vec<&str> = render_binding
        .inputs()
        .params()
        .map(|(name, _)| name)
        .collect();
    println!(
        "uniforms: {}, {}{}{}",
        binding::TIME_UNIFORM,
        binding::RESOLUTION_UNIFORM,
        if bound.is_empty() { "" } else { ", " },
        bound.join(", ")
    );
    Ok(())
}
