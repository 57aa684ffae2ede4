use clap::{Parser, Subcommand};
use library::Category;

#[derive(Parser, Debug)]
#[command(
    name = "lumina",
    author,
    version,
    about = "Gallery and exporter for real-time fragment-shader presets",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List gallery presets with per-category counts.
    List(ListArgs),
    /// Show one preset's metadata and generated controls.
    Show(ShowArgs),
    /// Print a standalone React component reproducing the current state.
    Export(ExportArgs),
    /// Drive the frame pipeline headlessly and report a summary.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Restrict the listing to one category: noise, fractal, geometry, dynamics.
    #[arg(long, value_name = "CATEGORY", value_parser = parse_category)]
    pub category: Option<Category>,

    /// Emit machine-readable JSON instead of the table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Preset id (e.g. `worley-caustics`).
    #[arg(value_name = "ID")]
    pub id: String,

    /// Emit machine-readable JSON instead of the table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Preset id to export.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Parameter override applied before export (e.g. `uScale=12.5`,
    /// `uColorA=#ff6600`); may be given multiple times.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Preset id to run.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Parameter override applied before the run; may be given multiple times.
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// Number of frames to drive through the pipeline.
    #[arg(long, value_name = "COUNT", default_value_t = 120)]
    pub frames: u32,

    /// Virtual frame rate for the headless clock.
    #[arg(long, value_name = "FPS", default_value_t = 60.0)]
    pub fps: f32,

    /// Viewport size in pixels (e.g. `1280x720`).
    #[arg(
        long,
        value_name = "WIDTHxHEIGHT",
        default_value = "1280x720",
        value_parser = parse_surface_size
    )]
    pub size: (u32, u32),
}

pub fn parse() -> Cli {
    Cli::parse()
}

pub fn parse_category(value: &str) -> Result<Category, String> {
    value.parse()
}

pub fn parse_surface_size(spec: &str) -> Result<(u32, u32), String> {
    let trimmed = spec.trim();
    let (width, height) = trimmed
        .split_once(['x', 'X'])
        .ok_or_else(|| "expected WxH format, e.g. 1280x720".to_string())?;

    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| "invalid width in size specification".to_string())?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| "invalid height in size specification".to_string())?;

    if width == 0 || height == 0 {
        return Err("viewport dimensions must be greater than zero".to_string());
    }

    Ok((width, height))
}
