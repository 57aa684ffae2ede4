//! End-to-end pass over the whole pipeline: pick a catalog preset, edit it,
//! drive frames through the render binding, and export the result.
use std::rc::Rc;

use binding::{
    FrameRenderer, ManualTimeSource, RecordingRenderer, RenderBinding, TimeSource, UniformInput,
};
use library::{find, ParamValue};
use session::{slider_change, Session};

const SURFACE: (u32, u32) = (1280, 720);

#[test]
fn edit_render_export_round_trip() {
    let caustics = find("worley-caustics").expect("catalog preset");
    let mandelbrot = find("mandelbrot-explorer").expect("catalog preset");

    let mut session = Session::new(caustics);
    let mut clock = ManualTimeSource::with_step(1.0 / 60.0);
    let mut render_binding = RenderBinding::new(SURFACE);
    let mut renderer = RecordingRenderer::new();

    // A few frames at defaults.
    for _ in 0..3 {
        let inputs = render_binding.prepare(caustics, session.store(), SURFACE, clock.sample());
        renderer
            .render_frame(&caustics.shader_source, inputs)
            .unwrap();
    }

    let color_before = match render_binding.inputs().get("uColorA") {
        Some(UniformInput::Color(cell)) => Rc::clone(cell),
        other => panic!("expected color container, got {other:?}"),
    };

    // Slider edit lands in the store and mutates the bound container in place.
    assert!(session.apply(slider_change("uScale", 12.5)));
    let inputs = render_binding.prepare(caustics, session.store(), SURFACE, clock.sample());
    renderer
        .render_frame(&caustics.shader_source, inputs)
        .unwrap();

    assert_eq!(session.value_of("uScale"), Some(&ParamValue::Scalar(12.5)));
    assert_eq!(session.value_of("uColorA"), caustics
        .parameters
        .get("uColorA")
        .map(|spec| &spec.default));
    match render_binding.inputs().get("uColorA") {
        Some(UniformInput::Color(cell)) => assert!(Rc::ptr_eq(&color_before, cell)),
        other => panic!("expected color container, got {other:?}"),
    }
    assert_eq!(render_binding.rebuild_count(), 1);
    assert!(renderer.time_is_monotonic());
    assert!(renderer.has_stable_container("uColorA"));

    // The export reflects the edit and embeds the color default.
    let code = session.export();
    assert!(code.contains("uScale: { value: 12.5 },"));
    assert!(code.contains("new THREE.Color('#002b5b')"));

    // Switching presets rebuilds containers; time keeps running.
    session.select(mandelbrot);
    let sample = clock.sample();
    let inputs = render_binding.prepare(mandelbrot, session.store(), SURFACE, sample);
    renderer
        .render_frame(&mandelbrot.shader_source, inputs)
        .unwrap();

    assert_eq!(render_binding.rebuild_count(), 2);
    assert!(sample.seconds > 0.0);
    assert!(renderer.time_is_monotonic());
    match render_binding.inputs().get("uCenter") {
        Some(UniformInput::Vec2(cell)) => assert_eq!(*cell.borrow(), [-0.745, 0.1]),
        other => panic!("expected vec2 container, got {other:?}"),
    }

    // Coming back restores defaults, not the earlier edit.
    session.select(caustics);
    assert_eq!(session.value_of("uScale"), Some(&ParamValue::Scalar(6.0)));
}
