//! Bridges the sparse, declarative parameter store into the dense input set a
//! real-time renderer consumes every frame.
//!
//! The one load-bearing invariant: composite inputs (colors, vectors) keep
//! their container identity across parameter edits, and only a preset switch
//! or a viewport resize replaces them. A renderer can therefore reuse its
//! GPU-side bindings for as long as the same containers keep arriving, instead
//! of re-uploading on every slider keystroke.
use std::cell::RefCell;
use std::rc::Rc;

use library::{ParamValue, Preset};
use session::ParameterStore;
use tracing::{debug, error};

use crate::clock::TimeSample;
use crate::inputs::{FrameInputs, UniformInput};

pub struct RenderBinding {
    preset_id: Option<String>,
    surface: (u32, u32),
    inputs: FrameInputs,
    rebuilds: u64,
}

impl RenderBinding {
    pub fn new(surface: (u32, u32)) -> Self {
        Self {
            preset_id: None,
            surface,
            inputs: FrameInputs::new(surface),
            rebuilds: 0,
        }
    }

    /// Brings the input set up to date for the next frame and returns it.
    ///
    /// A changed preset id or surface size triggers a full rebuild (fresh
    /// containers); otherwise existing containers are written in place.
    /// `uTime` and `uResolution` are refreshed unconditionally on every call.
    pub fn prepare(
        &mut self,
        preset: &Preset,
        store: &ParameterStore,
        surface: (u32, u32),
        sample: TimeSample,
    ) -> &FrameInputs {
        if self.preset_id.as_deref() != Some(preset.id.as_str()) || self.surface != surface {
            self.rebuild(preset, store, surface);
        } else {
            self.refresh(store);
        }

        self.inputs.set_time(sample.seconds);
        self.inputs
            .set_resolution(surface.0 as f32, surface.1 as f32);
        &self.inputs
    }

    /// Input set as of the most recent `prepare`.
    pub fn inputs(&self) -> &FrameInputs {
        &self.inputs
    }

    /// How many times the containers have been rebuilt from scratch.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    fn rebuild(&mut self, preset: &Preset, store: &ParameterStore, surface: (u32, u32)) {
        debug!(
            preset = %preset.id,
            width = surface.0,
            height = surface.1,
            "rebuilding uniform containers"
        );
        let mut inputs = FrameInputs::new(surface);
        for (name, spec) in preset.parameters.iter() {
            inputs.push_param(name, convert(store.value_or_default(name, spec)));
        }
        self.inputs = inputs;
        self.preset_id = Some(preset.id.clone());
        self.surface = surface;
        self.rebuilds += 1;
    }

    fn refresh(&mut self, store: &ParameterStore) {
        for (name, input) in self.inputs.params_mut() {
            let Some(value) = store.get(name) else {
                debug_assert!(false, "parameter '{name}' missing from the store");
                error!(
                    parameter = %name,
                    "store no longer carries a bound parameter; keeping the previous value"
                );
                continue;
            };

            match (&mut *input, value) {
                (UniformInput::Float(slot), ParamValue::Scalar(v)) => *slot = *v as f32,
                (UniformInput::Bool(slot), ParamValue::Boolean(flag)) => *slot = *flag,
                (UniformInput::Vec2(cell), ParamValue::Vector2([x, y])) => {
                    *cell.borrow_mut() = [*x as f32, *y as f32];
                }
                (UniformInput::Color(cell), ParamValue::Color(color)) => {
                    *cell.borrow_mut() = color.components();
                }
                (container, value) => {
                    debug_assert!(
                        false,
                        "uniform '{name}' bound as {} but the store holds {}",
                        container.kind_name(),
                        value.kind_name()
                    );
                    error!(
                        parameter = %name,
                        container = container.kind_name(),
                        value = value.kind_name(),
                        "value shape does not match its uniform container"
                    );
                }
            }
        }
    }
}

fn convert(value: &ParamValue) -> UniformInput {
    match value {
        ParamValue::Scalar(v) => UniformInput::Float(*v as f32),
        ParamValue::Boolean(flag) => UniformInput::Bool(*flag),
        ParamValue::Vector2([x, y]) => {
            UniformInput::Vec2(Rc::new(RefCell::new([*x as f32, *y as f32])))
        }
        ParamValue::Color(color) => UniformInput::Color(Rc::new(RefCell::new(color.components()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Vec3Cell;
    use library::{Category, HexColor, ParamSpec};

    const SURFACE: (u32, u32) = (1280, 720);

    fn preset(id: &str) -> Preset {
        Preset::new(id, "Demo", "", Category::Noise, "void main() {}".to_string())
            .parameter("uScale", ParamSpec::scalar("Scale", 6.0, 1.0, 20.0, 0.1))
            .parameter(
                "uColorA",
                ParamSpec::color("Tint", HexColor::from_rgb(0x00, 0x2b, 0x5b)),
            )
            .parameter("uCenter", ParamSpec::vec2("Center", -0.745, 0.1))
    }

    fn color_cell(binding: &RenderBinding, name: &str) -> Vec3Cell {
        match binding.inputs().get(name) {
            Some(UniformInput::Color(cell)) => Rc::clone(cell),
            other => panic!("expected color input, got {other:?}"),
        }
    }

    #[test]
    fn first_prepare_builds_every_input() {
        let preset = preset("p1");
        let store = ParameterStore::for_preset(&preset);
        let mut binding = RenderBinding::new(SURFACE);

        let inputs = binding.prepare(&preset, &store, SURFACE, TimeSample::new(0.0, 0));
        assert_eq!(inputs.len(), 3);
        assert_eq!(inputs.resolution(), [1280.0, 720.0]);
        assert!(matches!(
            inputs.get("uScale"),
            Some(UniformInput::Float(v)) if (*v - 6.0).abs() < f32::EPSILON
        ));
        assert_eq!(binding.rebuild_count(), 1);
    }

    #[test]
    fn parameter_edits_keep_container_identity() {
        let preset = preset("p1");
        let mut store = ParameterStore::for_preset(&preset);
        let mut binding = RenderBinding::new(SURFACE);
        binding.prepare(&preset, &store, SURFACE, TimeSample::new(0.0, 0));
        let before = color_cell(&binding, "uColorA");

        store.set(
            "uColorA",
            ParamValue::Color(HexColor::from_rgb(0xff, 0x00, 0x00)),
        );
        binding.prepare(&preset, &store, SURFACE, TimeSample::new(0.016, 1));

        let after = color_cell(&binding, "uColorA");
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(*after.borrow(), [1.0, 0.0, 0.0]);
        assert_eq!(binding.rebuild_count(), 1);
    }

    #[test]
    fn preset_switch_replaces_container_identity() {
        let first = preset("p1");
        let second = preset("p2");
        let mut store = ParameterStore::for_preset(&first);
        let mut binding = RenderBinding::new(SURFACE);
        binding.prepare(&first, &store, SURFACE, TimeSample::new(0.0, 0));
        let before = color_cell(&binding, "uColorA");

        store.reset(&second);
        binding.prepare(&second, &store, SURFACE, TimeSample::new(0.016, 1));

        let after = color_cell(&binding, "uColorA");
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(binding.rebuild_count(), 2);
    }

    #[test]
    fn viewport_resize_triggers_a_rebuild() {
        let preset = preset("p1");
        let store = ParameterStore::for_preset(&preset);
        let mut binding = RenderBinding::new(SURFACE);
        binding.prepare(&preset, &store, SURFACE, TimeSample::new(0.0, 0));
        let before = color_cell(&binding, "uColorA");

        binding.prepare(&preset, &store, (1920, 1080), TimeSample::new(0.016, 1));

        let after = color_cell(&binding, "uColorA");
        assert!(!Rc::ptr_eq(&before, &after));
        assert_eq!(binding.inputs().resolution(), [1920.0, 1080.0]);
        assert_eq!(binding.rebuild_count(), 2);
    }

    #[test]
    fn time_and_resolution_refresh_every_frame() {
        let preset = preset("p1");
        let store = ParameterStore::for_preset(&preset);
        let mut binding = RenderBinding::new(SURFACE);

        binding.prepare(&preset, &store, SURFACE, TimeSample::new(0.5, 30));
        assert_eq!(binding.inputs().time(), 0.5);

        binding.prepare(&preset, &store, SURFACE, TimeSample::new(0.6, 31));
        assert_eq!(binding.inputs().time(), 0.6);
        assert_eq!(binding.rebuild_count(), 1);
    }

    #[test]
    fn vec2_edits_write_into_the_existing_container() {
        let preset = preset("p1");
        let mut store = ParameterStore::for_preset(&preset);
        let mut binding = RenderBinding::new(SURFACE);
        binding.prepare(&preset, &store, SURFACE, TimeSample::new(0.0, 0));

        let cell = match binding.inputs().get("uCenter") {
            Some(UniformInput::Vec2(cell)) => Rc::clone(cell),
            other => panic!("expected vec2 input, got {other:?}"),
        };

        store.set("uCenter", ParamValue::Vector2([0.25, -0.5]));
        binding.prepare(&preset, &store, SURFACE, TimeSample::new(0.016, 1));

        assert_eq!(*cell.borrow(), [0.25, -0.5]);
    }
}
