//! The renderer-facing seam. The GPU backend is an external collaborator: it
//! receives opaque shader text plus the named input set once per display
//! refresh and draws a frame. `RecordingRenderer` fulfils the same contract
//! without a GPU, recording what it was asked to draw so tests and headless
//! runs can inspect it.
use std::rc::Rc;

use anyhow::Result;

use crate::inputs::{FrameInputs, UniformInput};

pub trait FrameRenderer {
    /// Draws one frame from the given shader and input set.
    fn render_frame(&mut self, shader_source: &str, inputs: &FrameInputs) -> Result<()>;
}

/// Plain snapshot of one uniform value at render time. Composite entries also
/// carry their container address so identity can be asserted across frames.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedValue {
    Float(f32),
    Bool(bool),
    Vec2 { components: [f32; 2], container: usize },
    Color { components: [f32; 3], container: usize },
}

#[derive(Debug, Clone)]
pub struct FrameRecord {
    pub time: f32,
    pub resolution: [f32; 2],
    pub values: Vec<(String, RecordedValue)>,
}

impl FrameRecord {
    pub fn value(&self, name: &str) -> Option<&RecordedValue> {
        self.values
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }
}

/// Records every frame it is asked to draw.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<FrameRecord>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }

    /// True when every recorded frame bound `name` to the same composite
    /// container.
    pub fn has_stable_container(&self, name: &str) -> bool {
        let mut containers = self.frames.iter().filter_map(|frame| {
            frame.value(name).and_then(|value| match value {
                RecordedValue::Vec2 { container, .. } | RecordedValue::Color { container, .. } => {
                    Some(*container)
                }
                _ => None,
            })
        });
        let Some(first) = containers.next() else {
            return false;
        };
        containers.all(|container| container == first)
    }

    /// True when recorded `time` values never decrease.
    pub fn time_is_monotonic(&self) -> bool {
        self.frames
            .windows(2)
            .all(|pair| pair[1].time >= pair[0].time)
    }
}

impl FrameRenderer for RecordingRenderer {
    fn render_frame(&mut self, _shader_source: &str, inputs: &FrameInputs) -> Result<()> {
        let values = inputs
            .params()
            .map(|(name, input)| {
                let recorded = match input {
                    UniformInput::Float(v) => RecordedValue::Float(*v),
                    UniformInput::Bool(flag) => RecordedValue::Bool(*flag),
                    UniformInput::Vec2(cell) => RecordedValue::Vec2 {
                        components: *cell.borrow(),
                        container: Rc::as_ptr(cell) as usize,
                    },
                    UniformInput::Color(cell) => RecordedValue::Color {
                        components: *cell.borrow(),
                        container: Rc::as_ptr(cell) as usize,
                    },
                };
                (name.to_string(), recorded)
            })
            .collect();

        self.frames.push(FrameRecord {
            time: inputs.time(),
            resolution: inputs.resolution(),
            values,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::RenderBinding;
    use crate::clock::{ManualTimeSource, TimeSource};
    use library::{Category, HexColor, ParamSpec, ParamValue, Preset};
    use session::ParameterStore;

    fn preset() -> Preset {
        Preset::new(
            "record-demo",
            "Record Demo",
            "",
            Category::Dynamics,
            "void main() {}".to_string(),
        )
        .parameter("uEnergy", ParamSpec::scalar("Energy", 1.2, 0.2, 5.0, 0.1))
        .parameter(
            "uGlow",
            ParamSpec::color("Glow", HexColor::from_rgb(0x00, 0xff, 0x44)),
        )
    }

    #[test]
    fn records_monotonic_time_and_stable_containers() {
        let preset = preset();
        let mut store = ParameterStore::for_preset(&preset);
        let mut binding = RenderBinding::new((640, 360));
        let mut clock = ManualTimeSource::with_step(1.0 / 60.0);
        let mut renderer = RecordingRenderer::new();

        for frame in 0..4 {
            if frame == 2 {
                store.set(
                    "uGlow",
                    ParamValue::Color(HexColor::from_rgb(0xff, 0x00, 0x88)),
                );
            }
            let inputs = binding.prepare(&preset, &store, (640, 360), clock.sample());
            renderer
                .render_frame(&preset.shader_source, inputs)
                .unwrap();
        }

        assert_eq!(renderer.frame_count(), 4);
        assert!(renderer.time_is_monotonic());
        assert!(renderer.has_stable_container("uGlow"));

        let last = renderer.last().unwrap();
        assert_eq!(last.resolution, [640.0, 360.0]);
        match last.value("uGlow") {
            Some(RecordedValue::Color { components, .. }) => {
                assert_eq!(
                    *components,
                    HexColor::from_rgb(0xff, 0x00, 0x88).components()
                );
            }
            other => panic!("expected color record, got {other:?}"),
        }
    }

    #[test]
    fn resolution_tracks_the_latest_viewport() {
        let preset = preset();
        let store = ParameterStore::for_preset(&preset);
        let mut binding = RenderBinding::new((640, 360));
        let mut clock = ManualTimeSource::with_step(1.0 / 60.0);
        let mut renderer = RecordingRenderer::new();

        let inputs = binding.prepare(&preset, &store, (640, 360), clock.sample());
        renderer
            .render_frame(&preset.shader_source, inputs)
            .unwrap();
        let inputs = binding.prepare(&preset, &store, (1920, 1080), clock.sample());
        renderer
            .render_frame(&preset.shader_source, inputs)
            .unwrap();

        assert_eq!(renderer.last().unwrap().resolution, [1920.0, 1080.0]);
        assert!(renderer.time_is_monotonic());
    }
}
