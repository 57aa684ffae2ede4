mod binding;
mod clock;
mod inputs;
mod renderer;

pub use binding::RenderBinding;
pub use clock::{ManualTimeSource, SystemTimeSource, TimeSample, TimeSource};
pub use inputs::{
    FrameInputs, UniformInput, Vec2Cell, Vec3Cell, RESOLUTION_UNIFORM, TIME_UNIFORM,
};
pub use renderer::{FrameRecord, FrameRenderer, RecordedValue, RecordingRenderer};
