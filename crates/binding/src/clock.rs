use std::time::Instant;

/// Snapshot of the time state supplied to the shader uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    /// Elapsed seconds since the render loop started.
    pub seconds: f32,
    /// Monotonic frame counter for the running session.
    pub frame_index: u64,
}

impl TimeSample {
    pub fn new(seconds: f32, frame_index: u64) -> Self {
        Self {
            seconds,
            frame_index,
        }
    }
}

/// Abstraction over where per-frame time values originate from.
///
/// Time survives preset switches; `reset` exists only for renderer teardown.
pub trait TimeSource {
    /// Resets the source to its initial state.
    fn reset(&mut self);
    /// Produces a time sample for the next frame.
    fn sample(&mut self) -> TimeSample;
}

/// Time source backed by the system monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    origin: Instant,
    frame: u64,
}

impl SystemTimeSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
            frame: 0,
        }
    }
}

impl TimeSource for SystemTimeSource {
    fn reset(&mut self) {
        self.origin = Instant::now();
        self.frame = 0;
    }

    fn sample(&mut self) -> TimeSample {
        let elapsed = self.origin.elapsed();
        let sample = TimeSample::new(elapsed.as_secs_f32(), self.frame);
        self.frame = self.frame.saturating_add(1);
        sample
    }
}

/// Deterministic time source advancing by a fixed step per sample; used by
/// headless runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct ManualTimeSource {
    seconds: f32,
    frame: u64,
    step: f32,
}

impl ManualTimeSource {
    /// A source that advances `step` seconds per frame, starting at zero.
    pub fn with_step(step: f32) -> Self {
        Self {
            seconds: 0.0,
            frame: 0,
            step,
        }
    }
}

impl TimeSource for ManualTimeSource {
    fn reset(&mut self) {
        self.seconds = 0.0;
        self.frame = 0;
    }

    fn sample(&mut self) -> TimeSample {
        let sample = TimeSample::new(self.seconds, self.frame);
        self.seconds += self.step;
        self.frame = self.frame.saturating_add(1);
        sample
    }
}
