//! Frame Sequencer: per-frame timing and display size.
//!
//! Runs after the Input Adapter and before the widget library computes its
//! layout, so both timing and input are current when hit-testing happens.

use imgui::Io;

use crate::backend::Backend;

/// Delta time substituted on the very first frame, when there is no prior
/// recorded time to subtract from.
pub const FIRST_FRAME_DELTA: f32 = 1.0 / 60.0;

/// Monotonic last-frame-time state.
///
/// Holds the single cross-frame value the sequencer needs. `None` means "no
/// frame recorded yet", which is what makes the first-frame substitute
/// unambiguous.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    /// Creates a clock with no recorded frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances to `now` and returns the delta since the previous tick, or
    /// [`FIRST_FRAME_DELTA`] on the first tick.
    pub fn tick(&mut self, now: f64) -> f32 {
        let delta = match self.last_time {
            Some(last) => (now - last) as f32,
            None => FIRST_FRAME_DELTA,
        };
        self.last_time = Some(now);
        delta
    }

    /// Forgets the recorded time; the next tick behaves like a first frame.
    pub fn reset(&mut self) {
        self.last_time = None;
    }
}

/// Writes the current display size and delta time into the widget
/// library's per-frame IO.
pub fn sequence_frame<B: Backend>(io: &mut Io, clock: &mut FrameClock, backend: &B) {
    io.display_size = backend.screen_size();
    io.delta_time = clock.tick(backend.time_seconds());
}
