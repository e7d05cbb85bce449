//! The adapter context object tying the per-frame pieces together.
//!
//! Replaces what would otherwise be module-level statics (elapsed time,
//! cached pointer position, atlas-loaded flag) with explicit fields, while
//! keeping the same single-instance-per-process behavior for the atlas.

use imgui::{Context, DrawData, Ui};

use crate::atlas::AtlasState;
use crate::backend::{Backend, BackendResult};
use crate::frame::{self, FrameClock};
use crate::input::{self, PointerState};
use crate::render;

/// Drives one Dear ImGui context through a host backend, frame by frame.
///
/// Call order per frame: [`ImguiController::prepare_frame`], then
/// `Context::new_frame`, then (inside the frame)
/// [`ImguiController::update_cursor`], then `Context::render`, then
/// [`ImguiController::render`].
#[derive(Debug)]
pub struct ImguiController {
    clock: FrameClock,
    pointer: PointerState,
    atlas: AtlasState,
}

impl ImguiController {
    /// Creates the controller and bootstraps the font atlas.
    ///
    /// The only failure surface is the host rejecting the atlas upload.
    pub fn new<B: Backend>(ctx: &mut Context, backend: &mut B) -> BackendResult<Self> {
        let mut atlas = AtlasState::new();
        atlas.bootstrap(ctx, backend)?;
        ctx.io_mut().mouse_pos = [0.0, 0.0];
        tracing::info!(atlas_owned = atlas.is_loaded(), "imgui controller ready");
        Ok(Self {
            clock: FrameClock::new(),
            pointer: PointerState::default(),
            atlas,
        })
    }

    /// Runs the Input Adapter then the Frame Sequencer.
    ///
    /// Must complete before `Context::new_frame` so layout and hit-testing
    /// see this frame's input and timing.
    pub fn prepare_frame<B: Backend>(&mut self, ctx: &mut Context, backend: &mut B) {
        let io = ctx.io_mut();
        input::process_events(io, backend);
        input::update_mouse(io, &mut self.pointer, backend);
        input::update_wheel(io, backend);
        frame::sequence_frame(io, &mut self.clock, backend);
    }

    /// Applies the widget library's desired cursor visibility to the host.
    pub fn update_cursor<B: Backend>(&self, ui: &Ui, backend: &mut B) {
        input::update_cursor(ui, backend);
    }

    /// Plays back the frame's draw data through the backend.
    pub fn render<B: Backend>(&self, draw_data: &DrawData, backend: &mut B) {
        render::render_draw_data(draw_data, backend);
    }

    /// Releases the atlas texture (if this controller uploaded it) and
    /// resets the clock.
    pub fn shutdown<B: Backend>(&mut self, ctx: &mut Context, backend: &mut B) {
        self.atlas.shutdown(ctx, backend);
        self.clock.reset();
        tracing::info!("imgui controller shut down");
    }

    /// Returns true if this controller owns the uploaded atlas texture.
    #[must_use]
    pub fn atlas_loaded(&self) -> bool {
        self.atlas.is_loaded()
    }

    /// Last pointer position reported to the widget library.
    #[must_use]
    pub fn pointer_position(&self) -> [f32; 2] {
        self.pointer.position()
    }
}
