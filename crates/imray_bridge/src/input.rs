//! Input Adapter: host device state into the widget library, every frame.
//!
//! All writes land in the widget library's IO object before
//! `Context::new_frame`, so layout and hit-testing see current input. Host
//! queries that come back empty are normal empty input, not errors.

use imgui::{ConfigFlags, Io, Ui};

use crate::backend::{Backend, HostMouseButton};
use crate::keymap::KEY_MAP;

/// Pointer position cache, frozen while the window is minimized.
///
/// Minimized hosts report a spurious (0,0); the widget library keeps seeing
/// the last pre-minimize position instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    position: [f32; 2],
}

impl PointerState {
    /// Last known pointer position.
    #[must_use]
    pub fn position(&self) -> [f32; 2] {
        self.position
    }
}

/// Scans the key table and forwards key and text events.
///
/// A held key re-emits a down event each frame (the widget library
/// coalesces repeats); the release edge fires exactly once because the host
/// reports it for a single frame.
pub fn process_events<B: Backend>(io: &mut Io, backend: &mut B) {
    for &(host, key) in KEY_MAP {
        if backend.is_key_down(host) {
            io.add_key_event(key, true);
        } else if backend.is_key_released(host) {
            io.add_key_event(key, false);
        }
    }

    if let Some(ch) = backend.typed_char() {
        tracing::trace!(codepoint = ch as u32, "text input");
        io.add_input_character(ch);
    }
}

/// Updates mouse buttons and pointer position, honoring warp requests.
pub fn update_mouse<B: Backend>(io: &mut Io, pointer: &mut PointerState, backend: &mut B) {
    if io.want_set_mouse_pos {
        backend.warp_mouse(io.mouse_pos[0], io.mouse_pos[1]);
    }

    io.mouse_down[0] = backend.is_mouse_button_down(HostMouseButton::Left);
    io.mouse_down[1] = backend.is_mouse_button_down(HostMouseButton::Right);
    io.mouse_down[2] = backend.is_mouse_button_down(HostMouseButton::Middle);

    if !backend.is_window_minimized() {
        pointer.position = backend.mouse_position();
    }
    io.mouse_pos = pointer.position;
}

/// Accumulates wheel movement, sign only: one step up or down per frame
/// regardless of the raw magnitude the host reports.
pub fn update_wheel<B: Backend>(io: &mut Io, backend: &B) {
    io.mouse_wheel += wheel_step(backend.mouse_wheel_move());
}

fn wheel_step(raw: f32) -> f32 {
    if raw > 0.0 {
        1.0
    } else if raw < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Applies the widget library's desired cursor mode to the host.
///
/// Needs a live frame because the desired cursor shape is only exposed on
/// [`Ui`]. Skipped entirely when cursor changes are suppressed by
/// configuration; hidden when the library draws its own cursor or wants
/// none at all.
pub fn update_cursor<B: Backend>(ui: &Ui, backend: &mut B) {
    if ui.io().config_flags.contains(ConfigFlags::NO_MOUSE_CURSOR_CHANGE) {
        return;
    }

    if ui.io().mouse_draw_cursor || ui.mouse_cursor().is_none() {
        backend.hide_cursor();
    } else {
        backend.show_cursor();
    }
}
