//! The seam between the bridge and the host library.
//!
//! [`Backend`] is the only way the adapters touch the windowing/rendering
//! side: input queries on one end, immediate-mode draw primitives on the
//! other. Concrete hosts implement it (see `imray_raylib`); tests use
//! [`MockBackend`], which scripts input and records every draw call.

use thiserror::Error;

/// Opaque host texture handle. Zero is reserved for "no texture".
pub type RawTextureId = u32;

/// Errors surfaced by a host backend.
///
/// The adapters themselves cannot fail (spec-level: a missing key press is
/// just "not pressed"); the one genuinely fallible operation is handing a
/// pixel buffer to the host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The host refused or failed the texture upload.
    #[error("texture upload rejected by host: {0}")]
    TextureUpload(String),
}

/// Result type for backend operations.
pub type BackendResult<T> = Result<T, BackendError>;

/// Logical keyboard key on the host side.
///
/// Covers exactly the keys in [`crate::keymap::KEY_MAP`]; anything the host
/// reports outside this set never reaches the widget library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum HostKey {
    Apostrophe,
    Comma,
    Minus,
    Period,
    Slash,
    Zero, One, Two, Three, Four, Five, Six, Seven, Eight, Nine,
    Semicolon,
    Equal,
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Space,
    Escape,
    Enter,
    Tab,
    Backspace,
    Insert,
    Delete,
    Right,
    Left,
    Down,
    Up,
    PageUp,
    PageDown,
    Home,
    End,
    CapsLock,
    ScrollLock,
    NumLock,
    PrintScreen,
    Pause,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    LeftShift,
    LeftControl,
    LeftAlt,
    LeftSuper,
    RightShift,
    RightControl,
    RightAlt,
    RightSuper,
    Menu,
    LeftBracket,
    Backslash,
    RightBracket,
    Grave,
    Kp0, Kp1, Kp2, Kp3, Kp4, Kp5, Kp6, Kp7, Kp8, Kp9,
    KpDecimal,
    KpDivide,
    KpMultiply,
    KpSubtract,
    KpAdd,
    KpEnter,
    KpEqual,
}

/// Mouse button on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostMouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Scissor rectangle in backend screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScissorRect {
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

/// One corner of a UI triangle, already unpacked for the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleVertex {
    /// Screen-space position.
    pub pos: [f32; 2],
    /// Texture coordinates.
    pub uv: [f32; 2],
    /// Color channels in R, G, B, A byte order.
    pub color: [u8; 4],
}

/// Host windowing/rendering interface consumed by the adapters.
///
/// Input queries are best-effort snapshots of the current frame's device
/// state; "nothing pressed" is normal empty input, never an error. Draw
/// primitives are immediate-mode and take effect in call order.
pub trait Backend {
    /// Returns true while the host key is held.
    fn is_key_down(&self, key: HostKey) -> bool;

    /// Returns true on the single frame the host key transitioned to
    /// released.
    fn is_key_released(&self, key: HostKey) -> bool;

    /// Pops the codepoint typed this frame, if any.
    fn typed_char(&mut self) -> Option<char>;

    /// Returns true while the mouse button is held.
    fn is_mouse_button_down(&self, button: HostMouseButton) -> bool;

    /// Current pointer position in screen pixels.
    fn mouse_position(&self) -> [f32; 2];

    /// Moves the host pointer to an absolute screen position.
    fn warp_mouse(&mut self, x: f32, y: f32);

    /// Raw wheel movement reported for this frame. Only the sign is
    /// honored by the bridge.
    fn mouse_wheel_move(&self) -> f32;

    /// Returns true while the host window is minimized.
    fn is_window_minimized(&self) -> bool;

    /// Current display size in pixels.
    fn screen_size(&self) -> [f32; 2];

    /// Monotonic clock in seconds since host startup.
    fn time_seconds(&self) -> f64;

    /// Makes the host cursor visible.
    fn show_cursor(&mut self);

    /// Hides the host cursor.
    fn hide_cursor(&mut self);

    /// Uploads a 32-bit RGBA pixel buffer as a GPU texture and returns its
    /// handle. The backend takes ownership of the buffer.
    fn upload_texture_rgba32(
        &mut self,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> BackendResult<RawTextureId>;

    /// Releases a texture previously returned by
    /// [`Backend::upload_texture_rgba32`].
    fn release_texture(&mut self, id: RawTextureId);

    /// Toggles backface culling for subsequent draws.
    fn set_backface_culling(&mut self, enabled: bool);

    /// Activates scissor clipping, replacing any active rectangle.
    fn begin_scissor(&mut self, rect: ScissorRect);

    /// Deactivates scissor clipping.
    fn end_scissor(&mut self);

    /// Rasterizes one textured triangle in the given vertex order.
    fn draw_triangle(&mut self, texture: RawTextureId, vertices: &[TriangleVertex; 3]);
}

/// A draw call recorded by [`MockBackend`], in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    /// `set_backface_culling` with the given state.
    Culling(bool),
    /// `begin_scissor` with the given rectangle.
    Scissor(ScissorRect),
    /// `end_scissor`.
    EndScissor,
    /// `draw_triangle`.
    Triangle {
        /// Bound texture.
        texture: RawTextureId,
        /// Vertices in submission order.
        vertices: [TriangleVertex; 3],
    },
}

/// Scriptable host for tests: input fields are plain data, draw calls are
/// recorded verbatim.
#[derive(Debug, Default)]
pub struct MockBackend {
    /// Keys currently held.
    pub keys_down: Vec<HostKey>,
    /// Keys released this frame.
    pub keys_released: Vec<HostKey>,
    /// Codepoint typed this frame; consumed by `typed_char`.
    pub pending_char: Option<char>,
    /// Mouse buttons currently held.
    pub buttons_down: Vec<HostMouseButton>,
    /// Pointer position reported to the bridge.
    pub mouse_pos: [f32; 2],
    /// Raw wheel movement for this frame.
    pub wheel_move: f32,
    /// Minimized flag.
    pub minimized: bool,
    /// Display size.
    pub screen: [f32; 2],
    /// Monotonic clock value.
    pub clock: f64,
    /// True after `hide_cursor`, false after `show_cursor`.
    pub cursor_hidden: bool,
    /// Last `warp_mouse` target, if any.
    pub warped_to: Option<[f32; 2]>,
    /// Every draw call, in order.
    pub calls: Vec<RecordedCall>,
    /// Uploaded textures as (id, width, height, byte length).
    pub uploaded: Vec<(RawTextureId, u32, u32, usize)>,
    /// Released texture handles.
    pub released: Vec<RawTextureId>,
    /// When set, `upload_texture_rgba32` fails.
    pub fail_upload: bool,
    next_texture: RawTextureId,
}

impl MockBackend {
    /// Creates a mock with a sane 800x600 display and the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: [800.0, 600.0],
            ..Self::default()
        }
    }

    /// Returns the recorded triangles, in order.
    #[must_use]
    pub fn triangles(&self) -> Vec<(RawTextureId, [TriangleVertex; 3])> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::Triangle { texture, vertices } => Some((*texture, *vertices)),
                _ => None,
            })
            .collect()
    }

    /// Returns the recorded scissor rectangles, in order.
    #[must_use]
    pub fn scissors(&self) -> Vec<ScissorRect> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RecordedCall::Scissor(rect) => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Backend for MockBackend {
    fn is_key_down(&self, key: HostKey) -> bool {
        self.keys_down.contains(&key)
    }

    fn is_key_released(&self, key: HostKey) -> bool {
        self.keys_released.contains(&key)
    }

    fn typed_char(&mut self) -> Option<char> {
        self.pending_char.take()
    }

    fn is_mouse_button_down(&self, button: HostMouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    fn mouse_position(&self) -> [f32; 2] {
        self.mouse_pos
    }

    fn warp_mouse(&mut self, x: f32, y: f32) {
        self.warped_to = Some([x, y]);
    }

    fn mouse_wheel_move(&self) -> f32 {
        self.wheel_move
    }

    fn is_window_minimized(&self) -> bool {
        self.minimized
    }

    fn screen_size(&self) -> [f32; 2] {
        self.screen
    }

    fn time_seconds(&self) -> f64 {
        self.clock
    }

    fn show_cursor(&mut self) {
        self.cursor_hidden = false;
    }

    fn hide_cursor(&mut self) {
        self.cursor_hidden = true;
    }

    fn upload_texture_rgba32(
        &mut self,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> BackendResult<RawTextureId> {
        if self.fail_upload {
            return Err(BackendError::TextureUpload("mock upload failure".into()));
        }
        self.next_texture += 1;
        self.uploaded
            .push((self.next_texture, width, height, pixels.len()));
        Ok(self.next_texture)
    }

    fn release_texture(&mut self, id: RawTextureId) {
        self.released.push(id);
    }

    fn set_backface_culling(&mut self, enabled: bool) {
        self.calls.push(RecordedCall::Culling(enabled));
    }

    fn begin_scissor(&mut self, rect: ScissorRect) {
        self.calls.push(RecordedCall::Scissor(rect));
    }

    fn end_scissor(&mut self) {
        self.calls.push(RecordedCall::EndScissor);
    }

    fn draw_triangle(&mut self, texture: RawTextureId, vertices: &[TriangleVertex; 3]) {
        self.calls.push(RecordedCall::Triangle {
            texture,
            vertices: *vertices,
        });
    }
}
