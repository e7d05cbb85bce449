//! raylib implementation of the imray [`Backend`] trait.
//!
//! Input queries go through the safe `RaylibHandle` API. The draw side uses
//! rlgl's immediate mode through FFI: one `rlBegin(RL_TRIANGLES)` batch per
//! triangle with per-vertex color, UV, and position, exactly the call
//! sequence the bridge's Render Adapter expects.

use imray_bridge::{
    Backend, BackendError, BackendResult, HostKey, HostMouseButton, RawTextureId, ScissorRect,
    TriangleVertex,
};
use raylib::ffi;
use raylib::prelude::{Color, KeyboardKey, MouseButton, RaylibHandle, RaylibThread, Vector2};

/// Host backend over an initialized raylib window.
///
/// Owns the handle for the lifetime of the window and every texture the
/// bridge uploads; leftover textures are unloaded on drop.
pub struct RaylibBackend {
    rl: RaylibHandle,
    thread: RaylibThread,
    textures: Vec<ffi::Texture>,
}

impl RaylibBackend {
    /// Wraps an initialized raylib window.
    #[must_use]
    pub fn new(rl: RaylibHandle, thread: RaylibThread) -> Self {
        Self {
            rl,
            thread,
            textures: Vec::new(),
        }
    }

    /// True once the host window wants to close (close button or ESC).
    #[must_use]
    pub fn should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    /// Begins host drawing and clears to the given color.
    pub fn begin_frame(&mut self, clear: Color) {
        unsafe {
            ffi::BeginDrawing();
            ffi::ClearBackground(clear.into());
        }
    }

    /// Ends host drawing and presents the frame.
    pub fn end_frame(&mut self) {
        unsafe {
            ffi::EndDrawing();
        }
    }

    /// The raylib thread token, for callers that need the safe draw API.
    #[must_use]
    pub fn thread(&self) -> &RaylibThread {
        &self.thread
    }

    fn map_key(key: HostKey) -> KeyboardKey {
        match key {
            HostKey::Apostrophe => KeyboardKey::KEY_APOSTROPHE,
            HostKey::Comma => KeyboardKey::KEY_COMMA,
            HostKey::Minus => KeyboardKey::KEY_MINUS,
            HostKey::Period => KeyboardKey::KEY_PERIOD,
            HostKey::Slash => KeyboardKey::KEY_SLASH,
            HostKey::Zero => KeyboardKey::KEY_ZERO,
            HostKey::One => KeyboardKey::KEY_ONE,
            HostKey::Two => KeyboardKey::KEY_TWO,
            HostKey::Three => KeyboardKey::KEY_THREE,
            HostKey::Four => KeyboardKey::KEY_FOUR,
            HostKey::Five => KeyboardKey::KEY_FIVE,
            HostKey::Six => KeyboardKey::KEY_SIX,
            HostKey::Seven => KeyboardKey::KEY_SEVEN,
            HostKey::Eight => KeyboardKey::KEY_EIGHT,
            HostKey::Nine => KeyboardKey::KEY_NINE,
            HostKey::Semicolon => KeyboardKey::KEY_SEMICOLON,
            HostKey::Equal => KeyboardKey::KEY_EQUAL,
            HostKey::A => KeyboardKey::KEY_A,
            HostKey::B => KeyboardKey::KEY_B,
            HostKey::C => KeyboardKey::KEY_C,
            HostKey::D => KeyboardKey::KEY_D,
            HostKey::E => KeyboardKey::KEY_E,
            HostKey::F => KeyboardKey::KEY_F,
            HostKey::G => KeyboardKey::KEY_G,
            HostKey::H => KeyboardKey::KEY_H,
            HostKey::I => KeyboardKey::KEY_I,
            HostKey::J => KeyboardKey::KEY_J,
            HostKey::K => KeyboardKey::KEY_K,
            HostKey::L => KeyboardKey::KEY_L,
            HostKey::M => KeyboardKey::KEY_M,
            HostKey::N => KeyboardKey::KEY_N,
            HostKey::O => KeyboardKey::KEY_O,
            HostKey::P => KeyboardKey::KEY_P,
            HostKey::Q => KeyboardKey::KEY_Q,
            HostKey::R => KeyboardKey::KEY_R,
            HostKey::S => KeyboardKey::KEY_S,
            HostKey::T => KeyboardKey::KEY_T,
            HostKey::U => KeyboardKey::KEY_U,
            HostKey::V => KeyboardKey::KEY_V,
            HostKey::W => KeyboardKey::KEY_W,
            HostKey::X => KeyboardKey::KEY_X,
            HostKey::Y => KeyboardKey::KEY_Y,
            HostKey::Z => KeyboardKey::KEY_Z,
            HostKey::Space => KeyboardKey::KEY_SPACE,
            HostKey::Escape => KeyboardKey::KEY_ESCAPE,
            HostKey::Enter => KeyboardKey::KEY_ENTER,
            HostKey::Tab => KeyboardKey::KEY_TAB,
            HostKey::Backspace => KeyboardKey::KEY_BACKSPACE,
            HostKey::Insert => KeyboardKey::KEY_INSERT,
            HostKey::Delete => KeyboardKey::KEY_DELETE,
            HostKey::Right => KeyboardKey::KEY_RIGHT,
            HostKey::Left => KeyboardKey::KEY_LEFT,
            HostKey::Down => KeyboardKey::KEY_DOWN,
            HostKey::Up => KeyboardKey::KEY_UP,
            HostKey::PageUp => KeyboardKey::KEY_PAGE_UP,
            HostKey::PageDown => KeyboardKey::KEY_PAGE_DOWN,
            HostKey::Home => KeyboardKey::KEY_HOME,
            HostKey::End => KeyboardKey::KEY_END,
            HostKey::CapsLock => KeyboardKey::KEY_CAPS_LOCK,
            HostKey::ScrollLock => KeyboardKey::KEY_SCROLL_LOCK,
            HostKey::NumLock => KeyboardKey::KEY_NUM_LOCK,
            HostKey::PrintScreen => KeyboardKey::KEY_PRINT_SCREEN,
            HostKey::Pause => KeyboardKey::KEY_PAUSE,
            HostKey::F1 => KeyboardKey::KEY_F1,
            HostKey::F2 => KeyboardKey::KEY_F2,
            HostKey::F3 => KeyboardKey::KEY_F3,
            HostKey::F4 => KeyboardKey::KEY_F4,
            HostKey::F5 => KeyboardKey::KEY_F5,
            HostKey::F6 => KeyboardKey::KEY_F6,
            HostKey::F7 => KeyboardKey::KEY_F7,
            HostKey::F8 => KeyboardKey::KEY_F8,
            HostKey::F9 => KeyboardKey::KEY_F9,
            HostKey::F10 => KeyboardKey::KEY_F10,
            HostKey::F11 => KeyboardKey::KEY_F11,
            HostKey::F12 => KeyboardKey::KEY_F12,
            HostKey::LeftShift => KeyboardKey::KEY_LEFT_SHIFT,
            HostKey::LeftControl => KeyboardKey::KEY_LEFT_CONTROL,
            HostKey::LeftAlt => KeyboardKey::KEY_LEFT_ALT,
            HostKey::LeftSuper => KeyboardKey::KEY_LEFT_SUPER,
            HostKey::RightShift => KeyboardKey::KEY_RIGHT_SHIFT,
            HostKey::RightControl => KeyboardKey::KEY_RIGHT_CONTROL,
            HostKey::RightAlt => KeyboardKey::KEY_RIGHT_ALT,
            HostKey::RightSuper => KeyboardKey::KEY_RIGHT_SUPER,
            HostKey::Menu => KeyboardKey::KEY_KB_MENU,
            HostKey::LeftBracket => KeyboardKey::KEY_LEFT_BRACKET,
            HostKey::Backslash => KeyboardKey::KEY_BACKSLASH,
            HostKey::RightBracket => KeyboardKey::KEY_RIGHT_BRACKET,
            HostKey::Grave => KeyboardKey::KEY_GRAVE,
            HostKey::Kp0 => KeyboardKey::KEY_KP_0,
            HostKey::Kp1 => KeyboardKey::KEY_KP_1,
            HostKey::Kp2 => KeyboardKey::KEY_KP_2,
            HostKey::Kp3 => KeyboardKey::KEY_KP_3,
            HostKey::Kp4 => KeyboardKey::KEY_KP_4,
            HostKey::Kp5 => KeyboardKey::KEY_KP_5,
            HostKey::Kp6 => KeyboardKey::KEY_KP_6,
            HostKey::Kp7 => KeyboardKey::KEY_KP_7,
            HostKey::Kp8 => KeyboardKey::KEY_KP_8,
            HostKey::Kp9 => KeyboardKey::KEY_KP_9,
            HostKey::KpDecimal => KeyboardKey::KEY_KP_DECIMAL,
            HostKey::KpDivide => KeyboardKey::KEY_KP_DIVIDE,
            HostKey::KpMultiply => KeyboardKey::KEY_KP_MULTIPLY,
            HostKey::KpSubtract => KeyboardKey::KEY_KP_SUBTRACT,
            HostKey::KpAdd => KeyboardKey::KEY_KP_ADD,
            HostKey::KpEnter => KeyboardKey::KEY_KP_ENTER,
            HostKey::KpEqual => KeyboardKey::KEY_KP_EQUAL,
        }
    }

    fn map_button(button: HostMouseButton) -> MouseButton {
        match button {
            HostMouseButton::Left => MouseButton::MOUSE_BUTTON_LEFT,
            HostMouseButton::Right => MouseButton::MOUSE_BUTTON_RIGHT,
            HostMouseButton::Middle => MouseButton::MOUSE_BUTTON_MIDDLE,
        }
    }
}

impl Backend for RaylibBackend {
    fn is_key_down(&self, key: HostKey) -> bool {
        self.rl.is_key_down(Self::map_key(key))
    }

    fn is_key_released(&self, key: HostKey) -> bool {
        self.rl.is_key_released(Self::map_key(key))
    }

    fn typed_char(&mut self) -> Option<char> {
        self.rl.get_char_pressed()
    }

    fn is_mouse_button_down(&self, button: HostMouseButton) -> bool {
        self.rl.is_mouse_button_down(Self::map_button(button))
    }

    fn mouse_position(&self) -> [f32; 2] {
        [self.rl.get_mouse_x() as f32, self.rl.get_mouse_y() as f32]
    }

    fn warp_mouse(&mut self, x: f32, y: f32) {
        self.rl.set_mouse_position(Vector2::new(x, y));
    }

    fn mouse_wheel_move(&self) -> f32 {
        self.rl.get_mouse_wheel_move()
    }

    fn is_window_minimized(&self) -> bool {
        self.rl.is_window_minimized()
    }

    fn screen_size(&self) -> [f32; 2] {
        [
            self.rl.get_screen_width() as f32,
            self.rl.get_screen_height() as f32,
        ]
    }

    fn time_seconds(&self) -> f64 {
        self.rl.get_time()
    }

    fn show_cursor(&mut self) {
        self.rl.show_cursor();
    }

    fn hide_cursor(&mut self) {
        self.rl.hide_cursor();
    }

    fn upload_texture_rgba32(
        &mut self,
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> BackendResult<RawTextureId> {
        let size = width as usize * height as usize * 4;
        if pixels.len() < size {
            return Err(BackendError::TextureUpload(format!(
                "pixel buffer holds {} bytes, {}x{} RGBA needs {}",
                pixels.len(),
                width,
                height,
                size
            )));
        }

        // raylib frees image data with its own allocator, so the pixels are
        // copied into a MemAlloc'd buffer before the upload.
        let texture = unsafe {
            let data = ffi::MemAlloc(size as u32);
            if data.is_null() {
                return Err(BackendError::TextureUpload(
                    "host allocation failed".into(),
                ));
            }
            std::ptr::copy_nonoverlapping(pixels.as_ptr(), data.cast::<u8>(), size);
            let image = ffi::Image {
                data,
                width: width as i32,
                height: height as i32,
                mipmaps: 1,
                format: ffi::PixelFormat::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8 as i32,
            };
            let texture = ffi::LoadTextureFromImage(image);
            ffi::UnloadImage(image);
            texture
        };
        drop(pixels);

        if texture.id == 0 {
            return Err(BackendError::TextureUpload(
                "raylib rejected the image".into(),
            ));
        }
        tracing::debug!(id = texture.id, width, height, "texture uploaded");
        self.textures.push(texture);
        Ok(texture.id)
    }

    fn release_texture(&mut self, id: RawTextureId) {
        if let Some(pos) = self.textures.iter().position(|t| t.id == id) {
            let texture = self.textures.swap_remove(pos);
            unsafe {
                ffi::UnloadTexture(texture);
            }
        }
    }

    fn set_backface_culling(&mut self, enabled: bool) {
        unsafe {
            if enabled {
                ffi::rlEnableBackfaceCulling();
            } else {
                ffi::rlDisableBackfaceCulling();
            }
        }
    }

    fn begin_scissor(&mut self, rect: ScissorRect) {
        unsafe {
            ffi::BeginScissorMode(rect.x, rect.y, rect.width, rect.height);
        }
    }

    fn end_scissor(&mut self) {
        unsafe {
            ffi::EndScissorMode();
        }
    }

    fn draw_triangle(&mut self, texture: RawTextureId, vertices: &[TriangleVertex; 3]) {
        unsafe {
            ffi::rlBegin(ffi::RL_TRIANGLES as i32);
            ffi::rlSetTexture(texture);
            for vertex in vertices {
                ffi::rlColor4ub(
                    vertex.color[0],
                    vertex.color[1],
                    vertex.color[2],
                    vertex.color[3],
                );
                ffi::rlTexCoord2f(vertex.uv[0], vertex.uv[1]);
                ffi::rlVertex2f(vertex.pos[0], vertex.pos[1]);
            }
            ffi::rlSetTexture(0);
            ffi::rlEnd();
        }
    }
}

impl Drop for RaylibBackend {
    fn drop(&mut self) {
        for texture in self.textures.drain(..) {
            unsafe {
                ffi::UnloadTexture(texture);
            }
        }
    }
}
