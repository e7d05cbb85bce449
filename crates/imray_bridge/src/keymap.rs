//! Fixed host-key to widget-key mapping.
//!
//! Pure data: one immutable table, scanned once per frame by the Input
//! Adapter. Keys the host can report but the widget library has no concept
//! of (and vice versa) are simply absent.

use imgui::Key;

use crate::backend::HostKey;

/// The complete keyboard mapping honored by the bridge.
pub const KEY_MAP: &[(HostKey, Key)] = &[
    (HostKey::Apostrophe, Key::Apostrophe),
    (HostKey::Comma, Key::Comma),
    (HostKey::Minus, Key::Minus),
    (HostKey::Period, Key::Period),
    (HostKey::Slash, Key::Slash),
    (HostKey::Zero, Key::Alpha0),
    (HostKey::One, Key::Alpha1),
    (HostKey::Two, Key::Alpha2),
    (HostKey::Three, Key::Alpha3),
    (HostKey::Four, Key::Alpha4),
    (HostKey::Five, Key::Alpha5),
    (HostKey::Six, Key::Alpha6),
    (HostKey::Seven, Key::Alpha7),
    (HostKey::Eight, Key::Alpha8),
    (HostKey::Nine, Key::Alpha9),
    (HostKey::Semicolon, Key::Semicolon),
    (HostKey::Equal, Key::Equal),
    (HostKey::A, Key::A),
    (HostKey::B, Key::B),
    (HostKey::C, Key::C),
    (HostKey::D, Key::D),
    (HostKey::E, Key::E),
    (HostKey::F, Key::F),
    (HostKey::G, Key::G),
    (HostKey::H, Key::H),
    (HostKey::I, Key::I),
    (HostKey::J, Key::J),
    (HostKey::K, Key::K),
    (HostKey::L, Key::L),
    (HostKey::M, Key::M),
    (HostKey::N, Key::N),
    (HostKey::O, Key::O),
    (HostKey::P, Key::P),
    (HostKey::Q, Key::Q),
    (HostKey::R, Key::R),
    (HostKey::S, Key::S),
    (HostKey::T, Key::T),
    (HostKey::U, Key::U),
    (HostKey::V, Key::V),
    (HostKey::W, Key::W),
    (HostKey::X, Key::X),
    (HostKey::Y, Key::Y),
    (HostKey::Z, Key::Z),
    (HostKey::Space, Key::Space),
    (HostKey::Escape, Key::Escape),
    (HostKey::Enter, Key::Enter),
    (HostKey::Tab, Key::Tab),
    (HostKey::Backspace, Key::Backspace),
    (HostKey::Insert, Key::Insert),
    (HostKey::Delete, Key::Delete),
    (HostKey::Right, Key::RightArrow),
    (HostKey::Left, Key::LeftArrow),
    (HostKey::Down, Key::DownArrow),
    (HostKey::Up, Key::UpArrow),
    (HostKey::PageUp, Key::PageUp),
    (HostKey::PageDown, Key::PageDown),
    (HostKey::Home, Key::Home),
    (HostKey::End, Key::End),
    (HostKey::CapsLock, Key::CapsLock),
    (HostKey::ScrollLock, Key::ScrollLock),
    (HostKey::NumLock, Key::NumLock),
    (HostKey::PrintScreen, Key::PrintScreen),
    (HostKey::Pause, Key::Pause),
    (HostKey::F1, Key::F1),
    (HostKey::F2, Key::F2),
    (HostKey::F3, Key::F3),
    (HostKey::F4, Key::F4),
    (HostKey::F5, Key::F5),
    (HostKey::F6, Key::F6),
    (HostKey::F7, Key::F7),
    (HostKey::F8, Key::F8),
    (HostKey::F9, Key::F9),
    (HostKey::F10, Key::F10),
    (HostKey::F11, Key::F11),
    (HostKey::F12, Key::F12),
    (HostKey::LeftShift, Key::LeftShift),
    (HostKey::LeftControl, Key::LeftCtrl),
    (HostKey::LeftAlt, Key::LeftAlt),
    (HostKey::LeftSuper, Key::LeftSuper),
    (HostKey::RightShift, Key::RightShift),
    (HostKey::RightControl, Key::RightCtrl),
    (HostKey::RightAlt, Key::RightAlt),
    (HostKey::RightSuper, Key::RightSuper),
    (HostKey::Menu, Key::Menu),
    (HostKey::LeftBracket, Key::LeftBracket),
    (HostKey::Backslash, Key::Backslash),
    (HostKey::RightBracket, Key::RightBracket),
    (HostKey::Grave, Key::GraveAccent),
    (HostKey::Kp0, Key::Keypad0),
    (HostKey::Kp1, Key::Keypad1),
    (HostKey::Kp2, Key::Keypad2),
    (HostKey::Kp3, Key::Keypad3),
    (HostKey::Kp4, Key::Keypad4),
    (HostKey::Kp5, Key::Keypad5),
    (HostKey::Kp6, Key::Keypad6),
    (HostKey::Kp7, Key::Keypad7),
    (HostKey::Kp8, Key::Keypad8),
    (HostKey::Kp9, Key::Keypad9),
    (HostKey::KpDecimal, Key::KeypadDecimal),
    (HostKey::KpDivide, Key::KeypadDivide),
    (HostKey::KpMultiply, Key::KeypadMultiply),
    (HostKey::KpSubtract, Key::KeypadSubtract),
    (HostKey::KpAdd, Key::KeypadAdd),
    (HostKey::KpEnter, Key::KeypadEnter),
    (HostKey::KpEqual, Key::KeypadEqual),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_covers_full_keyboard() {
        assert_eq!(KEY_MAP.len(), 105);
    }

    #[test]
    fn test_no_duplicate_host_keys() {
        for (i, (host, _)) in KEY_MAP.iter().enumerate() {
            for (other, _) in &KEY_MAP[i + 1..] {
                assert_ne!(host, other, "host key mapped twice");
            }
        }
    }

    #[test]
    fn test_no_duplicate_widget_keys() {
        for (i, (_, key)) in KEY_MAP.iter().enumerate() {
            for (_, other) in &KEY_MAP[i + 1..] {
                assert_ne!(key, other, "widget key mapped twice");
            }
        }
    }
}
