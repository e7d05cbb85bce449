//! # imray bridge
//!
//! Per-frame glue between Dear ImGui (the `imgui` crate) and a host
//! windowing/rendering library reached through the [`Backend`] trait.
//!
//! ## Frame timeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ONE FRAME                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  1. prepare_frame                                           │
//! │     ├── Input Adapter: keys, text, buttons, pointer, wheel  │
//! │     └── Frame Sequencer: display size, delta time           │
//! │  2. Context::new_frame  (widget library computes layout)    │
//! │     └── update_cursor: host cursor visibility               │
//! │  3. Context::render                                         │
//! │  4. render: draw-list playback                              │
//! │     └── scissor + textured triangles per sub-command        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The bridge holds no hidden global state: timing, the frozen pointer
//! position, and the atlas handle live in [`ImguiController`]. Everything
//! is single-threaded and frame-synchronous.

pub mod atlas;
pub mod backend;
pub mod controller;
pub mod frame;
pub mod input;
pub mod keymap;
pub mod render;

pub use atlas::AtlasState;
pub use backend::{
    Backend, BackendError, BackendResult, HostKey, HostMouseButton, MockBackend, RawTextureId,
    RecordedCall, ScissorRect, TriangleVertex,
};
pub use controller::ImguiController;
pub use frame::{FrameClock, FIRST_FRAME_DELTA};
pub use keymap::KEY_MAP;
pub use render::render_draw_data;
