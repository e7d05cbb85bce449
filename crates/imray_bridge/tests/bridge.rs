//! End-to-end adapter tests against a real Dear ImGui context.
//!
//! Dear ImGui allows a single context per process, so every test takes the
//! context lock for its whole body and drops its context before releasing.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use imgui::{ConfigFlags, Condition, Context, Key};
use imray_bridge::backend::RecordedCall;
use imray_bridge::{HostKey, HostMouseButton, ImguiController, MockBackend, FIRST_FRAME_DELTA};

static CTX_LOCK: Mutex<()> = Mutex::new(());

fn ctx_lock() -> MutexGuard<'static, ()> {
    CTX_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

fn test_context() -> Context {
    let mut ctx = Context::create();
    ctx.set_ini_filename(None::<PathBuf>);
    ctx
}

#[test]
fn test_first_frame_delta_is_one_sixtieth() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();
    mock.clock = 5.0;

    let mut controller = ImguiController::new(&mut ctx, &mut mock).unwrap();
    controller.prepare_frame(&mut ctx, &mut mock);
    assert_eq!(ctx.io().delta_time, FIRST_FRAME_DELTA);
    assert_eq!(ctx.io().display_size, [800.0, 600.0]);

    mock.clock = 5.1;
    controller.prepare_frame(&mut ctx, &mut mock);
    assert!((ctx.io().delta_time - 0.1).abs() < 1e-5);
}

#[test]
fn test_wheel_accumulates_sign_only() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();
    let mut controller = ImguiController::new(&mut ctx, &mut mock).unwrap();

    mock.wheel_move = 3.7;
    controller.prepare_frame(&mut ctx, &mut mock);
    assert_eq!(ctx.io().mouse_wheel, 1.0);

    mock.clock += 0.016;
    mock.wheel_move = -0.2;
    controller.prepare_frame(&mut ctx, &mut mock);
    assert_eq!(ctx.io().mouse_wheel, 0.0);
}

#[test]
fn test_pointer_frozen_while_minimized() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();
    let mut controller = ImguiController::new(&mut ctx, &mut mock).unwrap();

    mock.mouse_pos = [10.0, 20.0];
    controller.prepare_frame(&mut ctx, &mut mock);
    assert_eq!(ctx.io().mouse_pos, [10.0, 20.0]);

    // Minimized hosts report (0,0); the bridge must keep the last value.
    mock.minimized = true;
    mock.mouse_pos = [0.0, 0.0];
    for _ in 0..3 {
        mock.clock += 0.016;
        controller.prepare_frame(&mut ctx, &mut mock);
        assert_eq!(ctx.io().mouse_pos, [10.0, 20.0]);
    }

    mock.minimized = false;
    mock.mouse_pos = [30.0, 40.0];
    mock.clock += 0.016;
    controller.prepare_frame(&mut ctx, &mut mock);
    assert_eq!(ctx.io().mouse_pos, [30.0, 40.0]);
}

#[test]
fn test_mouse_buttons_written_per_slot() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();
    let mut controller = ImguiController::new(&mut ctx, &mut mock).unwrap();

    mock.buttons_down = vec![HostMouseButton::Left, HostMouseButton::Middle];
    controller.prepare_frame(&mut ctx, &mut mock);
    assert!(ctx.io().mouse_down[0]);
    assert!(!ctx.io().mouse_down[1]);
    assert!(ctx.io().mouse_down[2]);
}

#[test]
fn test_warp_request_forwarded_to_host() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();
    let mut controller = ImguiController::new(&mut ctx, &mut mock).unwrap();

    ctx.io_mut().want_set_mouse_pos = true;
    ctx.io_mut().mouse_pos = [40.0, 50.0];
    controller.prepare_frame(&mut ctx, &mut mock);
    assert_eq!(mock.warped_to, Some([40.0, 50.0]));
}

#[test]
fn test_typed_codepoint_consumed_from_host() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();
    let mut controller = ImguiController::new(&mut ctx, &mut mock).unwrap();

    mock.pending_char = Some('é');
    controller.prepare_frame(&mut ctx, &mut mock);
    assert_eq!(mock.pending_char, None);
}

#[test]
fn test_held_key_reaches_widget_library_and_release_clears_it() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();
    let mut controller = ImguiController::new(&mut ctx, &mut mock).unwrap();

    mock.keys_down = vec![HostKey::A];
    controller.prepare_frame(&mut ctx, &mut mock);
    let ui = ctx.new_frame();
    assert!(ui.is_key_down(Key::A));
    ctx.render();

    mock.keys_down.clear();
    mock.keys_released = vec![HostKey::A];
    mock.clock += 0.016;
    controller.prepare_frame(&mut ctx, &mut mock);
    let ui = ctx.new_frame();
    assert!(!ui.is_key_down(Key::A));
    ctx.render();
}

#[test]
fn test_atlas_uploaded_exactly_once_across_constructions() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();

    let mut first = ImguiController::new(&mut ctx, &mut mock).unwrap();
    assert_eq!(mock.uploaded.len(), 1);
    assert!(first.atlas_loaded());
    assert_ne!(ctx.fonts().tex_id.id(), 0);

    // Re-entry is a no-op and does not take ownership.
    let mut second = ImguiController::new(&mut ctx, &mut mock).unwrap();
    assert_eq!(mock.uploaded.len(), 1);
    assert!(!second.atlas_loaded());

    second.shutdown(&mut ctx, &mut mock);
    assert!(mock.released.is_empty());

    first.shutdown(&mut ctx, &mut mock);
    assert_eq!(mock.released, vec![mock.uploaded[0].0]);
    assert_eq!(ctx.fonts().tex_id.id(), 0);
    assert!(!first.atlas_loaded());
}

#[test]
fn test_atlas_upload_failure_propagates() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();
    mock.fail_upload = true;
    assert!(ImguiController::new(&mut ctx, &mut mock).is_err());
}

#[test]
fn test_frame_playback_brackets_culling_and_scissor() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();
    let mut controller = ImguiController::new(&mut ctx, &mut mock).unwrap();
    let atlas_texture = mock.uploaded[0].0;

    controller.prepare_frame(&mut ctx, &mut mock);
    let ui = ctx.new_frame();
    ui.window("playback")
        .position([0.0, 0.0], Condition::Always)
        .size([200.0, 100.0], Condition::Always)
        .build(|| {
            ui.text("bridge");
        });
    let draw_data = ctx.render();

    controller.render(draw_data, &mut mock);

    assert_eq!(mock.calls.first(), Some(&RecordedCall::Culling(false)));
    assert_eq!(mock.calls.last(), Some(&RecordedCall::Culling(true)));
    assert_eq!(
        mock.calls.get(mock.calls.len() - 2),
        Some(&RecordedCall::EndScissor)
    );

    let triangles = mock.triangles();
    assert!(!triangles.is_empty());
    // Everything in this frame samples the font atlas.
    assert!(triangles.iter().all(|(texture, _)| *texture == atlas_texture));
    assert!(mock
        .scissors()
        .iter()
        .all(|rect| rect.width >= 0 && rect.height >= 0));
}

#[test]
fn test_cursor_hidden_when_widget_library_draws_its_own() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();
    let mut controller = ImguiController::new(&mut ctx, &mut mock).unwrap();

    ctx.io_mut().mouse_draw_cursor = true;
    controller.prepare_frame(&mut ctx, &mut mock);
    let ui = ctx.new_frame();
    controller.update_cursor(ui, &mut mock);
    assert!(mock.cursor_hidden);
    ctx.render();

    ctx.io_mut().mouse_draw_cursor = false;
    mock.clock += 0.016;
    controller.prepare_frame(&mut ctx, &mut mock);
    let ui = ctx.new_frame();
    controller.update_cursor(ui, &mut mock);
    assert!(!mock.cursor_hidden);
    ctx.render();
}

#[test]
fn test_cursor_pass_skipped_when_changes_suppressed() {
    let _guard = ctx_lock();
    let mut ctx = test_context();
    let mut mock = MockBackend::new();
    let mut controller = ImguiController::new(&mut ctx, &mut mock).unwrap();

    ctx.io_mut().config_flags |= ConfigFlags::NO_MOUSE_CURSOR_CHANGE;
    ctx.io_mut().mouse_draw_cursor = true;
    controller.prepare_frame(&mut ctx, &mut mock);
    let ui = ctx.new_frame();
    controller.update_cursor(ui, &mut mock);
    // Without the flag this frame would hide the cursor.
    assert!(!mock.cursor_hidden);
    ctx.render();
}
