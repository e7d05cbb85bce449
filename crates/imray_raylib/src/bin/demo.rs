//! Demo window: a text area, a button, and an alert popup, rendered by
//! Dear ImGui through the raylib backend.

use imgui::{Condition, Context};
use imray_bridge::ImguiController;
use imray_raylib::RaylibBackend;
use raylib::prelude::Color;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (mut rl, thread) = raylib::init().size(1000, 720).title("imray demo").build();
    rl.set_target_fps(60);
    let mut backend = RaylibBackend::new(rl, thread);

    let mut ctx = Context::create();
    ctx.set_ini_filename(None::<std::path::PathBuf>);
    let mut controller = ImguiController::new(&mut ctx, &mut backend)?;

    let mut text = String::from("Enter your text here...");

    while !backend.should_close() {
        controller.prepare_frame(&mut ctx, &mut backend);

        let ui = ctx.new_frame();
        ui.window("imray demo")
            .size([560.0, 300.0], Condition::FirstUseEver)
            .build(|| {
                ui.input_text_multiline("##text_area", &mut text, [500.0, 200.0])
                    .build();
                if ui.button("Click me!") {
                    ui.open_popup("Alert");
                }
                ui.popup("Alert", || {
                    ui.text(format!("Button clicked,\ntext area content: {text}."));
                });
            });
        controller.update_cursor(ui, &mut backend);

        backend.begin_frame(Color::GRAY);
        let draw_data = ctx.render();
        controller.render(draw_data, &mut backend);
        backend.end_frame();
    }

    controller.shutdown(&mut ctx, &mut backend);
    Ok(())
}
