//! Islet - a dynamic-island style call indicator
//! Built with iced, morphing between a compact pill and a call panel

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod motion;
mod ui;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Load and validate the motion scene before the event loop starts.
    // A malformed resource or a slot missing from either constraint set
    // is fatal here rather than a silent mis-render later.
    let scene = motion::MotionScene::load().context("failed to load motion scene")?;
    tracing::info!("motion scene loaded, {} slots validated", scene.slot_count());

    iced::application(
        move || app::App::new(scene.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .window_size(iced::Size::new(app::STAGE_WIDTH, app::STAGE_HEIGHT))
    .antialiasing(true)
    .run()
    .context("event loop error")?;

    Ok(())
}
