//! Standalone demo: opens a window with the press button.
//!
//! Pass a JSON config path as the first argument to change the reveal timing
//! or palette. Set `RUST_LOG=floem_hold=debug` to follow presses.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hold::{press_button, PressConfig};
use tracing_subscriber::EnvFilter;

fn main() -> floem_hold::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PressConfig::load(path)?,
        None => PressConfig::default(),
    };
    let timing = config.reveal_timing();
    let palette = config.palette()?;
    tracing::info!(
        stage_delay_ms = timing.stage_delay.as_millis() as u64,
        names = palette.len(),
        "Starting press demo"
    );

    floem::Application::new()
        .window(
            move |_| {
                press_button(timing, palette.clone()).on_event_stop(
                    floem::event::EventListener::WindowClosed,
                    |_| floem::quit_app(),
                )
            },
            Some(
                WindowConfig::default()
                    .size((480.0, 560.0))
                    .title("floem-hold"),
            ),
        )
        .run();

    Ok(())
}
