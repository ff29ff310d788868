use std::time::{Duration, Instant};

use log::info;

use voidfallen::config::{GameConfig, DEFAULT_CONFIG_PATH};
use voidfallen::gui::SdlInventoryView;
use voidfallen::input_system::InputSystem;
use voidfallen::Game;

fn main() -> Result<(), String> {
    // info+ unless RUST_LOG says otherwise
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = GameConfig::load_or_default(&config_path)
        .map_err(|e| format!("Failed to load {}: {}", config_path, e))?;

    let mut game = Game::new(&config).map_err(|e| e.to_string())?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut view = SdlInventoryView::new(canvas, &texture_creator, &config.assets, &config.items);

    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new();
    let frame_time = Duration::from_secs(1) / config.window.fps;

    info!(
        "Window {}x{} at {} fps",
        config.window.width, config.window.height, config.window.fps
    );

    while game.is_running() {
        let frame_start = Instant::now();

        game.handle_actions(input.poll_events(&mut event_pump));
        game.render(&mut view)?;

        // Cap framerate
        if let Some(remaining) = frame_time.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    Ok(())
}
