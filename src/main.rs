use std::error::Error;

use log::info;

use koch_snowflake::{FrameBufferSurface, RenderMode, SnowflakeConfig, SnowflakeController};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SnowflakeConfig::default().with_render_mode(RenderMode::from_args(std::env::args_os()));
    let surface = FrameBufferSurface::new(config.display_size, config.display_size)?;

    run(config, surface)?;

    Ok(())
}

fn run(config: SnowflakeConfig, surface: FrameBufferSurface) -> Result<usize, Box<dyn Error>> {
    let mut controller = SnowflakeController::new(config, surface)?;

    let shown = controller.run()?;
    info!(
        "Presented {} levels in {} frames",
        shown,
        controller.surface().frames_presented()
    );

    Ok(shown)
}
