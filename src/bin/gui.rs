use koch_snowflake::{RenderMode, RunGuiCommand, SnowflakeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SnowflakeConfig::default().with_render_mode(RenderMode::from_args(std::env::args_os()));
    let command = RunGuiCommand::new(config);

    command.execute()
}
