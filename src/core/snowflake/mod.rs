pub mod levels;
pub mod render_mode;
pub mod snowflake_config;
