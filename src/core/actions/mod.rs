pub mod generate_snowflake;
pub mod rasterize;
