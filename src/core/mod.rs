pub mod actions;
pub mod data;
pub mod snowflake;
