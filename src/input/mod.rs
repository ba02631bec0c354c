//! Input adapters for the snowflake viewer.

#[cfg(feature = "gui")]
pub mod gui;
