pub mod frame_scheduler;
pub mod ports;
pub mod snowflake;
