//! Port definitions for the snowflake controller.
//!
//! Traits here describe what the controller needs from the outside world;
//! presenters implement them.

pub mod display_surface;
