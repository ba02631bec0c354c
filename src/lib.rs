pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use controllers::snowflake::{SnowflakeController, SnowflakeControllerError};
pub use crate::core::actions::generate_snowflake::initial_triangle::initial_triangle;
pub use crate::core::actions::generate_snowflake::refine::refine;
pub use crate::core::actions::generate_snowflake::refine_parallel_rayon::refine_parallel_rayon;
pub use crate::core::actions::rasterize::polyline::polyline_points;
pub use crate::core::actions::rasterize::supersample::{SupersampleRasterizer, render_supersampled};
pub use crate::core::data::boundary::Boundary;
pub use crate::core::data::vec2::Vec2;
pub use crate::core::snowflake::render_mode::RenderMode;
pub use crate::core::snowflake::snowflake_config::SnowflakeConfig;
#[cfg(feature = "gui")]
pub use input::gui::RunGuiCommand;
pub use presenters::frame_buffer::FrameBufferSurface;
