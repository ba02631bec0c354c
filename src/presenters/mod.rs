pub mod frame_buffer;
#[cfg(feature = "gui")]
pub mod pixels;
