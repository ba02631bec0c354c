pub mod boundary;
pub mod colour;
pub mod coverage_grid;
pub mod frame_buffer;
pub mod point;
pub mod shade_buckets;
pub mod vec2;
pub mod vertex;
