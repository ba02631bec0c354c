pub mod errors;
pub mod polyline;
pub mod supersample;
