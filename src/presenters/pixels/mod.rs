mod surface;

pub use surface::{PixelsSurface, PixelsSurfaceError};
