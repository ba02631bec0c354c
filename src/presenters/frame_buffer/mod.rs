mod surface;

pub use surface::FrameBufferSurface;
