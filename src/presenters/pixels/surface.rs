use std::error::Error;
use std::fmt;
use std::time::Duration;

use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::controllers::ports::display_surface::DisplaySurfacePort;
use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::FrameBufferError;
use crate::core::data::point::Point;
use crate::presenters::frame_buffer::FrameBufferSurface;

#[derive(Debug)]
pub enum PixelsSurfaceError {
    FrameBuffer(FrameBufferError),
    Pixels(pixels::Error),
    Texture(pixels::TextureError),
}

impl fmt::Display for PixelsSurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameBuffer(err) => write!(f, "frame buffer error: {}", err),
            Self::Pixels(err) => write!(f, "pixels error: {}", err),
            Self::Texture(err) => write!(f, "surface texture error: {}", err),
        }
    }
}

impl Error for PixelsSurfaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FrameBuffer(err) => Some(err),
            Self::Pixels(err) => Some(err),
            Self::Texture(err) => Some(err),
        }
    }
}

impl From<FrameBufferError> for PixelsSurfaceError {
    fn from(err: FrameBufferError) -> Self {
        Self::FrameBuffer(err)
    }
}

impl From<pixels::Error> for PixelsSurfaceError {
    fn from(err: pixels::Error) -> Self {
        Self::Pixels(err)
    }
}

impl From<pixels::TextureError> for PixelsSurfaceError {
    fn from(err: pixels::TextureError) -> Self {
        Self::Texture(err)
    }
}

/// Window-backed display surface. Frames are drawn in software and uploaded
/// to the `pixels` framebuffer on `present`.
pub struct PixelsSurface {
    pixels: Pixels<'static>,
    canvas: FrameBufferSurface,
}

impl PixelsSurface {
    pub fn new(window: &'static Window, display_size: u32) -> Result<Self, PixelsSurfaceError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(display_size, display_size, surface_texture)?;

        Ok(Self {
            pixels,
            canvas: FrameBufferSurface::new(display_size, display_size)?,
        })
    }

    /// Re-renders the last uploaded frame, e.g. after the window is exposed.
    pub fn redraw(&self) -> Result<(), PixelsSurfaceError> {
        Ok(self.pixels.render()?)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PixelsSurfaceError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        Ok(self.pixels.resize_surface(width, height)?)
    }
}

impl DisplaySurfacePort for PixelsSurface {
    type Failure = PixelsSurfaceError;

    fn clear(&mut self, colour: Colour) -> Result<(), Self::Failure> {
        Ok(self.canvas.clear(colour)?)
    }

    fn draw_polyline(&mut self, points: &[Point], colour: Colour) -> Result<(), Self::Failure> {
        Ok(self.canvas.draw_polyline(points, colour)?)
    }

    fn draw_points(&mut self, points: &[Point], colour: Colour) -> Result<(), Self::Failure> {
        Ok(self.canvas.draw_points(points, colour)?)
    }

    fn present(&mut self) -> Result<(), Self::Failure> {
        self.canvas.present()?;
        self.canvas.presented().copy_to_rgba(self.pixels.frame_mut())?;
        self.redraw()
    }

    fn pause(&mut self, duration: Duration) {
        self.canvas.pause(duration);
    }
}
