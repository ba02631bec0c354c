use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    InvalidSize { width: u32, height: u32 },
    PixelOutsideBounds { pixel: Point, width: u32, height: u32 },
    RgbaLengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "frame buffer size must be positive: {}x{}", width, height)
            }
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} frame",
                    pixel.x, pixel.y, width, height
                )
            }
            Self::RgbaLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "rgba target length {} does not match expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

pub type FrameBufferData = Vec<u8>;

/// Packed RGB frame, 3 bytes per pixel, row-major.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    buffer: FrameBufferData,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameBufferError> {
        if width == 0 || height == 0 {
            return Err(FrameBufferError::InvalidSize { width, height });
        }

        Ok(Self {
            width,
            height,
            buffer: vec![0; (width as usize) * (height as usize) * 3],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &FrameBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn contains(&self, pixel: Point) -> bool {
        pixel.x >= 0 && pixel.y >= 0 && (pixel.x as u32) < self.width && (pixel.y as u32) < self.height
    }

    pub fn fill(&mut self, colour: Colour) {
        for pixel in self.buffer.chunks_exact_mut(3) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
        }
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), FrameBufferError> {
        let index = self.index(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, FrameBufferError> {
        let index = self.index(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    /// Expands the frame into `dst` as RGBA with full alpha.
    pub fn copy_to_rgba(&self, dst: &mut [u8]) -> Result<(), FrameBufferError> {
        let expected = (self.buffer.len() / 3) * 4;

        if dst.len() != expected {
            return Err(FrameBufferError::RgbaLengthMismatch {
                expected,
                actual: dst.len(),
            });
        }

        for (src_pixel, dst_pixel) in self.buffer.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
            dst_pixel[..3].copy_from_slice(src_pixel);
            dst_pixel[3] = 255;
        }

        Ok(())
    }

    fn index(&self, pixel: Point) -> Result<usize, FrameBufferError> {
        if !self.contains(pixel) {
            return Err(FrameBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok(((pixel.y as usize) * (self.width as usize) + pixel.x as usize) * 3)
    }
}
