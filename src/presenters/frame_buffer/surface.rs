use std::thread;
use std::time::Duration;

use log::debug;

use crate::controllers::ports::display_surface::DisplaySurfacePort;
use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::point::Point;

/// Software display surface. Draws into a back buffer and copies it to the
/// front buffer on `present`. Pixels outside the frame are clipped.
#[derive(Debug)]
pub struct FrameBufferSurface {
    back: FrameBuffer,
    front: FrameBuffer,
    frames_presented: u64,
    sleep_on_pause: bool,
}

impl FrameBufferSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, FrameBufferError> {
        let back = FrameBuffer::new(width, height)?;
        let front = back.clone();

        Ok(Self {
            back,
            front,
            frames_presented: 0,
            sleep_on_pause: true,
        })
    }

    /// Makes `pause` return immediately.
    #[must_use]
    pub fn without_pauses(mut self) -> Self {
        self.sleep_on_pause = false;
        self
    }

    /// The last presented frame.
    #[must_use]
    pub fn presented(&self) -> &FrameBuffer {
        &self.front
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn plot(&mut self, point: Point, colour: Colour) -> Result<(), FrameBufferError> {
        if self.back.contains(point) {
            self.back.set_pixel(point, colour)?;
        }

        Ok(())
    }

    /// Bresenham's line, endpoints included.
    fn draw_line(&mut self, from: Point, to: Point, colour: Colour) -> Result<(), FrameBufferError> {
        let (mut x, mut y) = (i64::from(from.x), i64::from(from.y));
        let (x1, y1) = (i64::from(to.x), i64::from(to.y));

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let step_x = if x < x1 { 1 } else { -1 };
        let step_y = if y < y1 { 1 } else { -1 };
        let mut error = dx + dy;

        loop {
            self.plot(
                Point {
                    x: x as i32,
                    y: y as i32,
                },
                colour,
            )?;

            if x == x1 && y == y1 {
                return Ok(());
            }

            let doubled = 2 * error;

            if doubled >= dy {
                error += dy;
                x += step_x;
            }

            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }
}

impl DisplaySurfacePort for FrameBufferSurface {
    type Failure = FrameBufferError;

    fn clear(&mut self, colour: Colour) -> Result<(), Self::Failure> {
        self.back.fill(colour);
        Ok(())
    }

    fn draw_polyline(&mut self, points: &[Point], colour: Colour) -> Result<(), Self::Failure> {
        if let [single] = points {
            return self.plot(*single, colour);
        }

        for segment in points.windows(2) {
            self.draw_line(segment[0], segment[1], colour)?;
        }

        Ok(())
    }

    fn draw_points(&mut self, points: &[Point], colour: Colour) -> Result<(), Self::Failure> {
        for &point in points {
            self.plot(point, colour)?;
        }

        Ok(())
    }

    fn present(&mut self) -> Result<(), Self::Failure> {
        self.front.clone_from(&self.back);
        self.frames_presented += 1;
        debug!("Presented frame {}", self.frames_presented);
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        if self.sleep_on_pause {
            thread::sleep(duration);
        }
    }
}
