use std::error::Error;
use std::time::Duration;

use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Where finished levels are drawn.
pub trait DisplaySurfacePort {
    type Failure: Error + 'static;

    fn clear(&mut self, colour: Colour) -> Result<(), Self::Failure>;

    /// Draws segments between consecutive points.
    fn draw_polyline(&mut self, points: &[Point], colour: Colour) -> Result<(), Self::Failure>;

    fn draw_points(&mut self, points: &[Point], colour: Colour) -> Result<(), Self::Failure>;

    fn present(&mut self) -> Result<(), Self::Failure>;

    fn pause(&mut self, duration: Duration);
}
