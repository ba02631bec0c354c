use std::f64::consts::PI;

use crate::core::actions::generate_snowflake::errors::GenerateSnowflakeError;
use crate::core::data::boundary::Boundary;
use crate::core::data::vec2::Vec2;
use crate::core::data::vertex::Vertex;

/// Builds the level 0 boundary: an equilateral triangle whose vertices all sit
/// `radius` away from `centre`, with the first vertex directly above it.
///
/// Vertices are emitted top, bottom-left, bottom-right in screen coordinates
/// (`y` grows downwards). Every vertex carries `centre` as its reference
/// centre.
pub fn initial_triangle(centre: Vec2, radius: f64) -> Result<Boundary, GenerateSnowflakeError> {
    if !centre.is_finite() {
        return Err(GenerateSnowflakeError::NonFiniteCentre { centre });
    }

    if !radius.is_finite() || radius <= 0.0 {
        return Err(GenerateSnowflakeError::InvalidRadius { radius });
    }

    // Cosine rule across the 120 degree angle between two centre-to-vertex spokes.
    let side_length =
        (radius.powi(2) + radius.powi(2) - 2.0 * radius * radius * (120.0 * PI / 180.0).cos()).sqrt();

    // Half the base, the height and one side form a right-angled triangle.
    let height = (side_length.powi(2) - (side_length / 2.0).powi(2)).sqrt();

    let top_y = centre.y - radius;
    let base_y = top_y + height;

    let vertices = vec![
        Vertex::new(Vec2::new(centre.x, top_y), centre),
        Vertex::new(Vec2::new(centre.x - side_length / 2.0, base_y), centre),
        Vertex::new(Vec2::new(centre.x + side_length / 2.0, base_y), centre),
    ];

    Ok(Boundary::new(vertices)?)
}
