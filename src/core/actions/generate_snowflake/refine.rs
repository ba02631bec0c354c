use crate::core::actions::generate_snowflake::errors::GenerateSnowflakeError;
use crate::core::data::boundary::Boundary;
use crate::core::data::vec2::Vec2;
use crate::core::data::vertex::Vertex;

/// The equilateral bump raised on the middle third of one edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeBump {
    /// One third of the way along the edge.
    pub p1: Vec2,
    /// Outward apex of the bump.
    pub tip: Vec2,
    /// Rejected apex on the other side of the edge.
    pub inward: Vec2,
    /// Two thirds of the way along the edge.
    pub p3: Vec2,
    /// Midpoint of `p1` and `p3`.
    pub midpoint: Vec2,
    pub height: f64,
}

impl EdgeBump {
    /// The four vertices that replace the edge starting at `start`.
    ///
    /// `p1` and the tip are anchored on the bump's base midpoint, so the next
    /// level pushes their edges away from this bump. `p3` keeps the edge's
    /// original centre since the edge after it continues the old side.
    #[must_use]
    pub fn vertices(&self, start: &Vertex) -> [Vertex; 4] {
        [
            *start,
            Vertex::new(self.p1, self.midpoint),
            Vertex::new(self.tip, self.midpoint),
            Vertex::new(self.p3, start.centre),
        ]
    }
}

/// Computes the bump for the edge `start` -> `end`, choosing the apex that
/// lies farther from `start`'s reference centre.
pub fn bump_edge(index: usize, start: &Vertex, end: &Vertex) -> Result<EdgeBump, GenerateSnowflakeError> {
    let degenerate = || GenerateSnowflakeError::DegenerateEdge {
        index,
        start: start.position,
        end: end.position,
    };

    let p1 = start.position.lerp(end.position, 1.0 / 3.0);
    let p3 = start.position.lerp(end.position, 2.0 / 3.0);
    let base = p1 - p3;
    let midpoint = p1.midpoint(p3);

    let side_length = base.length();
    if !side_length.is_finite() || side_length == 0.0 {
        return Err(degenerate());
    }

    let height = (side_length.powi(2) - (side_length / 2.0).powi(2)).sqrt();
    let offset = perpendicular_offset(base, height);

    if !offset.is_finite() {
        return Err(degenerate());
    }

    let mut tip = midpoint + offset;
    let mut inward = midpoint - offset;

    if tip.distance(start.centre) < inward.distance(start.centre) {
        std::mem::swap(&mut tip, &mut inward);
    }

    Ok(EdgeBump {
        p1,
        tip,
        inward,
        p3,
        midpoint,
        height,
    })
}

/// Vector of length `height` perpendicular to `base`, from the dot product
/// `base.x * h.x + base.y * h.y = 0`.
///
/// The larger component of `base` is used as the divisor, which covers the
/// vertical edge (`base.x == 0`) by swapping the roles of x and y.
fn perpendicular_offset(base: Vec2, height: f64) -> Vec2 {
    if base.x.abs() >= base.y.abs() {
        let y = (height.powi(2) / ((base.y / base.x).powi(2) + 1.0)).sqrt();
        let x = -(base.y * y) / base.x;
        Vec2::new(x, y)
    } else {
        let x = (height.powi(2) / ((base.x / base.y).powi(2) + 1.0)).sqrt();
        let y = -(base.x * x) / base.y;
        Vec2::new(x, y)
    }
}

/// Produces the next refinement level. Every edge is replaced by four edges
/// forming an outward equilateral bump, so the result is four times as long.
pub fn refine(boundary: &Boundary) -> Result<Boundary, GenerateSnowflakeError> {
    let mut vertices = Vec::with_capacity(boundary.len() * 4);

    for (index, start, end) in boundary.edges() {
        let bump = bump_edge(index, start, end)?;
        vertices.extend(bump.vertices(start));
    }

    Ok(Boundary::new(vertices)?)
}
