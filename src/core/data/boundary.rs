use crate::core::data::vec2::Vec2;
use crate::core::data::vertex::Vertex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    Empty,
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "boundary must contain at least one vertex"),
        }
    }
}

impl Error for BoundaryError {}

/// Closed polygon outline. The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    vertices: Vec<Vertex>,
}

impl Boundary {
    pub fn new(vertices: Vec<Vertex>) -> Result<Self, BoundaryError> {
        if vertices.is_empty() {
            return Err(BoundaryError::Empty);
        }

        Ok(Self { vertices })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; a `Boundary` cannot be built empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.vertices.iter().map(|vertex| vertex.position)
    }

    /// Every edge as `(index, start, end)`, wrapping the last vertex back to
    /// the first.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (usize, &Vertex, &Vertex)> + '_ {
        let count = self.vertices.len();

        (0..count).map(move |i| (i, &self.vertices[i], &self.vertices[(i + 1) % count]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f64, y: f64) -> Vertex {
        Vertex::new(Vec2::new(x, y), Vec2::new(0.0, 0.0))
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(Boundary::new(vec![]), Err(BoundaryError::Empty));
    }

    #[test]
    fn test_len_and_vertices() {
        let vertices = vec![vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(0.0, 1.0)];
        let boundary = Boundary::new(vertices.clone()).unwrap();

        assert_eq!(boundary.len(), 3);
        assert!(!boundary.is_empty());
        assert_eq!(boundary.vertices(), vertices.as_slice());
    }

    #[test]
    fn test_edges_wrap_last_to_first() {
        let boundary =
            Boundary::new(vec![vertex(0.0, 0.0), vertex(1.0, 0.0), vertex(0.0, 1.0)]).unwrap();
        let edges: Vec<(usize, Vec2, Vec2)> = boundary
            .edges()
            .map(|(i, start, end)| (i, start.position, end.position))
            .collect();

        assert_eq!(
            edges,
            vec![
                (0, Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)),
                (1, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)),
                (2, Vec2::new(0.0, 1.0), Vec2::new(0.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_single_vertex_edge_is_a_loop() {
        let boundary = Boundary::new(vec![vertex(2.0, 3.0)]).unwrap();
        let (_, start, end) = boundary.edges().next().unwrap();

        assert_eq!(start.position, end.position);
    }

    #[test]
    fn test_positions() {
        let boundary = Boundary::new(vec![vertex(1.0, 2.0), vertex(3.0, 4.0)]).unwrap();
        let positions: Vec<Vec2> = boundary.positions().collect();

        assert_eq!(positions, vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            BoundaryError::Empty.to_string(),
            "boundary must contain at least one vertex"
        );
    }
}
