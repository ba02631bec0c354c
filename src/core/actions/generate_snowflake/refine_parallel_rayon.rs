use rayon::prelude::*;

use crate::core::actions::generate_snowflake::errors::GenerateSnowflakeError;
use crate::core::actions::generate_snowflake::refine::bump_edge;
use crate::core::data::boundary::Boundary;
use crate::core::data::vertex::Vertex;

/// Refines a boundary with rayon, one task per edge.
///
/// Output order matches [`refine`](super::refine::refine) exactly: rayon's
/// indexed collect keeps each edge's four vertices at the edge's position.
pub fn refine_parallel_rayon(boundary: &Boundary) -> Result<Boundary, GenerateSnowflakeError> {
    let vertices = boundary.vertices();
    let count = vertices.len();

    let replaced: Vec<[Vertex; 4]> = vertices
        .par_iter()
        .enumerate()
        .map(|(index, start)| {
            let end = &vertices[(index + 1) % count];
            bump_edge(index, start, end).map(|bump| bump.vertices(start))
        })
        .collect::<Result<_, _>>()?;

    Ok(Boundary::new(replaced.into_iter().flatten().collect())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_snowflake::initial_triangle::initial_triangle;
    use crate::core::actions::generate_snowflake::refine::refine;
    use crate::core::data::vec2::Vec2;

    #[test]
    fn test_matches_sequential_refine() {
        let mut sequential = initial_triangle(Vec2::new(400.0, 400.0), 300.0).unwrap();
        let mut parallel = sequential.clone();

        for _ in 0..6 {
            sequential = refine(&sequential).unwrap();
            parallel = refine_parallel_rayon(&parallel).unwrap();
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_propagates_degenerate_edge() {
        let point = Vec2::new(1.0, 1.0);
        let boundary = Boundary::new(vec![Vertex::new(point, point), Vertex::new(point, point)]).unwrap();

        assert!(matches!(
            refine_parallel_rayon(&boundary),
            Err(GenerateSnowflakeError::DegenerateEdge { .. })
        ));
    }
}
