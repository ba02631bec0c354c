use crate::core::data::boundary::Boundary;
use crate::core::data::point::Point;
use crate::core::data::vec2::Vec2;

/// Rounds to the nearest pixel, halves away from zero.
#[must_use]
pub fn to_pixel(position: Vec2) -> Point {
    Point {
        x: position.x.round() as i32,
        y: position.y.round() as i32,
    }
}

/// Closed polyline through every boundary vertex. The first point is repeated
/// at the end so consecutive pairs cover every edge, `len + 1` points in all.
#[must_use]
pub fn polyline_points(boundary: &Boundary) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::with_capacity(boundary.len() + 1);
    points.extend(boundary.positions().map(to_pixel));

    if let Some(&first) = points.first() {
        points.push(first);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::vertex::Vertex;

    fn boundary(positions: &[(f64, f64)]) -> Boundary {
        let vertices = positions
            .iter()
            .map(|&(x, y)| Vertex::new(Vec2::new(x, y), Vec2::new(0.0, 0.0)))
            .collect();

        Boundary::new(vertices).unwrap()
    }

    #[test]
    fn test_to_pixel_rounds_to_nearest() {
        assert_eq!(to_pixel(Vec2::new(1.4, 1.6)), Point { x: 1, y: 2 });
        assert_eq!(to_pixel(Vec2::new(2.5, -2.5)), Point { x: 3, y: -3 });
    }

    #[test]
    fn test_polyline_wraps_to_first_point() {
        let points = polyline_points(&boundary(&[(0.0, 0.0), (10.2, 0.0), (5.0, 8.7)]));

        assert_eq!(
            points,
            vec![
                Point { x: 0, y: 0 },
                Point { x: 10, y: 0 },
                Point { x: 5, y: 9 },
                Point { x: 0, y: 0 },
            ]
        );
    }

    #[test]
    fn test_polyline_length_is_vertex_count_plus_one() {
        let points = polyline_points(&boundary(&[(1.0, 1.0), (2.0, 2.0), (3.0, 1.0), (2.0, 0.0)]));

        assert_eq!(points.len(), 5);
    }
}
