use log::debug;
use rayon::prelude::*;

use crate::core::actions::rasterize::errors::RasterizeError;
use crate::core::data::boundary::Boundary;
use crate::core::data::coverage_grid::CoverageGrid;
use crate::core::data::point::Point;
use crate::core::data::shade_buckets::ShadeBuckets;

/// Anti-aliased rasterizer that marks vertex positions on a grid
/// `supersample_factor` times finer than the display, then buckets each
/// display pixel by how many of its sub-cells were hit.
///
/// The coverage grid is allocated once and cleared between frames.
#[derive(Debug)]
pub struct SupersampleRasterizer {
    display_size: u32,
    supersample_factor: u32,
    grid: CoverageGrid,
}

impl SupersampleRasterizer {
    pub fn new(display_size: u32, supersample_factor: u32) -> Result<Self, RasterizeError> {
        let grid_size = grid_size(display_size, supersample_factor)?;

        Ok(Self {
            display_size,
            supersample_factor,
            grid: CoverageGrid::new(grid_size, grid_size),
        })
    }

    /// `factor²` buckets, with a floor of two so a factor of 1 still separates
    /// covered pixels from the background.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        let factor = self.supersample_factor as usize;
        (factor * factor).max(2)
    }

    /// Partitions every display pixel into shade buckets. Pixels are visited
    /// column by column (`x` outer, `y` inner) so bucket order is stable.
    pub fn render(&mut self, boundary: &Boundary) -> ShadeBuckets {
        let grid_size = self.grid.width();
        self.grid.reset(grid_size, grid_size);

        let skipped = mark_vertices(&mut self.grid, boundary, self.supersample_factor);
        if skipped > 0 {
            debug!("{} of {} vertices fell outside the supersample grid", skipped, boundary.len());
        }

        let size = self.display_size as usize;
        let factor = self.supersample_factor as usize;
        let grid = &self.grid;

        let coverage: Vec<Vec<usize>> = (0..size)
            .into_par_iter()
            .map(|x| {
                (0..size)
                    .map(|y| grid.count_block(x * factor, y * factor, factor))
                    .collect()
            })
            .collect();

        let mut buckets = ShadeBuckets::new(self.bucket_count());

        for (x, column) in coverage.iter().enumerate() {
            for (y, &count) in column.iter().enumerate() {
                buckets.push(
                    count,
                    Point {
                        x: x as i32,
                        y: y as i32,
                    },
                );
            }
        }

        debug!(
            "supersampled {} vertices into {} non-empty shade buckets",
            boundary.len(),
            buckets.iter().filter(|(_, bucket)| !bucket.is_empty()).count()
        );

        buckets
    }
}

/// Renders a boundary into shade buckets with a one-off rasterizer.
pub fn render_supersampled(
    boundary: &Boundary,
    display_size: u32,
    supersample_factor: u32,
) -> Result<ShadeBuckets, RasterizeError> {
    let mut rasterizer = SupersampleRasterizer::new(display_size, supersample_factor)?;
    Ok(rasterizer.render(boundary))
}

/// Sets the grid cell nearest to each vertex, scaled by `supersample_factor`.
/// Returns how many vertices landed outside the grid and were skipped.
pub fn mark_vertices(grid: &mut CoverageGrid, boundary: &Boundary, supersample_factor: u32) -> usize {
    let scale = f64::from(supersample_factor);

    boundary
        .positions()
        .filter(|position| {
            let x = (position.x * scale).round() as i64;
            let y = (position.y * scale).round() as i64;
            !grid.set(x, y)
        })
        .count()
}

fn grid_size(display_size: u32, supersample_factor: u32) -> Result<usize, RasterizeError> {
    if display_size == 0 {
        return Err(RasterizeError::ZeroDisplaySize);
    }

    if supersample_factor == 0 {
        return Err(RasterizeError::ZeroSupersampleFactor);
    }

    let too_large = RasterizeError::GridTooLarge {
        display_size,
        supersample_factor,
    };

    let side = (display_size as usize)
        .checked_mul(supersample_factor as usize)
        .ok_or(too_large)?;

    side.checked_mul(side).ok_or(too_large)?;

    Ok(side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::vec2::Vec2;
    use crate::core::data::vertex::Vertex;

    fn boundary(positions: &[(f64, f64)]) -> Boundary {
        let vertices = positions
            .iter()
            .map(|&(x, y)| Vertex::new(Vec2::new(x, y), Vec2::new(0.0, 0.0)))
            .collect();

        Boundary::new(vertices).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_sizes() {
        assert_eq!(
            SupersampleRasterizer::new(0, 4).unwrap_err(),
            RasterizeError::ZeroDisplaySize
        );
        assert_eq!(
            SupersampleRasterizer::new(800, 0).unwrap_err(),
            RasterizeError::ZeroSupersampleFactor
        );
    }

    #[test]
    fn test_new_rejects_overflowing_grid() {
        assert!(matches!(
            SupersampleRasterizer::new(u32::MAX, u32::MAX),
            Err(RasterizeError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_sixteen_buckets_at_factor_four() {
        let buckets = render_supersampled(&boundary(&[(1.0, 1.0)]), 8, 4).unwrap();

        assert_eq!(buckets.bucket_count(), 16);
    }

    #[test]
    fn test_buckets_partition_display() {
        let buckets =
            render_supersampled(&boundary(&[(1.0, 1.0), (5.3, 2.2), (7.9, 7.9)]), 10, 4).unwrap();

        assert_eq!(buckets.total_points(), 100);
    }

    #[test]
    fn test_single_vertex_lights_one_pixel() {
        let buckets = render_supersampled(&boundary(&[(2.1, 3.1)]), 8, 4).unwrap();

        // (2.1 * 4).round() = 8, (3.1 * 4).round() = 12 -> display pixel (2, 3).
        assert_eq!(buckets.bucket(1), &[Point { x: 2, y: 3 }]);
        assert_eq!(buckets.bucket(0).len(), 63);
    }

    #[test]
    fn test_coverage_counts_distinct_sub_cells() {
        // Three distinct sub-cells inside display pixel (1, 1), one duplicate.
        let buckets = render_supersampled(
            &boundary(&[(1.0, 1.0), (1.25, 1.0), (1.5, 1.5), (1.5, 1.5)]),
            4,
            4,
        )
        .unwrap();

        assert_eq!(buckets.bucket(3), &[Point { x: 1, y: 1 }]);
    }

    #[test]
    fn test_vertices_outside_grid_are_skipped() {
        let mut grid = CoverageGrid::new(16, 16);
        let skipped = mark_vertices(&mut grid, &boundary(&[(-1.0, 0.0), (1.0, 1.0), (4.0, 0.0)]), 4);

        assert_eq!(skipped, 2);
        assert_eq!(grid.count_set(), 1);
    }

    #[test]
    fn test_buckets_are_column_major() {
        let buckets = render_supersampled(&boundary(&[(100.0, 100.0)]), 2, 4).unwrap();

        assert_eq!(
            buckets.bucket(0),
            &[
                Point { x: 0, y: 0 },
                Point { x: 0, y: 1 },
                Point { x: 1, y: 0 },
                Point { x: 1, y: 1 },
            ]
        );
    }

    #[test]
    fn test_rasterizer_is_reusable_between_frames() {
        let mut rasterizer = SupersampleRasterizer::new(4, 4).unwrap();
        let first = rasterizer.render(&boundary(&[(1.0, 1.0)]));
        let second = rasterizer.render(&boundary(&[(2.0, 2.0)]));

        assert_eq!(first.bucket(1), &[Point { x: 1, y: 1 }]);
        assert_eq!(second.bucket(1), &[Point { x: 2, y: 2 }]);
    }

    #[test]
    fn test_factor_one_still_separates_covered_pixels() {
        let buckets = render_supersampled(&boundary(&[(1.0, 1.0)]), 3, 1).unwrap();

        assert_eq!(buckets.bucket_count(), 2);
        assert_eq!(buckets.bucket(1), &[Point { x: 1, y: 1 }]);
        assert_eq!(buckets.bucket(0).len(), 8);
    }
}
