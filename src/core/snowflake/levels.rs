use std::sync::Arc;

use crate::core::actions::generate_snowflake::errors::GenerateSnowflakeError;
use crate::core::actions::generate_snowflake::initial_triangle::initial_triangle;
use crate::core::actions::generate_snowflake::refine::refine;
use crate::core::data::boundary::Boundary;
use crate::core::data::vec2::Vec2;

/// Successive refinement levels, starting with the level 0 triangle.
///
/// Each item is an immutable snapshot. The iterator keeps only the latest
/// level to refine from, so earlier snapshots are freed once callers drop
/// them. Iteration stops after the first error.
#[derive(Debug)]
pub struct SnowflakeLevels {
    centre: Vec2,
    radius: f64,
    levels: usize,
    produced: usize,
    current: Option<Arc<Boundary>>,
    failed: bool,
}

impl SnowflakeLevels {
    #[must_use]
    pub fn new(centre: Vec2, radius: f64, levels: usize) -> Self {
        Self {
            centre,
            radius,
            levels,
            produced: 0,
            current: None,
            failed: false,
        }
    }

    /// Level number of the next item.
    #[must_use]
    pub fn next_level(&self) -> usize {
        self.produced
    }
}

impl Iterator for SnowflakeLevels {
    type Item = Result<Arc<Boundary>, GenerateSnowflakeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.produced >= self.levels {
            return None;
        }

        let next = match self.current.take() {
            None => initial_triangle(self.centre, self.radius),
            Some(previous) => refine(&previous),
        };

        match next {
            Ok(boundary) => {
                let boundary = Arc::new(boundary);
                self.current = Some(Arc::clone(&boundary));
                self.produced += 1;
                Some(Ok(boundary))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }

        let remaining = self.levels - self.produced;
        (0, Some(remaining))
    }
}
