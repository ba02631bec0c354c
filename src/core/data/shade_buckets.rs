use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Display pixels partitioned by supersample coverage. Bucket `i` holds the
/// pixels with `i` covered sub-cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeBuckets {
    buckets: Vec<Vec<Point>>,
}

impl ShadeBuckets {
    #[must_use]
    pub fn new(bucket_count: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); bucket_count],
        }
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Adds a pixel to the bucket for `coverage`, clamping into the brightest
    /// bucket when the count exceeds it.
    pub fn push(&mut self, coverage: usize, point: Point) {
        let last = self.buckets.len().saturating_sub(1);

        if let Some(bucket) = self.buckets.get_mut(coverage.min(last)) {
            bucket.push(point);
        }
    }

    #[must_use]
    pub fn bucket(&self, index: usize) -> &[Point] {
        self.buckets.get(index).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Point])> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .map(|(index, bucket)| (index, bucket.as_slice()))
    }

    #[must_use]
    pub fn total_points(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Grey for a bucket, running linearly from `background` (bucket 0) to
    /// white (the last bucket).
    #[must_use]
    pub fn shade(&self, index: usize, background: Colour) -> Colour {
        let last = self.buckets.len().saturating_sub(1);

        if last == 0 {
            return Colour::WHITE;
        }

        let t = index.min(last) as f64 / last as f64;
        let channel = |from: u8| (from as f64 + (255.0 - from as f64) * t).round() as u8;

        Colour {
            r: channel(background.r),
            g: channel(background.g),
            b: channel(background.b),
        }
    }
}
