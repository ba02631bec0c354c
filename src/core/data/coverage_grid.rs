/// Supersample coverage grid, stored column-major (`x` outer, `y` inner) so a
/// display column's sub-cells are contiguous.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl CoverageGrid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Unsets every cell, resizing first if the dimensions changed. The
    /// allocation is kept when the size is unchanged.
    pub fn reset(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.cells.clear();
            self.cells.resize(width * height, false);
        } else {
            self.cells.fill(false);
        }
    }

    /// Marks a cell as covered. Returns false when the cell lies outside the
    /// grid.
    pub fn set(&mut self, x: i64, y: i64) -> bool {
        match self.index(x, y) {
            Some(index) => {
                self.cells[index] = true;
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    fn get(&self, x: i64, y: i64) -> bool {
        self.index(x, y).is_some_and(|index| self.cells[index])
    }

    /// Cells of a single column, `height` long.
    #[must_use]
    pub fn column(&self, x: usize) -> &[bool] {
        let start = x * self.height;
        &self.cells[start..start + self.height]
    }

    /// Counts set cells in the `size`×`size` block whose top-left cell is
    /// (`x`, `y`). Cells beyond the grid edge count as unset.
    #[must_use]
    pub fn count_block(&self, x: usize, y: usize, size: usize) -> usize {
        let x_end = (x + size).min(self.width);
        let y_end = (y + size).min(self.height);

        (x.min(x_end)..x_end)
            .map(|column| {
                self.column(column)[y.min(y_end)..y_end]
                    .iter()
                    .filter(|&&set| set)
                    .count()
            })
            .sum()
    }

    #[must_use]
    pub fn count_set(&self) -> usize {
        self.cells.iter().filter(|&&set| set).count()
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(x * self.height + y)
    }
}
