//! Rectangular lattice layout shared by the grid effects.

use crate::simulation::states::NVec2;

/// Row-major lattice of anchor positions
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    pub cols: usize,
    pub rows: usize,
    pub anchors: Vec<NVec2>,
}

impl Lattice {
    /// Lay out `ceil(size / spacing) + extra` cells per axis, starting
    /// `offset_cells` spacings before the origin.
    pub fn layout(width: f64, height: f64, spacing: f64, extra: usize, offset_cells: f64) -> Self {
        if !(spacing > 0.0) || !(width > 0.0) || !(height > 0.0) {
            return Self { cols: 0, rows: 0, anchors: Vec::new() };
        }

        let cols = (width / spacing).ceil() as usize + extra;
        let rows = (height / spacing).ceil() as usize + extra;
        let offset = -spacing * offset_cells;

        let mut anchors = Vec::with_capacity(cols * rows);
        for row in 0..rows {
            for col in 0..cols {
                anchors.push(NVec2::new(
                    col as f64 * spacing + offset,
                    row as f64 * spacing + offset,
                ));
            }
        }

        Self { cols, rows, anchors }
    }

    pub fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Every right and down neighbour pair as index pairs, rows first
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let horizontal = (0..self.rows).flat_map(move |row| {
            (0..self.cols.saturating_sub(1)).map(move |col| (self.index(col, row), self.index(col + 1, row)))
        });
        let vertical = (0..self.cols).flat_map(move |col| {
            (0..self.rows.saturating_sub(1)).map(move |row| (self.index(col, row), self.index(col, row + 1)))
        });
        horizontal.chain(vertical)
    }
}
