//! Sparse user × item interaction matrix
//!
//! Cells are stored densely in row-major order; sparsity is expressed by
//! `None` entries. The matrix is immutable once built by the generator.

/// Display category of a single cell: missing, or one of the rating levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellCategory {
    Missing,
    Rated(u8),
}

impl CellCategory {
    /// Palette index: 0 for missing, the rating value otherwise
    pub fn index(&self) -> usize {
        match self {
            CellCategory::Missing => 0,
            CellCategory::Rated(rating) => *rating as usize,
        }
    }
}

impl From<Option<u8>> for CellCategory {
    fn from(cell: Option<u8>) -> Self {
        match cell {
            Some(rating) => CellCategory::Rated(rating),
            None => CellCategory::Missing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionMatrix {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl InteractionMatrix {
    /// Build from row-major cells; `cells.len()` must be `size * size`
    pub(crate) fn from_cells(size: usize, cells: Vec<Option<u8>>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Side length (rows == columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Rating at (row, col), `None` when missing or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    pub fn category(&self, row: usize, col: usize) -> CellCategory {
        self.get(row, col).into()
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u8>]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Observed cells as (row, col, rating) in row-major order
    pub fn observed(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|rating| (idx / self.size, idx % self.size, rating))
        })
    }

    pub fn observed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Realized fraction of observed cells
    pub fn density(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.observed_count() as f64 / self.cells.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    fn sample_matrix() -> InteractionMatrix {
        // 3×3 with ratings on the diagonal and one extra cell
        InteractionMatrix::from_cells(
            3,
            vec![
                Some(1), None, None,
                None, Some(3), Some(5),
                None, None, Some(2),
            ],
        )
    }

    #[test]
    fn test_get_and_bounds() {
        let m = sample_matrix();
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(0, 0), Some(1));
        assert_eq!(m.get(1, 2), Some(5));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    fn test_observed_in_row_major_order() {
        let m = sample_matrix();
        let observed: Vec<_> = m.observed().collect();
        assert_eq!(observed, vec![(0, 0, 1), (1, 1, 3), (1, 2, 5), (2, 2, 2)]);
        assert_eq!(m.observed_count(), 4);
        assert!((m.density() - 4.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_rows() {
        let m = sample_matrix();
        let rows: Vec<_> = m.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], &[None, Some(3), Some(5)]);
    }

    #[test]
    fn test_category_index() {
        let m = sample_matrix();
        assert_eq!(m.category(0, 1), CellCategory::Missing);
        assert_eq!(m.category(1, 2), CellCategory::Rated(5));
        assert_eq!(CellCategory::Missing.index(), 0);
        assert_eq!(CellCategory::Rated(1).index(), 1);
        assert_eq!(CellCategory::Rated(5).index(), 5);
    }
}
