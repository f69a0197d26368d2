// ============================================================
// Layer 3 — OneHotMatrix Domain Type
// ============================================================
// A dense binary matrix of shape (alphabet_size × max_length)
// stored row-major as f32, ready to be copied into a tensor.
//
//                column j = j-th character of the REVERSED text
//              ┌──────────────────────────────────────┐
//   row i  →   │ 1.0 where that char is alphabet[i]   │
//              └──────────────────────────────────────┘
//
// Every column holds at most one 1.0. Columns for characters
// outside the alphabet, and padding columns past the end of
// the text, are all zero.

/// Cells can only be set through `set`, so `data.len()` is
/// always `rows * cols`.
#[derive(Debug, Clone, PartialEq)]
pub struct OneHotMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl OneHotMatrix {
    /// All-zero matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Set the cell at (row, col) to 1.0.
    ///
    /// # Panics
    /// Panics if the cell is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize) {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col] = 1.0;
    }

    /// Value at (row, col); None when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// [rows, cols]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Row index of the 1.0 in column `col`, if any
    pub fn hot_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).find(|&r| self.get(r, col) == Some(1.0))
    }

    /// Number of columns that contain a 1.0
    pub fn populated_columns(&self) -> usize {
        (0..self.cols).filter(|&c| self.hot_row(c).is_some()).count()
    }

    /// Row-major view of the cells
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_has_no_ones() {
        let m = OneHotMatrix::zeros(3, 4);
        assert_eq!(m.shape(), [3, 4]);
        assert_eq!(m.as_slice().len(), 12);
        assert_eq!(m.populated_columns(), 0);
    }

    #[test]
    fn test_set_and_hot_row() {
        let mut m = OneHotMatrix::zeros(3, 4);
        m.set(2, 1);
        assert_eq!(m.get(2, 1), Some(1.0));
        assert_eq!(m.hot_row(1), Some(2));
        assert_eq!(m.hot_row(0), None);
        assert_eq!(m.hot_row(9), None);
        assert_eq!(m.populated_columns(), 1);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let m = OneHotMatrix::zeros(2, 2);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_bounds_panics() {
        let mut m = OneHotMatrix::zeros(2, 2);
        m.set(0, 2);
    }
}
