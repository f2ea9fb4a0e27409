//! Row, column, submatrix and triangle extraction for [`Matrix`].
//!
//! Every extraction copies into a new matrix; nothing aliases the source.

use crate::error::{MatrixError, Result};

use super::Matrix;

impl Matrix {
    /// Row `r` as a new `1 x cols` matrix.
    pub fn row(&self, r: usize) -> Result<Matrix> {
        if r >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                row: r,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Matrix::from_slice(self.row_slice(r), 1, self.cols)
    }

    /// Column `c` as a new `rows x 1` matrix.
    pub fn col(&self, c: usize) -> Result<Matrix> {
        if c >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row: 0,
                col: c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let data = (0..self.rows)
            .map(|r| self.data[r * self.cols + c])
            .collect();
        Matrix::from_vec(data, self.rows, 1)
    }

    /// Copy the `rows x cols` block whose top-left corner is `(row, col)`.
    ///
    /// ```
    /// # use lml_core::Matrix;
    /// let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]).unwrap();
    /// let s = m.submatrix(0, 1, 2, 2).unwrap();
    /// assert_eq!(s.as_slice(), &[2.0, 3.0, 5.0, 6.0]);
    /// ```
    pub fn submatrix(&self, row: usize, col: usize, rows: usize, cols: usize) -> Result<Matrix> {
        super::check_dims(rows, cols)?;
        let row_end = row.checked_add(rows).filter(|&e| e <= self.rows);
        let col_end = col.checked_add(cols).filter(|&e| e <= self.cols);
        let (Some(row_end), Some(col_end)) = (row_end, col_end) else {
            return Err(MatrixError::IndexOutOfBounds {
                row: row.saturating_add(rows).saturating_sub(1),
                col: col.saturating_add(cols).saturating_sub(1),
                rows: self.rows,
                cols: self.cols,
            });
        };

        let mut data = Vec::with_capacity(rows * cols);
        for r in row..row_end {
            data.extend_from_slice(&self.row_slice(r)[col..col_end]);
        }
        Matrix::from_vec(data, rows, cols)
    }

    /// Lower triangle (diagonal included); entries above it are zero.
    pub fn lower(&self) -> Matrix {
        let mut out = Matrix::zeros(self.rows, self.cols);
        for r in 0..self.rows {
            for c in 0..=r.min(self.cols - 1) {
                out.data[r * self.cols + c] = self.data[r * self.cols + c];
            }
        }
        out
    }

    /// Upper triangle (diagonal included); entries below it are zero.
    pub fn upper(&self) -> Matrix {
        let mut out = Matrix::zeros(self.rows, self.cols);
        for r in 0..self.rows {
            for c in r..self.cols {
                out.data[r * self.cols + c] = self.data[r * self.cols + c];
            }
        }
        out
    }

    /// The main diagonal, `min(rows, cols)` long.
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.rows.min(self.cols))
            .map(|i| self.data[i * self.cols + i])
            .collect()
    }

    /// Transposed copy (`cols x rows`).
    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = (self.rows, self.cols);
        let mut data = vec![0.0; self.data.len()];
        for r in 0..rows {
            for c in 0..cols {
                data[c * rows + r] = self.data[r * cols + c];
            }
        }
        Matrix {
            data,
            rows: cols,
            cols: rows,
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn grid() -> Matrix {
        // [[1, 2, 3],
        //  [4, 5, 6],
        //  [7, 8, 9]]
        Matrix::from_vec((1..=9).map(f64::from).collect(), 3, 3).unwrap()
    }

    #[test]
    fn test_row_and_col() {
        let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        let row = m.row(1).unwrap();
        assert_eq!(row.shape(), (1, 3));
        assert_eq!(row.as_slice(), &[4.0, 5.0, 6.0]);

        let col = m.col(0).unwrap();
        assert_eq!(col.shape(), (2, 1));
        assert_eq!(col.as_slice(), &[1.0, 4.0]);

        assert!(m.row(2).is_err());
        assert!(m.col(3).is_err());
    }

    #[test]
    fn test_submatrix() {
        let s = grid().submatrix(1, 0, 2, 2).unwrap();
        assert_eq!(s.as_slice(), &[4.0, 5.0, 7.0, 8.0]);
        assert_eq!(grid().submatrix(0, 0, 3, 3).unwrap(), grid());
    }

    #[test]
    fn test_submatrix_out_of_bounds() {
        assert!(matches!(
            grid().submatrix(2, 0, 2, 1),
            Err(MatrixError::IndexOutOfBounds { .. })
        ));
        assert!(grid().submatrix(0, 0, 0, 1).is_err());
        assert!(grid().submatrix(usize::MAX, 0, 1, 1).is_err());
    }

    #[test]
    fn test_lower_upper() {
        let m = grid();
        assert_eq!(
            m.lower().as_slice(),
            &[1.0, 0.0, 0.0, 4.0, 5.0, 0.0, 7.0, 8.0, 9.0]
        );
        assert_eq!(
            m.upper().as_slice(),
            &[1.0, 2.0, 3.0, 0.0, 5.0, 6.0, 0.0, 0.0, 9.0]
        );
    }

    #[test]
    fn test_lower_on_wide_matrix() {
        let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.lower().as_slice(), &[1.0, 0.0, 0.0, 4.0, 5.0, 0.0]);
        assert_eq!(m.diagonal(), vec![1.0, 5.0]);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(t.transpose(), m);
    }
}
