//! In-place editing: scaling, row/column replacement, insertion, removal
//! and appending.
//!
//! Resizing operations keep the matrix rectangular and refuse to shrink a
//! dimension to zero. On error the matrix is left untouched.

use crate::error::{MatrixError, Result};

use super::Matrix;

impl Matrix {
    /// Multiply every element by `k`.
    pub fn scale(&mut self, k: f64) {
        self.apply(|x| x * k);
    }

    /// Add `k` to every element.
    pub fn shift(&mut self, k: f64) {
        self.apply(|x| x + k);
    }

    /// Replace row `r` with the elements of `values` (any shape holding
    /// exactly `cols` values, typically `1 x cols`).
    pub fn set_row(&mut self, r: usize, values: &Matrix) -> Result<()> {
        self.check_row_index(r, self.rows)?;
        self.check_len("set_row", values, (1, self.cols))?;
        let cols = self.cols;
        self.data[r * cols..(r + 1) * cols].copy_from_slice(values.as_slice());
        Ok(())
    }

    /// Replace column `c` with the elements of `values` (any shape holding
    /// exactly `rows` values, typically `rows x 1`).
    pub fn set_col(&mut self, c: usize, values: &Matrix) -> Result<()> {
        self.check_col_index(c, self.cols)?;
        self.check_len("set_col", values, (self.rows, 1))?;
        for (r, &v) in values.as_slice().iter().enumerate() {
            self.data[r * self.cols + c] = v;
        }
        Ok(())
    }

    /// Exchange rows `a` and `b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_row_index(a, self.rows)?;
        self.check_row_index(b, self.rows)?;
        if a != b {
            for c in 0..self.cols {
                self.data.swap(a * self.cols + c, b * self.cols + c);
            }
        }
        Ok(())
    }

    /// Delete row `r`.
    pub fn remove_row(&mut self, r: usize) -> Result<()> {
        self.check_row_index(r, self.rows)?;
        if self.rows == 1 {
            return Err(MatrixError::InvalidShape {
                rows: 0,
                cols: self.cols,
                reason: "cannot remove the only row",
            });
        }
        self.data.drain(r * self.cols..(r + 1) * self.cols);
        self.rows -= 1;
        Ok(())
    }

    /// Delete column `c`.
    pub fn remove_col(&mut self, c: usize) -> Result<()> {
        self.check_col_index(c, self.cols)?;
        if self.cols == 1 {
            return Err(MatrixError::InvalidShape {
                rows: self.rows,
                cols: 0,
                reason: "cannot remove the only column",
            });
        }
        let cols = self.cols;
        let mut i = 0;
        self.data.retain(|_| {
            let keep = i % cols != c;
            i += 1;
            keep
        });
        self.cols -= 1;
        Ok(())
    }

    /// Insert `values` as a new row before row `r`; `r == rows` appends.
    pub fn insert_row(&mut self, r: usize, values: &Matrix) -> Result<()> {
        self.check_row_index(r, self.rows + 1)?;
        self.check_len("insert_row", values, (1, self.cols))?;
        let at = r * self.cols;
        self.data.splice(at..at, values.as_slice().iter().copied());
        self.rows += 1;
        Ok(())
    }

    /// Insert `values` as a new column before column `c`; `c == cols`
    /// appends.
    pub fn insert_col(&mut self, c: usize, values: &Matrix) -> Result<()> {
        self.check_col_index(c, self.cols + 1)?;
        self.check_len("insert_col", values, (self.rows, 1))?;
        let new_cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for (r, &v) in values.as_slice().iter().enumerate() {
            let row = self.row_slice(r);
            data.extend_from_slice(&row[..c]);
            data.push(v);
            data.extend_from_slice(&row[c..]);
        }
        self.data = data;
        self.cols = new_cols;
        Ok(())
    }

    /// Append the rows of `other` below `self`.
    pub fn append_rows(&mut self, other: &Matrix) -> Result<()> {
        if other.cols != self.cols {
            return Err(MatrixError::DimensionMismatch {
                op: "append_rows",
                expected: (other.rows, self.cols),
                got: other.shape(),
            });
        }
        self.data.extend_from_slice(other.as_slice());
        self.rows += other.rows;
        Ok(())
    }

    /// Append the columns of `other` to the right of `self`.
    pub fn append_cols(&mut self, other: &Matrix) -> Result<()> {
        if other.rows != self.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "append_cols",
                expected: (self.rows, other.cols),
                got: other.shape(),
            });
        }
        let new_cols = self.cols + other.cols;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for r in 0..self.rows {
            data.extend_from_slice(self.row_slice(r));
            data.extend_from_slice(other.row_slice(r));
        }
        self.data = data;
        self.cols = new_cols;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Argument checks
    // ------------------------------------------------------------------

    fn check_row_index(&self, r: usize, limit: usize) -> Result<()> {
        if r >= limit {
            return Err(MatrixError::IndexOutOfBounds {
                row: r,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_col_index(&self, c: usize, limit: usize) -> Result<()> {
        if c >= limit {
            return Err(MatrixError::IndexOutOfBounds {
                row: 0,
                col: c,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn check_len(&self, op: &'static str, values: &Matrix, expected: (usize, usize)) -> Result<()> {
        if values.as_slice().len() != expected.0 * expected.1 {
            return Err(MatrixError::DimensionMismatch {
                op,
                expected,
                got: values.shape(),
            });
        }
        Ok(())
    }
}
