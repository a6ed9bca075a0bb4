use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::traits::{FloatScalar, Scalar};

/// Default tolerance for the epsilon-based matrix predicates.
const EPSILON: f64 = 1e-5;

/// Errors from matrix construction and in-place mutation.
///
/// ```
/// use cayley::{Matrix, MatrixError};
///
/// let m: Result<Matrix<f64>, _> = Matrix::new(0, 3);
/// assert_eq!(m.unwrap_err(), MatrixError::InvalidDimensions { nrows: 0, ncols: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixError {
    /// A dimension was zero.
    InvalidDimensions { nrows: usize, ncols: usize },
    /// No row with any elements was given.
    EmptyRows,
    /// Non-empty rows of a 2D literal had different lengths.
    RaggedRows { expected: usize, got: usize },
    /// `set_identity` was called on a non-square matrix.
    NotSquare { nrows: usize, ncols: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidDimensions { nrows, ncols } => {
                write!(f, "cannot create {}x{} matrix", nrows, ncols)
            }
            MatrixError::EmptyRows => {
                write!(f, "at least one non-empty row is required")
            }
            MatrixError::RaggedRows { expected, got } => {
                write!(f, "all rows must have the same length: expected {}, got {}", expected, got)
            }
            MatrixError::NotSquare { nrows, ncols } => {
                write!(f, "{}x{} matrix is not square", nrows, ncols)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}

/// Dense heap-allocated matrix.
///
/// Flat row-major `Vec<T>` storage with explicit row and column counts.
/// Unlike the immutable analytic types, a matrix is mutable in place
/// (`fill`, `zero`, `set_identity`, indexed assignment) and requires
/// external synchronization if shared across threads. Equality is exact.
///
/// Requires the `alloc` feature (included with `std`).
///
/// # Examples
///
/// ```
/// use cayley::Matrix;
///
/// let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
/// assert_eq!(m[(0, 1)], 2.0);
/// assert!(m.is_square());
///
/// let id: Matrix<f64> = Matrix::new(3, 3).unwrap();
/// assert!(id.is_identity());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix.
    ///
    /// Square dimensions initialize to the identity matrix, rectangular
    /// ones to all zeros. Zero dimensions are rejected.
    ///
    /// ```
    /// use cayley::Matrix;
    /// let id: Matrix<f64> = Matrix::new(2, 2).unwrap();
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    ///
    /// let z: Matrix<f64> = Matrix::new(2, 3).unwrap();
    /// assert!(z.is_zero());
    /// ```
    pub fn new(nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimensions { nrows, ncols });
        }
        let mut m = Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        };
        if nrows == ncols {
            m.write_identity();
        }
        Ok(m)
    }

    /// Create a matrix from a 2D row literal.
    ///
    /// An empty row slice stands for a row of zeros. All non-empty rows
    /// must share one length, and at least one row must be non-empty.
    ///
    /// ```
    /// use cayley::Matrix;
    /// let m = Matrix::from_rows(&[&[1.0, 8.0, 1.0, 4.0], &[], &[5.0, 9.0, 4.22, 5.0]]).unwrap();
    /// assert_eq!(m.nrows(), 3);
    /// assert_eq!(m.ncols(), 4);
    /// assert_eq!(m[(1, 2)], 0.0); // the empty row is all zeros
    /// ```
    pub fn from_rows(rows: &[&[T]]) -> Result<Self, MatrixError> {
        if rows.is_empty() {
            return Err(MatrixError::EmptyRows);
        }
        let mut ncols = 0;
        for row in rows {
            if row.is_empty() {
                continue;
            }
            if ncols == 0 {
                ncols = row.len();
            } else if row.len() != ncols {
                return Err(MatrixError::RaggedRows {
                    expected: ncols,
                    got: row.len(),
                });
            }
        }
        if ncols == 0 {
            return Err(MatrixError::EmptyRows);
        }

        let nrows = rows.len();
        let mut data = vec![T::zero(); nrows * ncols];
        for (r, row) in rows.iter().enumerate() {
            data[r * ncols..r * ncols + row.len()].copy_from_slice(row);
        }
        Ok(Self { data, nrows, ncols })
    }

    fn write_identity(&mut self) {
        for (idx, v) in self.data.iter_mut().enumerate() {
            *v = if idx % self.ncols == idx / self.ncols {
                T::one()
            } else {
                T::zero()
            };
        }
    }
}

impl<T: Scalar> Default for Matrix<T> {
    /// 4x4 identity matrix.
    fn default() -> Self {
        let mut m = Self {
            data: vec![T::zero(); 16],
            nrows: 4,
            ncols: 4,
        };
        m.write_identity();
        m
    }
}

// ── Access ───────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether `(row, col)` is a valid cell.
    #[inline]
    pub fn contains_cell(&self, row: usize, col: usize) -> bool {
        row < self.nrows && col < self.ncols
    }

    /// The underlying flat row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow row `r` as a slice.
    ///
    /// Panics if the row is out of bounds.
    pub fn row(&self, r: usize) -> &[T] {
        assert!(
            r < self.nrows,
            "row {} is out of bounds for {}x{} matrix",
            r, self.nrows, self.ncols,
        );
        &self.data[r * self.ncols..(r + 1) * self.ncols]
    }
}

impl<T: Scalar> Matrix<T> {
    /// Copy column `c` into a vector.
    ///
    /// Panics if the column is out of bounds.
    pub fn column(&self, c: usize) -> Vec<T> {
        assert!(
            c < self.ncols,
            "column {} is out of bounds for {}x{} matrix",
            c, self.nrows, self.ncols,
        );
        (0..self.nrows).map(|r| self.data[r * self.ncols + c]).collect()
    }

    /// Extract a sub-matrix of size `nrows x ncols` starting at
    /// `(from_row, from_col)`.
    ///
    /// Panics if the sub-matrix extends beyond the matrix bounds.
    ///
    /// ```
    /// use cayley::Matrix;
    /// let m = Matrix::from_rows(&[
    ///     &[1.0, 8.0, 1.0],
    ///     &[5.1, 4.77, 1.0],
    ///     &[5.0, 9.0, 4.22],
    /// ]).unwrap();
    /// let s = m.sub_matrix(1, 1, 2, 2);
    /// assert_eq!(s[(0, 0)], 4.77);
    /// assert_eq!(s[(1, 1)], 4.22);
    /// ```
    pub fn sub_matrix(&self, from_row: usize, from_col: usize, nrows: usize, ncols: usize) -> Self {
        assert!(
            from_row + nrows <= self.nrows && from_col + ncols <= self.ncols,
            "sub-matrix at ({}, {}) of size {}x{} is out of bounds for {}x{} matrix",
            from_row, from_col, nrows, ncols, self.nrows, self.ncols,
        );
        let mut data = Vec::with_capacity(nrows * ncols);
        for r in 0..nrows {
            let start = (from_row + r) * self.ncols + from_col;
            data.extend_from_slice(&self.data[start..start + ncols]);
        }
        Self { data, nrows, ncols }
    }
}

// ── In-place mutation ────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        for v in self.data.iter_mut() {
            *v = value;
        }
    }

    /// Set every element to zero.
    pub fn zero(&mut self) {
        self.fill(T::zero());
    }

    /// Overwrite with the identity matrix.
    ///
    /// Fails on non-square matrices.
    ///
    /// ```
    /// use cayley::{Matrix, MatrixError};
    /// let mut m: Matrix<f64> = Matrix::new(2, 3).unwrap();
    /// assert_eq!(m.set_identity(), Err(MatrixError::NotSquare { nrows: 2, ncols: 3 }));
    /// ```
    pub fn set_identity(&mut self) -> Result<(), MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        self.write_identity();
        Ok(())
    }
}

// ── Predicates ───────────────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Whether every element is within `epsilon` of zero.
    pub fn is_zero_eps(&self, epsilon: T) -> bool {
        self.data.iter().all(|v| v.abs() < epsilon)
    }

    /// Whether every element is within the default tolerance of zero.
    pub fn is_zero(&self) -> bool {
        self.is_zero_eps(T::from(EPSILON).unwrap())
    }

    /// Whether this is the identity matrix within `epsilon`.
    ///
    /// Non-square matrices are never identity.
    pub fn is_identity_eps(&self, epsilon: T) -> bool {
        if !self.is_square() {
            return false;
        }
        self.data.iter().enumerate().all(|(idx, v)| {
            let diagonal = idx % self.ncols == idx / self.ncols;
            if diagonal {
                (*v - T::one()).abs() < epsilon
            } else {
                v.abs() < epsilon
            }
        })
    }

    /// Whether this is the identity matrix within the default tolerance.
    pub fn is_identity(&self) -> bool {
        self.is_identity_eps(T::from(EPSILON).unwrap())
    }
}

// ── Index ────────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            self.contains_cell(row, col),
            "cell ({}, {}) is out of bounds for {}x{} matrix",
            row, col, self.nrows, self.ncols,
        );
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            self.contains_cell(row, col),
            "cell ({}, {}) is out of bounds for {}x{} matrix",
            row, col, self.nrows, self.ncols,
        );
        &mut self.data[row * self.ncols + col]
    }
}

// Linear indexing into the flat row-major buffer
impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &T {
        assert!(
            idx < self.data.len(),
            "index {} is out of bounds for {}x{} matrix",
            idx, self.nrows, self.ncols,
        );
        &self.data[idx]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut T {
        assert!(
            idx < self.data.len(),
            "index {} is out of bounds for {}x{} matrix",
            idx, self.nrows, self.ncols,
        );
        &mut self.data[idx]
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: Scalar> fmt::Display for Matrix<T> {
    /// Column-aligned rows:
    ///
    /// ```text
    /// Matrix [1.0, 2.0]
    ///        [3.0, 4.0]
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.data.iter().map(|v| alloc::format!("{:?}", v)).collect();
        let mut widths = vec![0usize; self.ncols];
        for (idx, cell) in cells.iter().enumerate() {
            let col = idx % self.ncols;
            widths[col] = widths[col].max(cell.len());
        }

        for r in 0..self.nrows {
            if r == 0 {
                write!(f, "Matrix [")?;
            } else {
                write!(f, "\n       [")?;
            }
            for c in 0..self.ncols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:>width$}", cells[r * self.ncols + c], width = widths[c])?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Constructors ─────────────────────────────────────────────

    #[test]
    fn new_square_is_identity() {
        let m: Matrix<f64> = Matrix::new(3, 3).unwrap();
        assert!(m.is_identity());
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(1, 2)], 0.0);
    }

    #[test]
    fn new_rectangular_is_zero() {
        let m: Matrix<f64> = Matrix::new(5, 2).unwrap();
        assert_eq!(m.nrows(), 5);
        assert_eq!(m.ncols(), 2);
        assert!(m.is_zero());
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(
            Matrix::<f64>::new(0, 3).unwrap_err(),
            MatrixError::InvalidDimensions { nrows: 0, ncols: 3 },
        );
        assert!(Matrix::<f64>::new(3, 0).is_err());
    }

    #[test]
    fn default_is_4x4_identity() {
        let m: Matrix<f64> = Matrix::default();
        assert_eq!(m.nrows(), 4);
        assert_eq!(m.ncols(), 4);
        assert!(m.is_identity());
    }

    #[test]
    fn from_rows_literal() {
        let m = Matrix::from_rows(&[&[1.0, 8.0, 1.0, 4.0], &[5.1, 4.77, 1.0, 0.0]]).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 4);
        assert_eq!(m[(0, 1)], 8.0);
        assert_eq!(m[(1, 0)], 5.1);
    }

    #[test]
    fn from_rows_empty_row_is_zero_row() {
        let m = Matrix::from_rows(&[&[1.0, 8.0, 1.0, 4.0], &[], &[5.0, 9.0, 4.22, 5.0]]).unwrap();
        assert_eq!(m.nrows(), 3);
        for c in 0..4 {
            assert_eq!(m[(1, c)], 0.0);
        }
        assert_eq!(m[(2, 2)], 4.22);
    }

    #[test]
    fn from_rows_errors() {
        assert_eq!(Matrix::<f64>::from_rows(&[]).unwrap_err(), MatrixError::EmptyRows);
        assert_eq!(
            Matrix::<f64>::from_rows(&[&[], &[]]).unwrap_err(),
            MatrixError::EmptyRows,
        );
        assert_eq!(
            Matrix::from_rows(&[&[1.0, 2.0], &[1.0, 2.0, 3.0]]).unwrap_err(),
            MatrixError::RaggedRows { expected: 2, got: 3 },
        );
    }

    #[test]
    fn clone_is_deep_copy() {
        let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        let mut c = m.clone();
        assert_eq!(c, m);
        c[(0, 0)] = 9.0;
        assert_ne!(c, m);
        assert_eq!(m[(0, 0)], 1.0);
    }

    // ── Access ───────────────────────────────────────────────────

    #[test]
    fn index_and_index_mut() {
        let mut m: Matrix<f64> = Matrix::new(2, 3).unwrap();
        m[(1, 2)] = 7.0;
        assert_eq!(m[(1, 2)], 7.0);

        // linear index walks the row-major buffer
        assert_eq!(m[5], 7.0);
        m[0] = 3.0;
        assert_eq!(m[(0, 0)], 3.0);
    }

    #[test]
    #[should_panic(expected = "cell (2, 0) is out of bounds for 2x3 matrix")]
    fn index_out_of_bounds() {
        let m: Matrix<f64> = Matrix::new(2, 3).unwrap();
        let _ = m[(2, 0)];
    }

    #[test]
    #[should_panic(expected = "index 6 is out of bounds for 2x3 matrix")]
    fn linear_index_out_of_bounds() {
        let m: Matrix<f64> = Matrix::new(2, 3).unwrap();
        let _ = m[6];
    }

    #[test]
    fn row_and_column() {
        let m = Matrix::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.column(0), vec![1.0, 4.0]);
        assert_eq!(m.column(2), vec![3.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "row 5 is out of bounds")]
    fn row_out_of_bounds() {
        let m: Matrix<f64> = Matrix::new(2, 3).unwrap();
        let _ = m.row(5);
    }

    #[test]
    fn contains_cell() {
        let m: Matrix<f64> = Matrix::new(2, 3).unwrap();
        assert!(m.contains_cell(1, 2));
        assert!(!m.contains_cell(2, 0));
        assert!(!m.contains_cell(0, 3));
    }

    #[test]
    fn sub_matrix() {
        let m = Matrix::from_rows(&[
            &[1.0, 8.0, 1.0, 4.0],
            &[5.1, 4.77, 1.0, 0.0],
            &[5.0, 9.0, 4.22, 5.0],
            &[0.0, 0.17, 4.0, 2.0],
        ])
        .unwrap();
        let s = m.sub_matrix(2, 2, 2, 2);
        assert_eq!(s.nrows(), 2);
        assert_eq!(s[(0, 0)], 4.22);
        assert_eq!(s[(0, 1)], 5.0);
        assert_eq!(s[(1, 0)], 4.0);
        assert_eq!(s[(1, 1)], 2.0);
    }

    #[test]
    fn sub_matrix_from_origin() {
        let m = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        let s = m.sub_matrix(0, 0, 2, 1);
        assert_eq!(s.column(0), vec![1.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn sub_matrix_out_of_bounds() {
        let m: Matrix<f64> = Matrix::new(3, 3).unwrap();
        let _ = m.sub_matrix(2, 2, 2, 2);
    }

    // ── Mutation ─────────────────────────────────────────────────

    #[test]
    fn fill_and_zero() {
        let mut m: Matrix<f64> = Matrix::new(2, 2).unwrap();
        m.fill(3.5);
        assert_eq!(m[(0, 0)], 3.5);
        assert_eq!(m[(1, 1)], 3.5);
        m.zero();
        assert!(m.is_zero());
    }

    #[test]
    fn set_identity() {
        let mut m: Matrix<f64> = Matrix::new(3, 3).unwrap();
        m.fill(7.0);
        m.set_identity().unwrap();
        assert!(m.is_identity());

        let mut rect: Matrix<f64> = Matrix::new(2, 3).unwrap();
        assert_eq!(
            rect.set_identity().unwrap_err(),
            MatrixError::NotSquare { nrows: 2, ncols: 3 },
        );
    }

    // ── Predicates ───────────────────────────────────────────────

    #[test]
    fn is_zero_with_epsilon() {
        let mut m: Matrix<f64> = Matrix::new(2, 3).unwrap();
        assert!(m.is_zero());
        m[(0, 0)] = 1e-7;
        assert!(m.is_zero()); // below the default 1e-5
        assert!(!m.is_zero_eps(1e-9));
        m[(0, 0)] = 0.1;
        assert!(!m.is_zero());
    }

    #[test]
    fn is_identity_with_epsilon() {
        let mut m: Matrix<f64> = Matrix::new(3, 3).unwrap();
        assert!(m.is_identity());
        m[(0, 0)] = 1.0 + 1e-7;
        assert!(m.is_identity());
        assert!(!m.is_identity_eps(1e-9));
        m[(0, 1)] = 0.5;
        assert!(!m.is_identity());
    }

    #[test]
    fn non_square_is_never_identity() {
        let m: Matrix<f64> = Matrix::new(3, 4).unwrap();
        assert!(!m.is_identity());
    }

    #[test]
    fn exact_equality() {
        let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
        assert_eq!(a, b);

        let mut c = b.clone();
        c[(0, 0)] = 1.0 + 1e-15;
        assert_ne!(a, c);

        // same data, different shape
        let d = Matrix::from_rows(&[&[1.0, 2.0, 3.0, 4.0]]).unwrap();
        assert_ne!(a, d);
    }

    // ── Display ──────────────────────────────────────────────────

    #[test]
    fn display_aligns_columns() {
        let m = Matrix::from_rows(&[&[1.0, 8.0], &[5.1, 0.0]]).unwrap();
        let s = alloc::format!("{}", m);
        assert_eq!(s, "Matrix [1.0, 8.0]\n       [5.1, 0.0]");
    }

    #[test]
    fn display_pads_to_widest_cell() {
        let m = Matrix::from_rows(&[&[1.0, 10.25], &[100.5, 0.0]]).unwrap();
        let s = alloc::format!("{}", m);
        assert_eq!(s, "Matrix [  1.0, 10.25]\n       [100.5,   0.0]");
    }

    // ── Integer elements ─────────────────────────────────────────

    #[test]
    fn integer_matrix() {
        let m: Matrix<i32> = Matrix::new(2, 2).unwrap();
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 1)], 0);
    }
}
