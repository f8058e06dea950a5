//! Matrix buffer types.
//!
//! `Matrix` is the public rectangular type that enters and leaves the
//! pipeline; `SquareMatrix` is the padded power-of-two buffer the engines
//! recurse on. Both are dense, row-major, zero-filled on creation.

use crate::product::MatError;
use crate::sizing::Dims;

/// Signed element type. Wide enough that products of 32-bit-range inputs
/// are carried exactly.
pub type Element = i64;

/// Rectangular integer matrix, dense row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Element>,
}

impl Matrix {
    /// Create a `rows x cols` matrix with every element zero.
    ///
    /// # Panics
    /// Panics if either dimension is zero (a programming error; the input
    /// reader rejects zero dimensions before construction).
    #[must_use]
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1, "matrix dimensions must be >= 1");
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Build a matrix from row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Element>) -> Result<Self, MatError> {
        if rows == 0 || cols == 0 {
            return Err(MatError::InvalidInput(format!(
                "matrix dimensions must be >= 1, got {rows}x{cols}"
            )));
        }
        if data.len() != rows * cols {
            return Err(MatError::InvalidInput(format!(
                "expected {} elements for a {rows}x{cols} matrix, got {}",
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// The `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeroed(n, n);
        for i in 0..n {
            m.set(i, i, 1);
        }
        m
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Dimension descriptor of this matrix.
    #[must_use]
    pub fn dims(&self) -> Dims {
        Dims {
            rows: self.rows,
            cols: self.cols,
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Element {
        debug_assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: Element) {
        debug_assert!(i < self.rows && j < self.cols);
        self.data[i * self.cols + j] = value;
    }

    /// One row as a slice, for formatting.
    #[must_use]
    pub fn row(&self, i: usize) -> &[Element] {
        debug_assert!(i < self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Row-major view of the whole buffer.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }
}

/// Square matrix buffer of side `n`, the only shape the engines accept.
///
/// Physical length is always `side * side`; `(i, j)` maps to `i * side + j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix {
    side: usize,
    data: Vec<Element>,
}

impl SquareMatrix {
    /// Allocate a side-`n` buffer with every element zero.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    #[must_use]
    pub fn zeroed(n: usize) -> Self {
        assert!(n >= 1, "side length must be >= 1");
        Self {
            side: n,
            data: vec![0; n * n],
        }
    }

    /// Build a square buffer from row-major data of length `n * n`.
    pub fn from_vec(n: usize, data: Vec<Element>) -> Result<Self, MatError> {
        if n == 0 {
            return Err(MatError::InvalidInput(
                "side length must be >= 1".to_string(),
            ));
        }
        if data.len() != n * n {
            return Err(MatError::InvalidInput(format!(
                "expected {} elements for side {n}, got {}",
                n * n,
                data.len()
            )));
        }
        Ok(Self { side: n, data })
    }

    /// A 1x1 buffer holding a single value.
    #[must_use]
    pub fn scalar(value: Element) -> Self {
        Self {
            side: 1,
            data: vec![value],
        }
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Element {
        debug_assert!(i < self.side && j < self.side);
        self.data[i * self.side + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: Element) {
        debug_assert!(i < self.side && j < self.side);
        self.data[i * self.side + j] = value;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Element] {
        &mut self.data
    }
}
