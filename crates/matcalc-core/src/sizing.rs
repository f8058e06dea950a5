//! Sizing and padding: embedding arbitrary dimensions into the
//! power-of-two squares the recursion requires, and trimming back out.

use std::fmt;

use crate::matrix::{Matrix, SquareMatrix};
use crate::product::MatError;

/// Dimension descriptor of a true, unpadded matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Check that `self * other` is a defined product.
    ///
    /// The columns of the left operand must equal the rows of the right
    /// one; a violation is the reported domain error, never a crash.
    pub fn check_compatible(self, other: Dims) -> Result<(), MatError> {
        if self.cols == other.rows {
            Ok(())
        } else {
            Err(MatError::DimensionMismatch(self, other))
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Smallest power of two greater than or equal to `v`.
///
/// Convention: `closest_power_of_two(1) == 1`, and any power of two maps
/// to itself. Defined for all `v >= 1`.
#[must_use]
pub fn closest_power_of_two(v: usize) -> usize {
    debug_assert!(v >= 1);
    v.next_power_of_two()
}

/// The shared padded side for a product: the smallest power of two that
/// covers every dimension of both operands.
#[must_use]
pub fn padded_side(a: Dims, b: Dims) -> usize {
    closest_power_of_two(a.rows.max(a.cols).max(b.rows).max(b.cols))
}

/// Embed a matrix into a zero-filled side-`side` square buffer.
///
/// The true values land in the top-left `rows x cols` region; the
/// zero margin contributes only zero terms to any product, so the
/// embedding is transparent to multiplication.
#[must_use]
pub fn pad(m: &Matrix, side: usize) -> SquareMatrix {
    debug_assert!(side >= m.rows() && side >= m.cols());
    debug_assert!(side.is_power_of_two());
    let mut padded = SquareMatrix::zeroed(side);
    for i in 0..m.rows() {
        for j in 0..m.cols() {
            padded.set(i, j, m.get(i, j));
        }
    }
    padded
}

/// Extract the true `rows x cols` block from a padded result, dropping
/// the padded buffer.
#[must_use]
pub fn trim(padded: SquareMatrix, rows: usize, cols: usize) -> Matrix {
    debug_assert!(rows <= padded.side() && cols <= padded.side());
    let mut m = Matrix::zeroed(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            m.set(i, j, padded.get(i, j));
        }
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_fixed_points() {
        for v in [1, 2, 4, 8, 16] {
            assert_eq!(closest_power_of_two(v), v);
        }
    }

    #[test]
    fn power_of_two_rounds_up() {
        assert_eq!(closest_power_of_two(3), 4);
        assert_eq!(closest_power_of_two(5), 8);
        assert_eq!(closest_power_of_two(9), 16);
        assert_eq!(closest_power_of_two(17), 32);
    }

    #[test]
    fn padded_side_covers_all_dimensions() {
        let a = Dims::new(2, 3);
        let b = Dims::new(3, 1);
        assert_eq!(padded_side(a, b), 4);

        let a = Dims::new(5, 2);
        let b = Dims::new(2, 9);
        assert_eq!(padded_side(a, b), 16);
    }

    #[test]
    fn padded_side_power_of_two_inputs() {
        let a = Dims::new(4, 4);
        let b = Dims::new(4, 4);
        assert_eq!(padded_side(a, b), 4);
    }

    #[test]
    fn compatible_dims() {
        assert!(Dims::new(2, 3).check_compatible(Dims::new(3, 1)).is_ok());
        assert!(matches!(
            Dims::new(2, 3).check_compatible(Dims::new(2, 3)),
            Err(MatError::DimensionMismatch(_, _))
        ));
    }

    #[test]
    fn pad_places_values_top_left() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let p = pad(&m, 4);
        assert_eq!(p.get(0, 0), 1);
        assert_eq!(p.get(1, 2), 6);
        assert_eq!(p.get(0, 3), 0);
        assert_eq!(p.get(3, 0), 0);
        assert_eq!(p.get(2, 2), 0);
    }

    #[test]
    fn trim_inverts_pad() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let p = pad(&m, 8);
        let back = trim(p, 2, 3);
        assert_eq!(back, m);
    }

    #[test]
    fn dims_display() {
        assert_eq!(Dims::new(2, 3).to_string(), "2x3");
    }
}
