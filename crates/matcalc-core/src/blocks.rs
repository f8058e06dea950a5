//! Elementwise operations and block decomposition for square buffers.
//!
//! These are the mechanical counterparts of the Strassen recursion: `add`
//! and `sub` build the operand combinations, `split`/`combine` move between
//! a side-`n` buffer and its four side-`n/2` quadrants.

use crate::matrix::SquareMatrix;

/// Elementwise sum of two same-side buffers. Neither input is consumed.
#[must_use]
pub fn add(a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
    debug_assert_eq!(a.side(), b.side());
    let n = a.side();
    let mut c = SquareMatrix::zeroed(n);
    let (av, bv, cv) = (a.as_slice(), b.as_slice(), c.as_mut_slice());
    for i in 0..n * n {
        cv[i] = av[i] + bv[i];
    }
    c
}

/// Elementwise difference of two same-side buffers. Neither input is consumed.
#[must_use]
pub fn sub(a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
    debug_assert_eq!(a.side(), b.side());
    let n = a.side();
    let mut c = SquareMatrix::zeroed(n);
    let (av, bv, cv) = (a.as_slice(), b.as_slice(), c.as_mut_slice());
    for i in 0..n * n {
        cv[i] = av[i] - bv[i];
    }
    c
}

/// The four quadrants of a split buffer, each of side `n/2`.
#[derive(Debug)]
pub struct Quadrants {
    pub tl: SquareMatrix,
    pub tr: SquareMatrix,
    pub bl: SquareMatrix,
    pub br: SquareMatrix,
}

/// Copy the four `n/2` quadrants out of a side-`n` buffer.
///
/// The source is left untouched; the side must be even, which the
/// power-of-two invariant guarantees for every side above 1.
#[must_use]
pub fn split(m: &SquareMatrix) -> Quadrants {
    let n = m.side();
    debug_assert!(n % 2 == 0, "cannot split an odd side");
    let half = n / 2;

    let mut tl = SquareMatrix::zeroed(half);
    let mut tr = SquareMatrix::zeroed(half);
    let mut bl = SquareMatrix::zeroed(half);
    let mut br = SquareMatrix::zeroed(half);

    for i in 0..half {
        for j in 0..half {
            tl.set(i, j, m.get(i, j));
            tr.set(i, j, m.get(i, j + half));
            bl.set(i, j, m.get(i + half, j));
            br.set(i, j, m.get(i + half, j + half));
        }
    }

    Quadrants { tl, tr, bl, br }
}

/// Assemble a side-`2*half` buffer from four side-`half` quadrants.
///
/// Inverse of [`split`]; consumes the quadrants.
#[must_use]
pub fn combine(
    tl: SquareMatrix,
    tr: SquareMatrix,
    bl: SquareMatrix,
    br: SquareMatrix,
) -> SquareMatrix {
    let half = tl.side();
    debug_assert_eq!(half, tr.side());
    debug_assert_eq!(half, bl.side());
    debug_assert_eq!(half, br.side());

    let mut m = SquareMatrix::zeroed(2 * half);
    for i in 0..half {
        for j in 0..half {
            m.set(i, j, tl.get(i, j));
            m.set(i, j + half, tr.get(i, j));
            m.set(i + half, j, bl.get(i, j));
            m.set(i + half, j + half, br.get(i, j));
        }
    }
    m
}
