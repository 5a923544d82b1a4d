//! Gauss-Jordan inversion
//!
//! The input is reduced to the identity in place while the same row operations
//! are applied to an identity buffer, which ends up holding the inverse. This
//! stage always runs on the calling thread: each pivot step depends on the
//! previous one, and a fixed elimination order keeps the output reproducible.
//!
//! With [`PivotStrategy::Diagonal`] a pivot is only ever taken from the
//! diagonal. A matrix such as `[[0, 1], [1, 0]]` is invertible but is reported
//! singular under that strategy; use [`PivotStrategy::Partial`] to allow row
//! exchanges.

use crate::error::{PinvError, Result};
use crate::matrix::{Matrix, swap_rows};
use ndarray::Zip;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pivot magnitude below which the matrix is treated as singular
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Where the pivot for column `i` is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotStrategy {
    /// Always use `A[i][i]`, never exchange rows
    #[default]
    Diagonal,
    /// Swap in the row at or below `i` with the largest `|A[r][i]|`
    Partial,
}

/// Outcome of an inversion attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Inversion {
    Inverse(Matrix),
    /// A pivot fell below the tolerance at this column
    Singular { pivot_index: usize },
}

impl Inversion {
    pub fn is_singular(&self) -> bool {
        matches!(self, Inversion::Singular { .. })
    }

    pub fn into_inverse(self) -> Option<Matrix> {
        match self {
            Inversion::Inverse(inv) => Some(inv),
            Inversion::Singular { .. } => None,
        }
    }
}

/// Invert a copy of `a`, leaving the input untouched
pub fn invert(a: &Matrix, tolerance: f64, pivoting: PivotStrategy) -> Result<Inversion> {
    let mut work = a.clone();
    invert_in_place(&mut work, tolerance, pivoting)
}

/// Invert `a` by Gauss-Jordan elimination, destroying it
///
/// On success `a` has been reduced to (approximately) the identity. On a
/// singular result `a` is left partially reduced and must not be reused.
/// A pivot that is zero, NaN or below `tolerance` in magnitude is singular.
///
/// # Errors
/// Returns `NotSquare` if `a` is not square
pub fn invert_in_place(
    a: &mut Matrix,
    tolerance: f64,
    pivoting: PivotStrategy,
) -> Result<Inversion> {
    if !a.is_square() {
        return Err(PinvError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }

    let n = a.nrows();
    let mut inv = Matrix::eye(n);

    for i in 0..n {
        if pivoting == PivotStrategy::Partial {
            let best = select_pivot_row(a, i);
            if best != i {
                swap_rows(a, i, best);
                swap_rows(&mut inv, i, best);
            }
        }

        let pivot = a[[i, i]];
        let usable = pivot != 0.0 && pivot.abs() >= tolerance;
        if !usable {
            debug!(pivot_index = i, pivot, tolerance, "pivot below tolerance");
            return Ok(Inversion::Singular { pivot_index: i });
        }

        a.row_mut(i).mapv_inplace(|v| v / pivot);
        inv.row_mut(i).mapv_inplace(|v| v / pivot);

        let pivot_row = a.row(i).to_owned();
        let pivot_inv_row = inv.row(i).to_owned();

        for k in 0..n {
            if k == i {
                continue;
            }
            let factor = a[[k, i]];
            Zip::from(a.row_mut(k))
                .and(&pivot_row)
                .for_each(|value, &p| *value -= p * factor);
            Zip::from(inv.row_mut(k))
                .and(&pivot_inv_row)
                .for_each(|value, &p| *value -= p * factor);
        }
    }

    Ok(Inversion::Inverse(inv))
}

// First row wins on ties so the choice is deterministic.
fn select_pivot_row(a: &Matrix, column: usize) -> usize {
    let mut best = column;
    let mut best_abs = a[[column, column]].abs();
    for r in column + 1..a.nrows() {
        let candidate = a[[r, column]].abs();
        if candidate > best_abs {
            best = r;
            best_abs = candidate;
        }
    }
    best
}
