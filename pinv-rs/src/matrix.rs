//! Dense matrix storage
//!
//! Matrices are plain `ndarray::Array2<f64>` in standard (row-major) layout.
//! Row `i` is `m.row(i)`, and each row is handed to a worker as its own
//! disjoint mutable view.

use ndarray::{Array2, Zip, s};

pub type Matrix = Array2<f64>;

/// Exchange two rows in place
pub fn swap_rows(matrix: &mut Matrix, a: usize, b: usize) {
    if a == b {
        return;
    }
    let (mut first, mut second) = matrix.multi_slice_mut((s![a, ..], s![b, ..]));
    Zip::from(&mut first)
        .and(&mut second)
        .for_each(|x, y| std::mem::swap(x, y));
}

/// Largest absolute elementwise difference, or `None` if the shapes differ
pub fn max_abs_diff(a: &Matrix, b: &Matrix) -> Option<f64> {
    if a.dim() != b.dim() {
        return None;
    }
    Some(Zip::from(a).and(b).fold(0.0, |acc, x, y| f64::max(acc, (x - y).abs())))
}
