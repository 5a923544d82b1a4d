use crate::engine::Engine;
use crate::error::{PinvError, Result};
use crate::matrix::Matrix;

/// Transpose `a` (r x c) into a freshly allocated c x r matrix
pub fn transpose(engine: Engine, a: &Matrix) -> Matrix {
    let mut out = Matrix::zeros((a.ncols(), a.nrows()));
    fill_transpose(engine, a, &mut out);
    out
}

/// Transpose `a` into a caller-provided buffer
///
/// # Errors
/// Returns `DimensionMismatch` if `out` is not `a.ncols() x a.nrows()`
pub fn transpose_into(engine: Engine, a: &Matrix, out: &mut Matrix) -> Result<()> {
    if out.dim() != (a.ncols(), a.nrows()) {
        return Err(PinvError::DimensionMismatch {
            operation: "transpose",
            left: a.dim(),
            right: out.dim(),
        });
    }
    fill_transpose(engine, a, out);
    Ok(())
}

// Output row j is input column j; every cell is a plain copy.
fn fill_transpose(engine: Engine, a: &Matrix, out: &mut Matrix) {
    engine.for_each_row(out, |j, mut row| {
        for (i, cell) in row.iter_mut().enumerate() {
            *cell = a[[i, j]];
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_transpose_rectangular() {
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let expected = array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]];
        assert_eq!(transpose(Engine::Sequential, &a), expected);
        assert_eq!(transpose(Engine::Parallel, &a), expected);
    }

    #[test]
    fn test_double_transpose_is_exact() {
        let a = array![
            [0.1, -2.5e-9, 3.0],
            [1e12, 7.25, -0.3333333333333333],
        ];
        let back = transpose(Engine::Parallel, &transpose(Engine::Parallel, &a));
        assert_eq!(back, a);
    }

    #[test]
    fn test_transpose_into_rejects_wrong_shape() {
        let a = Matrix::zeros((2, 3));
        let mut out = Matrix::zeros((2, 3));
        let err = transpose_into(Engine::Sequential, &a, &mut out).unwrap_err();
        assert!(matches!(
            err,
            PinvError::DimensionMismatch { operation: "transpose", .. }
        ));
    }
}
