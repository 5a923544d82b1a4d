use crate::engine::Engine;
use crate::error::{PinvError, Result};
use crate::matrix::Matrix;

/// Dense product `a * b`
///
/// # Errors
/// Returns `DimensionMismatch` if `a.ncols() != b.nrows()`
pub fn multiply(engine: Engine, a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let mut out = Matrix::zeros((a.nrows(), b.ncols()));
    multiply_into(engine, a, b, &mut out)?;
    Ok(out)
}

/// Dense product `a * b` written into `out`
///
/// One output row is one unit of work. The reduction over the shared
/// dimension runs in index order inside each cell, so the result is
/// bit-identical for every engine.
///
/// # Errors
/// Returns `DimensionMismatch` if the operands do not conform or `out` is
/// not `a.nrows() x b.ncols()`
pub fn multiply_into(engine: Engine, a: &Matrix, b: &Matrix, out: &mut Matrix) -> Result<()> {
    if a.ncols() != b.nrows() {
        return Err(PinvError::DimensionMismatch {
            operation: "multiply",
            left: a.dim(),
            right: b.dim(),
        });
    }
    if out.dim() != (a.nrows(), b.ncols()) {
        return Err(PinvError::DimensionMismatch {
            operation: "multiply output",
            left: (a.nrows(), b.ncols()),
            right: out.dim(),
        });
    }

    let shared = a.ncols();
    engine.for_each_row(out, |i, mut row| {
        let a_row = a.row(i);
        for (j, cell) in row.iter_mut().enumerate() {
            let mut sum = 0.0;
            for k in 0..shared {
                sum += a_row[k] * b[[k, j]];
            }
            *cell = sum;
        }
    });

    Ok(())
}
