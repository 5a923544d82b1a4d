//! Normal-equations pseudoinverse driver
//!
//! # Algorithm
//! For an m x n input `A`:
//! 1. Transpose `A`
//! 2. Form the normal-equations matrix: `A * At` (m x m) when m <= n,
//!    otherwise `At * A` (n x n)
//! 3. Invert it with Gauss-Jordan elimination (always sequential)
//! 4. Project: `At * S^-1` (right inverse, tag `R`) or `S^-1 * At`
//!    (left inverse, tag `L`). Both give an n x m result.
//!
//! A singular normal-equations matrix is a terminal, reported outcome and
//! not an error.

use crate::engine::Engine;
use crate::error::{PinvError, Result};
use crate::linalg::{
    DEFAULT_TOLERANCE, Inversion, PivotStrategy, invert_in_place, multiply, transpose,
};
use crate::matrix::Matrix;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Largest row or column count accepted by default
pub const DEFAULT_MAX_DIMENSION: usize = 100;

/// Pseudoinverse configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinvConfig {
    /// Pivot magnitude below which the normal-equations matrix is singular
    pub tolerance: f64,

    /// Largest accepted row or column count
    pub max_dimension: usize,

    /// Pivot selection used during inversion
    pub pivoting: PivotStrategy,
}

impl Default for PinvConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_dimension: DEFAULT_MAX_DIMENSION,
            pivoting: PivotStrategy::Diagonal,
        }
    }
}

impl PinvConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(PinvError::Config(format!(
                "tolerance must be finite and positive, got {}",
                self.tolerance
            )));
        }
        if self.max_dimension == 0 {
            return Err(PinvError::Config("max_dimension must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Reject a shape with either side above `max_dimension`
    pub fn check_dimensions(&self, rows: usize, cols: usize) -> Result<()> {
        if rows > self.max_dimension || cols > self.max_dimension {
            return Err(PinvError::DimensionOverflow {
                rows,
                cols,
                max: self.max_dimension,
            });
        }
        Ok(())
    }
}

/// Which side the pseudoinverse is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    /// m <= n: `At * (A * At)^-1`
    Right,
    /// m > n: `(At * A)^-1 * At`
    Left,
}

impl Branch {
    pub fn select(rows: usize, cols: usize) -> Self {
        if rows <= cols { Branch::Right } else { Branch::Left }
    }

    /// Single-character marker written ahead of the result
    pub fn tag(self) -> char {
        match self {
            Branch::Right => 'R',
            Branch::Left => 'L',
        }
    }
}

/// A successfully computed pseudoinverse
#[derive(Debug, Clone, PartialEq)]
pub struct Pseudoinverse {
    pub branch: Branch,
    /// n x m for an m x n input
    pub matrix: Matrix,
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub enum PinvOutcome {
    Solved(Pseudoinverse),
    /// The normal-equations matrix could not be inverted
    Singular { branch: Branch },
}

impl PinvOutcome {
    pub fn branch(&self) -> Branch {
        match self {
            PinvOutcome::Solved(p) => p.branch,
            PinvOutcome::Singular { branch } => *branch,
        }
    }

    pub fn is_singular(&self) -> bool {
        matches!(self, PinvOutcome::Singular { .. })
    }

    /// Branch tag, or `None` for a singular run
    pub fn tag(&self) -> Option<char> {
        match self {
            PinvOutcome::Solved(p) => Some(p.branch.tag()),
            PinvOutcome::Singular { .. } => None,
        }
    }

    pub fn matrix(&self) -> Option<&Matrix> {
        match self {
            PinvOutcome::Solved(p) => Some(&p.matrix),
            PinvOutcome::Singular { .. } => None,
        }
    }
}

/// Compute the Moore-Penrose pseudoinverse of `a`
///
/// `engine` schedules the transpose and both products; inversion is always
/// sequential, so every engine yields the same bits.
///
/// # Errors
/// Returns `Config` for an invalid configuration and `DimensionOverflow` if
/// either side of `a` exceeds `config.max_dimension`
pub fn pseudoinverse(a: &Matrix, engine: Engine, config: &PinvConfig) -> Result<PinvOutcome> {
    config.validate()?;
    let (m, n) = a.dim();
    config.check_dimensions(m, n)?;

    let branch = Branch::select(m, n);
    info!(rows = m, cols = n, ?branch, %engine, "computing pseudoinverse");

    let at = transpose(engine, a);
    debug!("transpose done");

    let mut normal = match branch {
        Branch::Right => multiply(engine, a, &at)?,
        Branch::Left => multiply(engine, &at, a)?,
    };
    debug!(size = normal.nrows(), "normal-equations matrix formed");

    let inverse = match invert_in_place(&mut normal, config.tolerance, config.pivoting)? {
        Inversion::Inverse(inv) => inv,
        Inversion::Singular { pivot_index } => {
            warn!(
                pivot_index,
                tolerance = config.tolerance,
                "normal-equations matrix is singular"
            );
            return Ok(PinvOutcome::Singular { branch });
        }
    };
    debug!("inversion done");

    let matrix = match branch {
        Branch::Right => multiply(engine, &at, &inverse)?,
        Branch::Left => multiply(engine, &inverse, &at)?,
    };

    Ok(PinvOutcome::Solved(Pseudoinverse { branch, matrix }))
}
