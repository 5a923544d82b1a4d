//! Execution strategies for the row-partitioned leaf operations
//!
//! Transpose and multiply are written once against [`Engine::for_each_row`].
//! Each call of the row closure owns exactly one output row, so the parallel
//! strategy needs no synchronization and produces the same bits as the
//! sequential one regardless of worker count.

use crate::matrix::Matrix;
use ndarray::{ArrayViewMut1, Axis};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// How the embarrassingly-parallel stages are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Plain loop on the calling thread
    #[default]
    Sequential,
    /// Rows distributed over rayon's worker pool
    Parallel,
}

impl Engine {
    /// Fill `out` row by row, calling `fill(row_index, row)` once per row
    pub fn for_each_row<F>(self, out: &mut Matrix, fill: F)
    where
        F: Fn(usize, ArrayViewMut1<'_, f64>) + Sync + Send,
    {
        match self {
            Engine::Sequential => out
                .axis_iter_mut(Axis(0))
                .enumerate()
                .for_each(|(i, row)| fill(i, row)),
            Engine::Parallel => out
                .axis_iter_mut(Axis(0))
                .into_par_iter()
                .enumerate()
                .for_each(|(i, row)| fill(i, row)),
        }
    }

    /// Output file written when the caller does not name one
    pub fn default_output_path(self) -> &'static Path {
        match self {
            Engine::Sequential => Path::new("salida.sal"),
            Engine::Parallel => Path::new("salida_paralelo.sal"),
        }
    }

    /// Whether a run with this engine reports its elapsed time on stdout
    pub fn reports_elapsed(self) -> bool {
        matches!(self, Engine::Parallel)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Sequential => write!(f, "sequential"),
            Engine::Parallel => write!(f, "parallel"),
        }
    }
}
