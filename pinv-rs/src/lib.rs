//! Moore-Penrose pseudoinverse via the normal equations
//!
//! This crate computes the pseudoinverse of a dense rectangular matrix by
//! forming the normal-equations matrix, inverting it with Gauss-Jordan
//! elimination, and projecting back. The transpose and both matrix products
//! run under a selectable [`Engine`] (sequential or rayon-parallel); the
//! inversion is always sequential, so both engines produce identical bits.
//!
//! # Quick Start
//!
//! ```
//! use ndarray::array;
//! use pinv_rs::{Engine, PinvConfig, pseudoinverse};
//!
//! let a = array![[1.0, 2.0, 3.0]];
//! let outcome = pseudoinverse(&a, Engine::Parallel, &PinvConfig::default())?;
//!
//! assert_eq!(outcome.tag(), Some('R'));
//! assert_eq!(outcome.matrix().map(|p| p.dim()), Some((3, 1)));
//! # Ok::<(), pinv_rs::PinvError>(())
//! ```
//!
//! # File Round Trip
//!
//! ```no_run
//! use pinv_rs::{Engine, PinvConfig, io, pseudoinverse};
//! use std::fs::File;
//! use std::io::BufWriter;
//!
//! let config = PinvConfig::default();
//! let a = io::read_matrix_file("entrada.ent", config.max_dimension)?;
//! let outcome = pseudoinverse(&a, Engine::Sequential, &config)?;
//!
//! let mut out = BufWriter::new(File::create(Engine::Sequential.default_output_path())?);
//! io::write_outcome(&mut out, &outcome)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Known limitation
//!
//! The default [`PivotStrategy::Diagonal`] never exchanges rows, so a
//! normal-equations matrix with a near-zero diagonal entry is reported
//! singular even if it is invertible. [`PivotStrategy::Partial`] lifts this.

pub mod engine;
pub mod error;
pub mod io;
pub mod linalg;
pub mod matrix;
pub mod pipeline;
pub mod report;

pub use engine::Engine;
pub use error::{PinvError, Result};
pub use linalg::{
    DEFAULT_TOLERANCE, Inversion, PivotStrategy, invert, invert_in_place, multiply, transpose,
};
pub use matrix::{Matrix, max_abs_diff, swap_rows};
pub use pipeline::{
    Branch, DEFAULT_MAX_DIMENSION, PinvConfig, PinvOutcome, Pseudoinverse, pseudoinverse,
};
pub use report::RunReport;
