//! Plain-text matrix input and pseudoinverse output
//!
//! Input: whitespace-separated tokens. The first two are the row count `m`
//! and column count `n`, followed by `m * n` values in row-major order.
//!
//! Output: either a single line `-1` (singular normal-equations matrix) or
//! the branch tag (`R` or `L`) on its own line followed by one line per row,
//! values printed with six decimals and separated by single spaces.

use crate::error::{PinvError, Result};
use crate::matrix::Matrix;
use crate::pipeline::PinvOutcome;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Line written in place of a result when inversion fails
pub const SINGULAR_SENTINEL: &str = "-1";

/// Parse a matrix from its textual form
///
/// # Errors
/// * `Parse` on a missing or malformed token
/// * `InvalidShape` if either dimension is zero
/// * `DimensionOverflow` if either dimension exceeds `max_dimension`
pub fn parse_matrix(text: &str, max_dimension: usize) -> Result<Matrix> {
    let mut tokens = text.split_whitespace().enumerate();

    let mut next_dimension = |position: usize, name: &str| -> Result<usize> {
        let (_, token) = tokens
            .next()
            .ok_or_else(|| PinvError::parse(position, format!("missing {name}")))?;
        token
            .parse::<usize>()
            .map_err(|e| PinvError::parse(position, format!("invalid {name} '{token}': {e}")))
    };
    let rows = next_dimension(1, "row count")?;
    let cols = next_dimension(2, "column count")?;

    if rows == 0 || cols == 0 {
        return Err(PinvError::InvalidShape(format!(
            "dimensions must be positive, got {rows}x{cols}"
        )));
    }
    if rows > max_dimension || cols > max_dimension {
        return Err(PinvError::DimensionOverflow {
            rows,
            cols,
            max: max_dimension,
        });
    }

    let expected = rows * cols;
    let mut data = Vec::with_capacity(expected);
    for index in 0..expected {
        let (position, token) = tokens.next().ok_or_else(|| {
            PinvError::parse(
                index + 3,
                format!("expected {expected} values for a {rows}x{cols} matrix, found {index}"),
            )
        })?;
        let value = token.parse::<f64>().map_err(|e| {
            PinvError::parse(position + 1, format!("invalid value '{token}': {e}"))
        })?;
        data.push(value);
    }

    let trailing = tokens.count();
    if trailing > 0 {
        warn!(trailing, "ignoring tokens after the last matrix value");
    }

    debug!(rows, cols, "parsed input matrix");
    Ok(Matrix::from_shape_vec((rows, cols), data)?)
}

/// Read and parse a matrix from any reader
pub fn read_matrix<R: Read>(mut reader: R, max_dimension: usize) -> Result<Matrix> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_matrix(&text, max_dimension)
}

/// Open `path` and parse the matrix it contains
///
/// # Errors
/// Returns `Io` carrying the path if the file cannot be opened
pub fn read_matrix_file(path: impl AsRef<Path>, max_dimension: usize) -> Result<Matrix> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PinvError::io(path, e))?;
    read_matrix(BufReader::new(file), max_dimension)
}

/// Write a pipeline outcome in the output file format
pub fn write_outcome<W: Write>(writer: &mut W, outcome: &PinvOutcome) -> Result<()> {
    match outcome {
        PinvOutcome::Singular { .. } => writeln!(writer, "{SINGULAR_SENTINEL}")?,
        PinvOutcome::Solved(result) => {
            writeln!(writer, "{}", result.branch.tag())?;
            write_matrix(writer, &result.matrix)?;
        }
    }
    Ok(())
}

/// Write matrix rows with six decimals, space-separated
pub fn write_matrix<W: Write>(writer: &mut W, matrix: &Matrix) -> Result<()> {
    for row in matrix.outer_iter() {
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                writer.write_all(b" ")?;
            }
            write!(writer, "{value:.6}")?;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Render an outcome to a string in the output file format
pub fn format_outcome(outcome: &PinvOutcome) -> Result<String> {
    let mut buffer = Vec::new();
    write_outcome(&mut buffer, outcome)?;
    Ok(String::from_utf8(buffer)?)
}
