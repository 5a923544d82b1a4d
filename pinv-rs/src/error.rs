use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinvError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("Parse error at token {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("Matrix dimension {rows}x{cols} exceeds the maximum of {max}")]
    DimensionOverflow { rows: usize, cols: usize, max: usize },

    #[error("Invalid matrix shape: {0}")]
    InvalidShape(String),

    #[error("ndarray shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Dimension mismatch in {operation}: left is {left:?}, right is {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Cannot invert a non-square {rows}x{cols} matrix")]
    NotSquare { rows: usize, cols: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Rendered output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

impl PinvError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PinvError>;
