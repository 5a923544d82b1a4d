pub mod invert;
pub mod multiply;
pub mod transpose;

pub use invert::{DEFAULT_TOLERANCE, Inversion, PivotStrategy, invert, invert_in_place};
pub use multiply::{multiply, multiply_into};
pub use transpose::{transpose, transpose_into};
