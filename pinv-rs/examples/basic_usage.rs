use ndarray::array;
use pinv_rs::matrix::max_abs_diff;
use pinv_rs::{
    Engine, Matrix, PinvConfig, PinvOutcome, PivotStrategy, error::Result, io, multiply,
    pseudoinverse,
};

/// Example demonstrating how to use the pseudoinverse library
fn main() -> Result<()> {
    println!("=== Pseudoinverse Example ===\n");

    // 1. A wide matrix takes the right-inverse branch
    let wide = io::parse_matrix("2 3\n1 2 3\n4 5 6\n", 100)?;
    println!("Input: {}x{}", wide.nrows(), wide.ncols());

    let outcome = pseudoinverse(&wide, Engine::Parallel, &PinvConfig::default())?;
    print!("{}", io::format_outcome(&outcome)?);

    if let PinvOutcome::Solved(result) = &outcome {
        let check = multiply(Engine::Sequential, &wide, &result.matrix)?;
        let error = max_abs_diff(&check, &Matrix::eye(wide.nrows())).unwrap_or(f64::NAN);
        println!("  max |A*P - I| = {error:.3e}\n");
    }

    // 2. A rank-deficient matrix is reported singular
    let singular = array![[1.0, 2.0], [2.0, 4.0]];
    let outcome = pseudoinverse(&singular, Engine::Sequential, &PinvConfig::default())?;
    println!("Singular input -> {}", io::format_outcome(&outcome)?.trim_end());

    // 3. Loosen the tolerance and enable row exchanges for badly scaled input
    let config = PinvConfig {
        tolerance: 1e-12,
        pivoting: PivotStrategy::Partial,
        ..Default::default()
    };
    let scaled = array![[1e-4, 1.0], [0.0, 1.0], [0.0, 0.0]];
    let outcome = pseudoinverse(&scaled, Engine::Sequential, &config)?;
    println!("\nBadly scaled input with partial pivoting:");
    print!("{}", io::format_outcome(&outcome)?);

    Ok(())
}
