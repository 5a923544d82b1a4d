use anyhow::{Context, Result};
use clap::Parser;
use pinv_rs::{
    DEFAULT_MAX_DIMENSION, DEFAULT_TOLERANCE, Engine, PinvConfig, PinvError, PivotStrategy,
    RunReport, io, pseudoinverse,
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// pinv - Moore-Penrose pseudoinverse of a dense matrix
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "pinv")]
struct Cli {
    /// Input matrix file: "m n" followed by m*n values in row-major order
    #[arg(value_name = "INPUT", default_value = "entrada.ent")]
    input: PathBuf,

    /// Execution engine for the transpose and matrix products
    #[arg(short, long, value_enum, default_value = "sequential")]
    engine: EngineArg,

    /// Output file (default: salida.sal, or salida_paralelo.sal for the parallel engine)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pivot magnitude below which the normal-equations matrix is singular
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Largest accepted row or column count
    #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
    max_dimension: usize,

    /// Exchange rows to find a usable pivot instead of failing on a small diagonal entry
    #[arg(long)]
    partial_pivoting: bool,

    /// Worker threads for the parallel engine (default: one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Save a JSON run report
    #[arg(long, value_name = "REPORT_PATH")]
    report: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum EngineArg {
    /// Single-threaded loops
    Sequential,
    /// Rows distributed over a worker pool
    Parallel,
}

impl From<EngineArg> for Engine {
    fn from(engine: EngineArg) -> Self {
        match engine {
            EngineArg::Sequential => Engine::Sequential,
            EngineArg::Parallel => Engine::Parallel,
        }
    }
}

impl Cli {
    fn config(&self) -> PinvConfig {
        PinvConfig {
            tolerance: self.tolerance,
            max_dimension: self.max_dimension,
            pivoting: if self.partial_pivoting {
                PivotStrategy::Partial
            } else {
                PivotStrategy::Diagonal
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Logs go to stderr; stdout carries only the timing line
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let engine = Engine::from(args.engine);
    let config = args.config();
    config.validate()?;

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the worker pool")?;
        debug!(threads, "worker pool configured");
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| engine.default_output_path().to_path_buf());

    // Both files must open before any computation starts
    let input_file = File::open(&args.input).map_err(|e| PinvError::io(&args.input, e))?;
    let output_file = File::create(&output_path).map_err(|e| PinvError::io(&output_path, e))?;

    let start_time = Instant::now();

    let a = io::read_matrix(BufReader::new(input_file), config.max_dimension)
        .with_context(|| format!("Failed to read matrix from {}", args.input.display()))?;
    info!(
        input = %args.input.display(),
        output = %output_path.display(),
        rows = a.nrows(),
        cols = a.ncols(),
        "loaded input matrix"
    );

    let outcome = pseudoinverse(&a, engine, &config)?;

    let mut writer = BufWriter::new(output_file);
    io::write_outcome(&mut writer, &outcome)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    let elapsed = start_time.elapsed().as_secs_f64();

    // A singular run leaves stdout empty
    if engine.reports_elapsed() && !outcome.is_singular() {
        println!("Elapsed: {elapsed:.6} seconds");
    }

    match outcome.tag() {
        Some(tag) => info!(branch = %tag, elapsed, "pseudoinverse written"),
        None => info!(elapsed, "normal-equations matrix is singular, wrote sentinel"),
    }

    if let Some(report_path) = &args.report {
        RunReport::new(
            &args.input,
            &output_path,
            engine,
            a.dim(),
            &outcome,
            &config,
            elapsed,
        )
        .save(report_path)?;
        info!(report = %report_path.display(), "saved run report");
    }

    Ok(())
}
