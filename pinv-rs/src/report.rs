use crate::engine::Engine;
use crate::error::{PinvError, Result};
use crate::linalg::PivotStrategy;
use crate::pipeline::{PinvConfig, PinvOutcome};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Summary of one run, saved as JSON alongside the output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub engine: Engine,
    pub rows: usize,
    pub cols: usize,
    /// `R` or `L`; absent for a singular run
    pub branch: Option<char>,
    pub singular: bool,
    pub elapsed_seconds: f64,
    pub tolerance: f64,
    pub pivoting: PivotStrategy,
}

impl RunReport {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        engine: Engine,
        shape: (usize, usize),
        outcome: &PinvOutcome,
        config: &PinvConfig,
        elapsed_seconds: f64,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            engine,
            rows: shape.0,
            cols: shape.1,
            branch: outcome.tag(),
            singular: outcome.is_singular(),
            elapsed_seconds,
            tolerance: config.tolerance,
            pivoting: config.pivoting,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|e| PinvError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use crate::pipeline::{Branch, Pseudoinverse};

    #[test]
    fn test_report_json_fields() {
        let outcome = PinvOutcome::Solved(Pseudoinverse {
            branch: Branch::Right,
            matrix: Matrix::eye(2),
        });
        let report = RunReport::new(
            "entrada.ent",
            "salida_paralelo.sal",
            Engine::Parallel,
            (2, 2),
            &outcome,
            &PinvConfig::default(),
            0.5,
        );
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["engine"], "parallel");
        assert_eq!(value["branch"], "R");
        assert_eq!(value["singular"], false);
        assert_eq!(value["pivoting"], "diagonal");
    }

    #[test]
    fn test_report_singular_has_no_branch() {
        let outcome = PinvOutcome::Singular { branch: Branch::Left };
        let config = PinvConfig::default();
        let report = RunReport::new("a", "b", Engine::Sequential, (3, 2), &outcome, &config, 0.0);
        assert_eq!(report.branch, None);
        assert!(report.singular);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.save(&path).unwrap();
        let json = std::fs::read_to_string(&path).unwrap();
        let loaded: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, report);
    }
}
