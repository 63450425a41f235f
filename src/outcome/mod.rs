pub mod types;

use std::io::Read;
use std::path::Path;

use crate::error::{AppError, Result};
pub use types::*;

impl CommandOutcome {
    /// Parse an outcome from its JSON encoding.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load an outcome from a file, or from stdin when the path is absent or `-`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) if p != Path::new("-") => {
                let file = std::fs::File::open(p).map_err(|e| {
                    AppError::Input(format!("Cannot open {}: {e}", p.display()))
                })?;
                Self::from_reader(std::io::BufReader::new(file))
            }
            _ => Self::from_reader(std::io::stdin().lock()),
        }
    }

    /// Number of project results carried, zero for top-level errors and failures.
    pub fn project_count(&self) -> usize {
        match self {
            CommandOutcome::ProjectResults { results } => results.len(),
            CommandOutcome::Error { .. } | CommandOutcome::Failure { .. } => 0,
        }
    }
}
