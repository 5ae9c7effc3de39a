//! Error types for the replay harness

use pnyx_types::DexError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {details}")]
    Parse { path: String, details: String },

    #[error("Exchange error: {0}")]
    Dex(#[from] DexError),

    #[error("Transaction {index} at height {height}: {details}")]
    UnexpectedOutcome {
        index: usize,
        height: u64,
        details: String,
    },

    #[error("Run {run} diverged: digest {actual} differs from {expected}")]
    Nondeterministic {
        run: u32,
        expected: String,
        actual: String,
    },
}

pub type SimulationResult<T> = std::result::Result<T, SimulationError>;
