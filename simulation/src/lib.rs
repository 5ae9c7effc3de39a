/// Deterministic replay harness for the PNYX hub exchange
///
/// Provides utilities for:
/// - Loading TOML scenarios of tagged exchange messages
/// - Replaying them from genesis against an in-memory store
/// - Comparing independent runs by state digest and event stream
pub mod config;
pub mod error;
pub mod scenario;

pub use config::{ScenarioConfig, TransactionConfig};
pub use error::{SimulationError, SimulationResult};
pub use scenario::{state_digest, RunReport, ScenarioRunner, SimulationReport, TxOutcome};
