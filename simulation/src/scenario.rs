//! Scenario replay
//!
//! Each run starts from an empty in-memory store, imports the genesis and
//! delivers every transaction in its own block. Runs are compared by a
//! SHA-256 digest over the committed key/value pairs and by the event stream.

use crate::config::ScenarioConfig;
use crate::error::{SimulationError, SimulationResult};
use pnyx_dex::{MemStore, MsgRouter};
use pnyx_types::{DexEvent, GenesisState, MODULE_NAME};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

/// Result of delivering one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxOutcome {
    pub index: usize,
    pub height: u64,
    pub committed: bool,
    pub events: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything one replay produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Hex SHA-256 of the final store
    pub state_digest: String,
    pub outcomes: Vec<TxOutcome>,
    pub events: Vec<DexEvent>,
    pub final_state: GenesisState,
}

/// Summary across all runs of a scenario
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub name: String,
    pub runs: u32,
    pub report: RunReport,
}

impl SimulationReport {
    pub fn committed(&self) -> usize {
        self.report.outcomes.iter().filter(|o| o.committed).count()
    }

    pub fn rejected(&self) -> usize {
        self.report.outcomes.len() - self.committed()
    }
}

/// Digest of every key/value pair in key order.
///
/// Each key and value is length-prefixed so distinct stores never collide
/// through concatenation.
pub fn state_digest(store: &MemStore) -> String {
    let mut hasher = Sha256::new();
    for (key, value) in store.entries() {
        hasher.update((key.len() as u64).to_le_bytes());
        hasher.update(key);
        hasher.update((value.len() as u64).to_le_bytes());
        hasher.update(value);
    }
    hex::encode(hasher.finalize())
}

/// Replays a scenario against the exchange module
pub struct ScenarioRunner {
    config: ScenarioConfig,
    genesis: GenesisState,
    router: MsgRouter,
}

impl ScenarioRunner {
    pub fn new(config: ScenarioConfig) -> SimulationResult<Self> {
        let genesis = config.genesis()?;
        Ok(Self {
            config,
            genesis,
            router: MsgRouter::with_dex(),
        })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// One replay from genesis
    pub fn run_once(&self) -> SimulationResult<RunReport> {
        let mut store = MemStore::new();
        let genesis = serde_json::to_value(&self.genesis)
            .map_err(|e| SimulationError::InvalidConfig(format!("genesis: {}", e)))?;
        self.router.init_genesis(&mut store, MODULE_NAME, &genesis)?;

        let mut events = Vec::new();
        let mut outcomes = Vec::with_capacity(self.config.transactions.len());

        for (index, tx) in self.config.transactions.iter().enumerate() {
            let height = self.config.start_height + index as u64;
            events.extend(self.router.begin_block(&mut store, height)?);

            let outcome = match self.router.deliver_tx(&mut store, height, &tx.messages) {
                Ok(result) => {
                    debug!(index, height, events = result.events.len(), "transaction committed");
                    let count = result.events.len();
                    events.extend(result.events);
                    TxOutcome {
                        index,
                        height,
                        committed: true,
                        events: count,
                        error: None,
                    }
                }
                Err(err) => {
                    debug!(index, height, error = %err, "transaction rejected");
                    TxOutcome {
                        index,
                        height,
                        committed: false,
                        events: 0,
                        error: Some(err.to_string()),
                    }
                }
            };

            if outcome.committed == tx.expect_failure {
                let details = match &outcome.error {
                    Some(err) => format!("expected success, got: {}", err),
                    None => "expected failure, but it committed".to_string(),
                };
                return Err(SimulationError::UnexpectedOutcome {
                    index,
                    height,
                    details,
                });
            }
            outcomes.push(outcome);

            events.extend(self.router.end_block(&mut store, height)?);
        }

        let exported = self.router.export_genesis(&store, MODULE_NAME)?;
        let final_state: GenesisState = serde_json::from_value(exported)
            .map_err(|e| SimulationError::InvalidConfig(format!("exported genesis: {}", e)))?;

        let digest = state_digest(&store);
        debug!(entries = store.len(), digest = %digest, "run finished");

        Ok(RunReport {
            state_digest: digest,
            outcomes,
            events,
            final_state,
        })
    }

    /// Replay `runs` times and require identical digests and event streams
    pub fn run(&self, runs: u32) -> SimulationResult<SimulationReport> {
        info!(scenario = %self.config.name, runs, txs = self.config.transactions.len(), "starting replay");

        let first = self.run_once()?;
        for run in 1..runs {
            let next = self.run_once()?;
            if next.state_digest != first.state_digest {
                warn!(run, "state digest diverged");
                return Err(SimulationError::Nondeterministic {
                    run,
                    expected: first.state_digest.clone(),
                    actual: next.state_digest,
                });
            }
            if next != first {
                warn!(run, "event stream diverged");
                return Err(SimulationError::Nondeterministic {
                    run,
                    expected: first.state_digest.clone(),
                    actual: format!("{} (events differ)", next.state_digest),
                });
            }
        }

        info!(scenario = %self.config.name, digest = %first.state_digest, "replay deterministic");
        Ok(SimulationReport {
            name: self.config.name.clone(),
            runs,
            report: first,
        })
    }
}
