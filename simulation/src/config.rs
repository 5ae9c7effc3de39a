use crate::error::{SimulationError, SimulationResult};
use pnyx_types::{GenesisState, Msg};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Replay scenario loaded from a TOML file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    /// Scenario name for logging
    pub name: String,

    /// Height of the block holding the first transaction
    #[serde(default = "default_start_height")]
    pub start_height: u64,

    /// JSON genesis file, relative to the config file; default genesis when absent
    #[serde(default)]
    pub genesis_path: Option<String>,

    /// Independent replays whose final states must agree
    #[serde(default = "default_runs")]
    pub runs: u32,

    /// Transactions in delivery order, one block each
    pub transactions: Vec<TransactionConfig>,

    /// Directory the config was loaded from
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// One transaction of the scenario
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransactionConfig {
    /// Messages executed atomically
    pub messages: Vec<Msg>,

    /// Set when the transaction is expected to be rejected
    #[serde(default)]
    pub expect_failure: bool,
}

fn default_start_height() -> u64 {
    1
}

fn default_runs() -> u32 {
    2
}

impl ScenarioConfig {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> SimulationResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SimulationError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut config = Self::parse(&content, &path.display().to_string())?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parse and validate TOML text; `origin` names the source in errors
    pub fn parse(content: &str, origin: &str) -> SimulationResult<Self> {
        let config: ScenarioConfig = toml::from_str(content).map_err(|e| SimulationError::Parse {
            path: origin.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> SimulationResult<()> {
        if self.name.trim().is_empty() {
            return Err(SimulationError::InvalidConfig("name cannot be empty".to_string()));
        }
        if self.runs == 0 {
            return Err(SimulationError::InvalidConfig(
                "runs must be at least 1".to_string(),
            ));
        }
        if self.start_height == 0 {
            return Err(SimulationError::InvalidConfig(
                "start_height must be greater than 0".to_string(),
            ));
        }
        if self.transactions.is_empty() {
            return Err(SimulationError::InvalidConfig(
                "at least one transaction is required".to_string(),
            ));
        }

        for (index, tx) in self.transactions.iter().enumerate() {
            if tx.messages.is_empty() {
                return Err(SimulationError::InvalidConfig(format!(
                    "transaction {} has no messages",
                    index
                )));
            }
        }
        Ok(())
    }

    /// Genesis the replay starts from
    pub fn genesis(&self) -> SimulationResult<GenesisState> {
        let Some(relative) = &self.genesis_path else {
            return Ok(GenesisState::default());
        };

        let path = match &self.base_dir {
            Some(dir) => dir.join(relative),
            None => PathBuf::from(relative),
        };
        let content = fs::read_to_string(&path).map_err(|source| SimulationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let genesis: GenesisState =
            serde_json::from_str(&content).map_err(|e| SimulationError::Parse {
                path: path.display().to_string(),
                details: e.to_string(),
            })?;
        genesis.validate()?;
        Ok(genesis)
    }
}
