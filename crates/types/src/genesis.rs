use crate::asset::RegisteredAsset;
use crate::constants::is_native;
use crate::errors::{DexError, DexResult};
use crate::pool::Pool;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Module genesis: the asset registry and every pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub registered_assets: Vec<RegisteredAsset>,
    #[serde(default)]
    pub pools: Vec<Pool>,
}

impl Default for GenesisState {
    /// PNYX and ATOM registered, plus a seed ATOM pool of 1M/1M
    fn default() -> Self {
        Self {
            registered_assets: vec![
                RegisteredAsset::native(),
                RegisteredAsset {
                    ibc_denom: "atom".to_string(),
                    symbol: "ATOM".to_string(),
                    name: "Cosmos Hub".to_string(),
                    decimals: 6,
                    origin_chain: "cosmoshub-4".to_string(),
                    trading_enabled: true,
                    ..Default::default()
                },
            ],
            pools: vec![Pool::new("atom", 1_000_000, 1_000_000, 1_000_000)],
        }
    }
}

impl GenesisState {
    /// Stateless validation of the whole genesis document
    pub fn validate(&self) -> DexResult<()> {
        let mut denoms = BTreeSet::new();
        for asset in &self.registered_assets {
            asset.validate_basic()?;
            if !denoms.insert(asset.ibc_denom.as_str()) {
                return Err(DexError::invalid_request(format!(
                    "duplicate registered asset: {}",
                    asset.ibc_denom
                )));
            }
        }

        let mut pools = BTreeSet::new();
        for pool in &self.pools {
            pool.validate()?;
            if !pools.insert(pool.asset_denom.as_str()) {
                return Err(DexError::invalid_request(format!(
                    "duplicate pool: {}",
                    pool.asset_denom
                )));
            }
        }
        Ok(())
    }

    /// Registry entries that are persisted; the native descriptor is implicit
    pub fn stored_assets(&self) -> impl Iterator<Item = &RegisteredAsset> {
        self.registered_assets
            .iter()
            .filter(|asset| !is_native(&asset.ibc_denom))
    }
}
