use crate::constants::{
    MAX_DECIMALS, NATIVE_DECIMALS, NATIVE_DENOM, NATIVE_NAME, NATIVE_ORIGIN_CHAIN, NATIVE_SYMBOL,
};
use crate::errors::{DexError, DexResult};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// A whitelisted asset tradable against PNYX.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct RegisteredAsset {
    /// Opaque identifier, e.g. `ibc/27394FB...`; `pnyx` is the native token
    pub ibc_denom: String,
    /// Display symbol, e.g. `BTC`
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    /// UI formatting exponent; never used in on-chain arithmetic
    #[serde(default)]
    pub decimals: u32,
    #[serde(default)]
    pub origin_chain: String,
    #[serde(default)]
    pub ibc_channel: String,
    /// Gates pool creation and swaps
    pub trading_enabled: bool,
    #[serde(default)]
    pub registered_height: u64,
    #[serde(default)]
    pub registered_by: String,
}

impl RegisteredAsset {
    /// Descriptor of the native hub token
    pub fn native() -> Self {
        Self {
            ibc_denom: NATIVE_DENOM.to_string(),
            symbol: NATIVE_SYMBOL.to_string(),
            name: NATIVE_NAME.to_string(),
            decimals: NATIVE_DECIMALS,
            origin_chain: NATIVE_ORIGIN_CHAIN.to_string(),
            ibc_channel: String::new(),
            trading_enabled: true,
            registered_height: 0,
            registered_by: String::new(),
        }
    }

    /// Stateless validation
    pub fn validate_basic(&self) -> DexResult<()> {
        if self.ibc_denom.is_empty() {
            return Err(DexError::invalid_request("ibc_denom cannot be empty"));
        }
        if self.symbol.is_empty() {
            return Err(DexError::invalid_request("symbol cannot be empty"));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(DexError::invalid_request(format!(
                "decimals cannot exceed {}, got {}",
                MAX_DECIMALS, self.decimals
            )));
        }
        Ok(())
    }
}
