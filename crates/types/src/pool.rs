use crate::constants::{is_native, Amount};
use crate::errors::{DexError, DexResult};
use crate::serde_helpers::amount_serde;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Constant-product pool pairing PNYX with one registered asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Pool {
    /// Non-PNYX side; primary key
    pub asset_denom: String,
    #[serde(with = "amount_serde")]
    pub pnyx_reserve: Amount,
    #[serde(with = "amount_serde")]
    pub asset_reserve: Amount,
    #[serde(with = "amount_serde")]
    pub total_shares: Amount,
    /// Cumulative PNYX removed by the swap burn
    #[serde(with = "amount_serde", default)]
    pub total_burned: Amount,
    /// Successful swaps through this pool
    #[serde(default)]
    pub swap_count: u64,
    /// Cumulative PNYX-side volume
    #[serde(with = "amount_serde", default)]
    pub total_volume_pnyx: Amount,
    /// Display symbol filled in by queries; never persisted
    #[borsh_skip]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub asset_symbol: String,
}

impl Pool {
    pub fn new(asset_denom: &str, pnyx_reserve: Amount, asset_reserve: Amount, total_shares: Amount) -> Self {
        Self {
            asset_denom: asset_denom.to_string(),
            pnyx_reserve,
            asset_reserve,
            total_shares,
            ..Default::default()
        }
    }

    /// True once every share has been withdrawn
    pub fn is_drained(&self) -> bool {
        self.pnyx_reserve == 0 && self.asset_reserve == 0 && self.total_shares == 0
    }

    /// Reserves ordered as `(in_reserve, out_reserve)` for a swap direction
    pub fn reserves(&self, input_is_pnyx: bool) -> (Amount, Amount) {
        if input_is_pnyx {
            (self.pnyx_reserve, self.asset_reserve)
        } else {
            (self.asset_reserve, self.pnyx_reserve)
        }
    }

    /// Persisted-record invariants.
    ///
    /// A live pool has every reserve and the share supply positive. A pool
    /// emptied by withdrawals keeps its record with all three at zero.
    pub fn validate(&self) -> DexResult<()> {
        if self.asset_denom.is_empty() {
            return Err(DexError::invalid_request("pool asset_denom cannot be empty"));
        }
        if is_native(&self.asset_denom) {
            return Err(DexError::invalid_request("pool asset_denom cannot be pnyx"));
        }
        if self.is_drained() {
            return Ok(());
        }
        if self.pnyx_reserve == 0 || self.asset_reserve == 0 || self.total_shares == 0 {
            return Err(DexError::invalid_request(format!(
                "pool {} must have positive reserves and shares, got pnyx={} asset={} shares={}",
                self.asset_denom, self.pnyx_reserve, self.asset_reserve, self.total_shares
            )));
        }
        Ok(())
    }
}
