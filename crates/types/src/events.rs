//! Event definitions

use crate::constants::Amount;
use serde::{Serialize, Serializer};

/// Event emitted by a successful state transition.
///
/// Events are appended to the context sink in call order and exposed by the
/// host after commit. They are never read back by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DexEvent {
    /// Emitted when a pool is created
    CreatePool {
        asset_denom: String,
        pnyx_amount: Amount,
        asset_amount: Amount,
    },

    /// Emitted once per executed hop
    Swap {
        input_denom: String,
        input_amount: Amount,
        output_denom: String,
        output_amount: Amount,
    },

    AddLiquidity {
        asset_denom: String,
        shares_minted: Amount,
    },

    RemoveLiquidity {
        asset_denom: String,
        pnyx_returned: Amount,
        asset_returned: Amount,
    },

    AssetRegistered {
        ibc_denom: String,
        symbol: String,
        origin_chain: String,
    },

    AssetTradingStatusUpdated { ibc_denom: String, enabled: bool },

    AssetDeregistered { ibc_denom: String },
}

impl DexEvent {
    /// Event type string
    pub fn name(&self) -> &'static str {
        match self {
            DexEvent::CreatePool { .. } => "create_pool",
            DexEvent::Swap { .. } => "swap",
            DexEvent::AddLiquidity { .. } => "add_liquidity",
            DexEvent::RemoveLiquidity { .. } => "remove_liquidity",
            DexEvent::AssetRegistered { .. } => "asset_registered",
            DexEvent::AssetTradingStatusUpdated { .. } => "asset_trading_status_updated",
            DexEvent::AssetDeregistered { .. } => "asset_deregistered",
        }
    }

    /// Attributes as ordered key/value strings
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            DexEvent::CreatePool {
                asset_denom,
                pnyx_amount,
                asset_amount,
            } => vec![
                ("asset_denom", asset_denom.clone()),
                ("pnyx_amount", pnyx_amount.to_string()),
                ("asset_amount", asset_amount.to_string()),
            ],
            DexEvent::Swap {
                input_denom,
                input_amount,
                output_denom,
                output_amount,
            } => vec![
                ("input_denom", input_denom.clone()),
                ("input_amount", input_amount.to_string()),
                ("output_denom", output_denom.clone()),
                ("output_amount", output_amount.to_string()),
            ],
            DexEvent::AddLiquidity {
                asset_denom,
                shares_minted,
            } => vec![
                ("asset_denom", asset_denom.clone()),
                ("shares_minted", shares_minted.to_string()),
            ],
            DexEvent::RemoveLiquidity {
                asset_denom,
                pnyx_returned,
                asset_returned,
            } => vec![
                ("asset_denom", asset_denom.clone()),
                ("pnyx_returned", pnyx_returned.to_string()),
                ("asset_returned", asset_returned.to_string()),
            ],
            DexEvent::AssetRegistered {
                ibc_denom,
                symbol,
                origin_chain,
            } => vec![
                ("ibc_denom", ibc_denom.clone()),
                ("symbol", symbol.clone()),
                ("origin_chain", origin_chain.clone()),
            ],
            DexEvent::AssetTradingStatusUpdated { ibc_denom, enabled } => vec![
                ("ibc_denom", ibc_denom.clone()),
                ("enabled", enabled.to_string()),
            ],
            DexEvent::AssetDeregistered { ibc_denom } => vec![("ibc_denom", ibc_denom.clone())],
        }
    }
}

/// Serialises as `{"type": "...", "attributes": [{"key": "...", "value": "..."}]}`
impl Serialize for DexEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Attribute<'a> {
            key: &'a str,
            value: &'a str,
        }

        #[derive(Serialize)]
        struct Wire<'a> {
            #[serde(rename = "type")]
            kind: &'a str,
            attributes: Vec<Attribute<'a>>,
        }

        let attributes = self.attributes();
        Wire {
            kind: self.name(),
            attributes: attributes
                .iter()
                .map(|(key, value)| Attribute { key, value })
                .collect(),
        }
        .serialize(serializer)
    }
}
