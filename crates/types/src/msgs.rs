//! Transaction messages accepted by the exchange module.
//!
//! Every message is checked statelessly with `validate_basic` before it
//! reaches the keeper.

use crate::constants::{Amount, MAX_DECIMALS, MODULE_NAME};
use crate::errors::{DexError, DexResult};
use crate::serde_helpers::amount_serde;
use serde::{Deserialize, Serialize};

fn require_denom(field: &str, value: &str) -> DexResult<()> {
    if value.is_empty() {
        return Err(DexError::invalid_request(format!("{} is required", field)));
    }
    Ok(())
}

fn require_positive(field: &str, value: Amount) -> DexResult<()> {
    if value == 0 {
        return Err(DexError::invalid_request(format!("{} must be positive", field)));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreatePool {
    #[serde(default)]
    pub sender: String,
    pub asset_denom: String,
    #[serde(with = "amount_serde")]
    pub pnyx_amt: Amount,
    #[serde(with = "amount_serde")]
    pub asset_amt: Amount,
}

impl MsgCreatePool {
    pub fn validate_basic(&self) -> DexResult<()> {
        require_denom("asset_denom", &self.asset_denom)?;
        if self.pnyx_amt == 0 || self.asset_amt == 0 {
            return Err(DexError::invalid_request("both amounts must be positive"));
        }
        Ok(())
    }
}

/// Direct swap; exactly one side must be PNYX
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSwap {
    #[serde(default)]
    pub sender: String,
    pub input_denom: String,
    #[serde(with = "amount_serde")]
    pub input_amt: Amount,
    pub output_denom: String,
    /// Zero disables the slippage check
    #[serde(with = "amount_serde", default)]
    pub min_output: Amount,
}

impl MsgSwap {
    pub fn validate_basic(&self) -> DexResult<()> {
        if self.input_denom.is_empty() || self.output_denom.is_empty() {
            return Err(DexError::invalid_request(
                "input_denom and output_denom are required",
            ));
        }
        require_positive("input_amt", self.input_amt)
    }
}

/// Routed swap between any two tradable denoms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSwapExact {
    #[serde(default)]
    pub sender: String,
    pub input_denom: String,
    #[serde(with = "amount_serde")]
    pub input_amt: Amount,
    pub output_denom: String,
    #[serde(with = "amount_serde", default)]
    pub min_output: Amount,
}

impl MsgSwapExact {
    pub fn validate_basic(&self) -> DexResult<()> {
        if self.input_denom.is_empty() || self.output_denom.is_empty() {
            return Err(DexError::invalid_request(
                "input_denom and output_denom are required",
            ));
        }
        if self.input_denom == self.output_denom {
            return Err(DexError::invalid_request(
                "input and output denoms must differ",
            ));
        }
        require_positive("input_amt", self.input_amt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgAddLiquidity {
    #[serde(default)]
    pub sender: String,
    pub asset_denom: String,
    #[serde(with = "amount_serde")]
    pub pnyx_amt: Amount,
    #[serde(with = "amount_serde")]
    pub asset_amt: Amount,
}

impl MsgAddLiquidity {
    pub fn validate_basic(&self) -> DexResult<()> {
        require_denom("asset_denom", &self.asset_denom)?;
        if self.pnyx_amt == 0 || self.asset_amt == 0 {
            return Err(DexError::invalid_request("both amounts must be positive"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgRemoveLiquidity {
    #[serde(default)]
    pub sender: String,
    pub asset_denom: String,
    #[serde(with = "amount_serde")]
    pub shares: Amount,
}

impl MsgRemoveLiquidity {
    pub fn validate_basic(&self) -> DexResult<()> {
        require_denom("asset_denom", &self.asset_denom)?;
        require_positive("shares", self.shares)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgRegisterAsset {
    #[serde(default)]
    pub sender: String,
    pub ibc_denom: String,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub decimals: u32,
    #[serde(default)]
    pub origin_chain: String,
    #[serde(default)]
    pub ibc_channel: String,
}

impl MsgRegisterAsset {
    pub fn validate_basic(&self) -> DexResult<()> {
        require_denom("ibc_denom", &self.ibc_denom)?;
        if self.symbol.is_empty() {
            return Err(DexError::invalid_request("symbol is required"));
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateAssetStatus {
    #[serde(default)]
    pub sender: String,
    pub ibc_denom: String,
    pub enabled: bool,
}

impl MsgUpdateAssetStatus {
    pub fn validate_basic(&self) -> DexResult<()> {
        require_denom("ibc_denom", &self.ibc_denom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgDeregisterAsset {
    #[serde(default)]
    pub sender: String,
    pub ibc_denom: String,
}

impl MsgDeregisterAsset {
    pub fn validate_basic(&self) -> DexResult<()> {
        require_denom("ibc_denom", &self.ibc_denom)
    }
}

/// Tagged union of every module message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Msg {
    CreatePool(MsgCreatePool),
    Swap(MsgSwap),
    SwapExact(MsgSwapExact),
    AddLiquidity(MsgAddLiquidity),
    RemoveLiquidity(MsgRemoveLiquidity),
    RegisterAsset(MsgRegisterAsset),
    UpdateAssetStatus(MsgUpdateAssetStatus),
    DeregisterAsset(MsgDeregisterAsset),
}

impl Msg {
    /// Module the message is routed to
    pub fn route(&self) -> &'static str {
        MODULE_NAME
    }

    /// Message tag, identical to the serde `type` field
    pub fn type_name(&self) -> &'static str {
        match self {
            Msg::CreatePool(_) => "create_pool",
            Msg::Swap(_) => "swap",
            Msg::SwapExact(_) => "swap_exact",
            Msg::AddLiquidity(_) => "add_liquidity",
            Msg::RemoveLiquidity(_) => "remove_liquidity",
            Msg::RegisterAsset(_) => "register_asset",
            Msg::UpdateAssetStatus(_) => "update_asset_status",
            Msg::DeregisterAsset(_) => "deregister_asset",
        }
    }

    pub fn sender(&self) -> &str {
        match self {
            Msg::CreatePool(m) => &m.sender,
            Msg::Swap(m) => &m.sender,
            Msg::SwapExact(m) => &m.sender,
            Msg::AddLiquidity(m) => &m.sender,
            Msg::RemoveLiquidity(m) => &m.sender,
            Msg::RegisterAsset(m) => &m.sender,
            Msg::UpdateAssetStatus(m) => &m.sender,
            Msg::DeregisterAsset(m) => &m.sender,
        }
    }

    pub fn validate_basic(&self) -> DexResult<()> {
        match self {
            Msg::CreatePool(m) => m.validate_basic(),
            Msg::Swap(m) => m.validate_basic(),
            Msg::SwapExact(m) => m.validate_basic(),
            Msg::AddLiquidity(m) => m.validate_basic(),
            Msg::RemoveLiquidity(m) => m.validate_basic(),
            Msg::RegisterAsset(m) => m.validate_basic(),
            Msg::UpdateAssetStatus(m) => m.validate_basic(),
            Msg::DeregisterAsset(m) => m.validate_basic(),
        }
    }
}
