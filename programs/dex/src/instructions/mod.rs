//! Message handlers
//!
//! Translate a validated `Msg` into keeper calls and shape the result.

use crate::logic::{
    add_liquidity, create_pool, deregister_asset, register_asset, remove_liquidity, swap,
    swap_exact, update_asset_trading_status, Context,
};
use pnyx_types::{amount_serde, Amount, DexResult, Msg, MsgRegisterAsset, RegisteredAsset};
use serde::Serialize;

/// Result of a successfully handled message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MsgResponse {
    CreatePool {
        #[serde(with = "amount_serde")]
        total_shares: Amount,
    },
    Swap {
        #[serde(with = "amount_serde")]
        output_amount: Amount,
    },
    SwapExact {
        #[serde(with = "amount_serde")]
        output_amount: Amount,
    },
    AddLiquidity {
        #[serde(with = "amount_serde")]
        shares_minted: Amount,
    },
    RemoveLiquidity {
        #[serde(with = "amount_serde")]
        pnyx_returned: Amount,
        #[serde(with = "amount_serde")]
        asset_returned: Amount,
    },
    RegisterAsset,
    UpdateAssetStatus,
    DeregisterAsset,
}

/// New registry entry from a registration message; trading starts enabled
fn asset_from_msg(msg: &MsgRegisterAsset, block_height: u64) -> RegisteredAsset {
    RegisteredAsset {
        ibc_denom: msg.ibc_denom.clone(),
        symbol: msg.symbol.clone(),
        name: msg.name.clone(),
        decimals: msg.decimals,
        origin_chain: msg.origin_chain.clone(),
        ibc_channel: msg.ibc_channel.clone(),
        trading_enabled: true,
        registered_height: block_height,
        registered_by: msg.sender.clone(),
    }
}

/// Execute one message against the context
pub fn handle_msg(ctx: &mut dyn Context, msg: &Msg) -> DexResult<MsgResponse> {
    match msg {
        Msg::CreatePool(m) => {
            let pool = create_pool(ctx, &m.asset_denom, m.pnyx_amt, m.asset_amt)?;
            Ok(MsgResponse::CreatePool {
                total_shares: pool.total_shares,
            })
        }
        Msg::Swap(m) => {
            let output_amount = swap(ctx, &m.input_denom, m.input_amt, &m.output_denom, m.min_output)?;
            Ok(MsgResponse::Swap { output_amount })
        }
        Msg::SwapExact(m) => {
            let output_amount =
                swap_exact(ctx, &m.input_denom, m.input_amt, &m.output_denom, m.min_output)?;
            Ok(MsgResponse::SwapExact { output_amount })
        }
        Msg::AddLiquidity(m) => {
            let shares_minted = add_liquidity(ctx, &m.asset_denom, m.pnyx_amt, m.asset_amt)?;
            Ok(MsgResponse::AddLiquidity { shares_minted })
        }
        Msg::RemoveLiquidity(m) => {
            let (pnyx_returned, asset_returned) = remove_liquidity(ctx, &m.asset_denom, m.shares)?;
            Ok(MsgResponse::RemoveLiquidity {
                pnyx_returned,
                asset_returned,
            })
        }
        Msg::RegisterAsset(m) => {
            let asset = asset_from_msg(m, ctx.block_height());
            register_asset(ctx, asset)?;
            Ok(MsgResponse::RegisterAsset)
        }
        Msg::UpdateAssetStatus(m) => {
            update_asset_trading_status(ctx, &m.ibc_denom, m.enabled)?;
            Ok(MsgResponse::UpdateAssetStatus)
        }
        Msg::DeregisterAsset(m) => {
            deregister_asset(ctx, &m.ibc_denom)?;
            Ok(MsgResponse::DeregisterAsset)
        }
    }
}
