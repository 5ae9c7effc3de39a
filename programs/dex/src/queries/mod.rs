//! Read-only queries
//!
//! Every query reads the same store the keeper writes and never mutates it.
//! Responses are serde structs; amounts serialise as decimal strings.

pub mod querier;

pub use querier::*;

use crate::logic::{
    estimate_swap_output, get_all_assets, get_all_pools, get_asset_by_denom, get_asset_by_symbol,
    get_pool, resolve_asset_denom, symbol_for_denom,
};
use crate::state::KVStore;
use pnyx_math::{
    chain_price_per_million, mul_div, price_impact_bps, share_of_pool_bps, spot_price_per_million,
    withdrawal_amounts,
};
use pnyx_types::{
    amount_serde, is_native, Amount, DexError, DexResult, Pool, RegisteredAsset, BPS_DENOM,
    DEPTH_LEVELS_BPS, NATIVE_DENOM, PRICE_SCALE, SWAP_FEE_BPS,
};
use serde::Serialize;

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    pub asset_denom: String,
    pub asset_symbol: String,
    pub swap_count: u64,
    #[serde(with = "amount_serde")]
    pub total_volume_pnyx: Amount,
    #[serde(with = "amount_serde")]
    pub total_fees_earned: Amount,
    #[serde(with = "amount_serde")]
    pub total_burned: Amount,
    #[serde(with = "amount_serde")]
    pub pnyx_reserve: Amount,
    #[serde(with = "amount_serde")]
    pub asset_reserve: Amount,
    /// Asset received for one million PNYX at the marginal rate
    #[serde(with = "amount_serde")]
    pub spot_price_per_million: Amount,
    #[serde(with = "amount_serde")]
    pub total_shares: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpotPrice {
    pub input_denom: String,
    pub output_denom: String,
    #[serde(with = "amount_serde")]
    pub price_per_million: Amount,
    pub input_symbol: String,
    pub output_symbol: String,
    pub route: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepthLevel {
    #[serde(with = "amount_serde")]
    pub input_amount: Amount,
    #[serde(with = "amount_serde")]
    pub output_amount: Amount,
    /// Shortfall against the spot price, in bps
    pub price_impact_bps: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiquidityDepth {
    pub input_denom: String,
    pub output_denom: String,
    pub levels: Vec<DepthLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LpPosition {
    pub asset_denom: String,
    #[serde(with = "amount_serde")]
    pub shares: Amount,
    #[serde(with = "amount_serde")]
    pub pnyx_value: Amount,
    #[serde(with = "amount_serde")]
    pub asset_value: Amount,
    pub share_of_pool_bps: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateSwap {
    #[serde(with = "amount_serde")]
    pub expected_output: Amount,
    pub route: Vec<String>,
    pub route_symbols: Vec<String>,
    pub hops: usize,
}

// ============================================================================
// Helpers
// ============================================================================

fn require_query_pool(store: &dyn KVStore, asset_denom: &str) -> DexResult<Pool> {
    get_pool(store, asset_denom)?
        .ok_or_else(|| DexError::key_not_found(format!("pool for {} not found", asset_denom)))
}

fn with_symbol(store: &dyn KVStore, mut pool: Pool) -> DexResult<Pool> {
    pool.asset_symbol = symbol_for_denom(store, &pool.asset_denom)?;
    Ok(pool)
}

/// Bps ratios never exceed `BPS_DENOM`
fn bps_to_u64(value: Amount) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

fn route_for(input_denom: &str, output_denom: &str) -> Vec<String> {
    if is_native(input_denom) || is_native(output_denom) {
        vec![input_denom.to_string(), output_denom.to_string()]
    } else {
        vec![
            input_denom.to_string(),
            NATIVE_DENOM.to_string(),
            output_denom.to_string(),
        ]
    }
}

/// Marginal price of one direct leg
fn direct_leg(store: &dyn KVStore, input_denom: &str, output_denom: &str) -> DexResult<Amount> {
    let asset_denom = resolve_asset_denom(input_denom, output_denom)?;
    let pool = require_query_pool(store, asset_denom)?;
    let input_is_pnyx = is_native(input_denom);
    let (in_reserve, out_reserve) = pool.reserves(input_is_pnyx);
    spot_price_per_million(in_reserve, out_reserve, !input_is_pnyx)
}

/// Reserve on the input side of the first hop
fn first_hop_input_reserve(store: &dyn KVStore, input_denom: &str, output_denom: &str) -> DexResult<Amount> {
    if is_native(input_denom) {
        Ok(require_query_pool(store, output_denom)?.pnyx_reserve)
    } else {
        Ok(require_query_pool(store, input_denom)?.asset_reserve)
    }
}

// ============================================================================
// Queries
// ============================================================================

/// One pool, enriched with its display symbol
pub fn query_pool(store: &dyn KVStore, asset_denom: &str) -> DexResult<Pool> {
    let pool = require_query_pool(store, asset_denom)?;
    with_symbol(store, pool)
}

/// Every pool in denom order, enriched
pub fn query_pools(store: &dyn KVStore) -> DexResult<Vec<Pool>> {
    get_all_pools(store)?
        .into_iter()
        .map(|pool| with_symbol(store, pool))
        .collect()
}

/// Registered assets, native descriptor first
pub fn query_registered_assets(store: &dyn KVStore) -> DexResult<Vec<RegisteredAsset>> {
    let mut assets = vec![RegisteredAsset::native()];
    assets.extend(get_all_assets(store)?);
    Ok(assets)
}

pub fn query_asset_by_denom(store: &dyn KVStore, denom: &str) -> DexResult<RegisteredAsset> {
    if is_native(denom) {
        return Ok(RegisteredAsset::native());
    }
    get_asset_by_denom(store, denom)?
        .ok_or_else(|| DexError::key_not_found(format!("asset not found: {}", denom)))
}

pub fn query_asset_by_symbol(store: &dyn KVStore, symbol: &str) -> DexResult<RegisteredAsset> {
    let native = RegisteredAsset::native();
    if symbol == native.symbol {
        return Ok(native);
    }
    get_asset_by_symbol(store, symbol)?
        .ok_or_else(|| DexError::key_not_found(format!("asset with symbol {} not found", symbol)))
}

/// Output per million input units at the marginal rate, fee and burn included
pub fn compute_spot_price(store: &dyn KVStore, input_denom: &str, output_denom: &str) -> DexResult<Amount> {
    if input_denom == output_denom {
        return Err(DexError::invalid_request(format!(
            "input and output denoms must differ, got {} for both",
            input_denom
        )));
    }
    if is_native(input_denom) || is_native(output_denom) {
        return direct_leg(store, input_denom, output_denom);
    }
    let first = direct_leg(store, input_denom, NATIVE_DENOM)?;
    let second = direct_leg(store, NATIVE_DENOM, output_denom)?;
    chain_price_per_million(first, second)
}

pub fn query_spot_price(store: &dyn KVStore, input_denom: &str, output_denom: &str) -> DexResult<SpotPrice> {
    let price_per_million = compute_spot_price(store, input_denom, output_denom)?;
    Ok(SpotPrice {
        input_denom: input_denom.to_string(),
        output_denom: output_denom.to_string(),
        price_per_million,
        input_symbol: symbol_for_denom(store, input_denom)?,
        output_symbol: symbol_for_denom(store, output_denom)?,
        route: route_for(input_denom, output_denom),
    })
}

/// Aggregated activity and reserves of one pool
pub fn query_pool_stats(store: &dyn KVStore, asset_denom: &str) -> DexResult<PoolStats> {
    let pool = require_query_pool(store, asset_denom)?;
    let spot_price_per_million = if pool.pnyx_reserve == 0 {
        0
    } else {
        spot_price_per_million(pool.pnyx_reserve, pool.asset_reserve, false)?
    };

    Ok(PoolStats {
        asset_symbol: symbol_for_denom(store, asset_denom)?,
        swap_count: pool.swap_count,
        total_volume_pnyx: pool.total_volume_pnyx,
        total_fees_earned: mul_div(pool.total_volume_pnyx, SWAP_FEE_BPS, BPS_DENOM)?,
        total_burned: pool.total_burned,
        pnyx_reserve: pool.pnyx_reserve,
        asset_reserve: pool.asset_reserve,
        spot_price_per_million,
        total_shares: pool.total_shares,
        asset_denom: pool.asset_denom,
    })
}

/// Outputs for trades of 0.1%, 0.5%, 1%, 5% and 10% of the input reserve
pub fn compute_liquidity_depth(store: &dyn KVStore, input_denom: &str, output_denom: &str) -> DexResult<Vec<DepthLevel>> {
    let spot = compute_spot_price(store, input_denom, output_denom)?;
    let in_reserve = first_hop_input_reserve(store, input_denom, output_denom)?;

    let mut levels = Vec::with_capacity(DEPTH_LEVELS_BPS.len());
    for level_bps in DEPTH_LEVELS_BPS {
        let input_amount = mul_div(in_reserve, level_bps, BPS_DENOM)?;
        if input_amount == 0 {
            continue;
        }
        let output_amount = match estimate_swap_output(store, input_denom, input_amount, output_denom) {
            Ok(estimate) => estimate.expected_output,
            Err(_) => continue,
        };
        let ideal = mul_div(input_amount, spot, PRICE_SCALE)?;
        levels.push(DepthLevel {
            input_amount,
            output_amount,
            price_impact_bps: bps_to_u64(price_impact_bps(ideal, output_amount)?),
        });
    }
    Ok(levels)
}

pub fn query_liquidity_depth(store: &dyn KVStore, input_denom: &str, output_denom: &str) -> DexResult<LiquidityDepth> {
    Ok(LiquidityDepth {
        levels: compute_liquidity_depth(store, input_denom, output_denom)?,
        input_denom: input_denom.to_string(),
        output_denom: output_denom.to_string(),
    })
}

/// Reserves currently redeemable by `shares`
pub fn query_lp_position(store: &dyn KVStore, asset_denom: &str, shares: Amount) -> DexResult<LpPosition> {
    if shares == 0 {
        return Err(DexError::invalid_request("shares must be positive"));
    }
    let pool = require_query_pool(store, asset_denom)?;
    if pool.total_shares == 0 {
        return Err(DexError::invalid_request(format!(
            "pool for {} has no liquidity",
            asset_denom
        )));
    }
    if shares > pool.total_shares {
        return Err(DexError::invalid_request(format!(
            "shares exceed total supply: {} > {}",
            shares, pool.total_shares
        )));
    }

    let (pnyx_value, asset_value) =
        withdrawal_amounts(shares, pool.pnyx_reserve, pool.asset_reserve, pool.total_shares)?;
    Ok(LpPosition {
        asset_denom: asset_denom.to_string(),
        shares,
        pnyx_value,
        asset_value,
        share_of_pool_bps: bps_to_u64(share_of_pool_bps(shares, pool.total_shares)?),
    })
}

pub fn query_estimate_swap(
    store: &dyn KVStore,
    input_denom: &str,
    input_amount: Amount,
    output_denom: &str,
) -> DexResult<EstimateSwap> {
    let estimate = estimate_swap_output(store, input_denom, input_amount, output_denom)?;
    let route_symbols = estimate
        .route
        .iter()
        .map(|denom| symbol_for_denom(store, denom))
        .collect::<DexResult<Vec<_>>>()?;

    Ok(EstimateSwap {
        expected_output: estimate.expected_output,
        hops: estimate.hops(),
        route_symbols,
        route: estimate.route,
    })
}
