//! Path-based query dispatch
//!
//! Paths are `/`-separated segments, e.g. `spot_price/pnyx/atom`. A denom
//! that itself contains `/` is passed with the slash encoded as `%2F`.

use super::{
    query_asset_by_denom, query_asset_by_symbol, query_estimate_swap, query_liquidity_depth,
    query_lp_position, query_pool, query_pool_stats, query_pools, query_registered_assets,
    query_spot_price,
};
use crate::state::KVStore;
use pnyx_types::{Amount, DexError, DexResult};
use serde::Serialize;

pub const QUERY_POOL: &str = "pool";
pub const QUERY_POOLS: &str = "pools";
pub const QUERY_POOL_STATS: &str = "pool_stats";
pub const QUERY_SPOT_PRICE: &str = "spot_price";
pub const QUERY_LIQUIDITY_DEPTH: &str = "liquidity_depth";
pub const QUERY_LP_POSITION: &str = "lp_position";
pub const QUERY_ESTIMATE_SWAP: &str = "estimate_swap";
pub const QUERY_REGISTERED_ASSETS: &str = "registered_assets";
pub const QUERY_ASSET: &str = "asset";
pub const QUERY_ASSET_BY_SYMBOL: &str = "asset_by_symbol";

/// Split a query path into decoded segments
pub fn split_path(path: &str) -> Vec<String> {
    path.trim_matches('/')
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.replace("%2F", "/").replace("%2f", "/"))
        .collect()
}

fn to_json<T: Serialize>(value: &T) -> DexResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| DexError::internal("querier", e.to_string()))
}

fn args<'p>(path: &'p [String], count: usize, usage: &str) -> DexResult<&'p [String]> {
    if path.len() < count {
        return Err(DexError::invalid_request(format!("usage: {}", usage)));
    }
    Ok(&path[..count])
}

fn parse_amount(field: &str, raw: &str) -> DexResult<Amount> {
    raw.parse::<Amount>()
        .map_err(|_| DexError::invalid_request(format!("invalid {}: {}", field, raw)))
}

/// Answer a query given its decoded segments; the response is JSON
pub fn query_segments(store: &dyn KVStore, path: &[String]) -> DexResult<Vec<u8>> {
    let (head, rest) = match path.split_first() {
        Some(split) => split,
        None => return Err(DexError::unknown_request("empty query path")),
    };

    match head.as_str() {
        QUERY_POOL => {
            let a = args(rest, 1, "pool/{asset_denom}")?;
            to_json(&query_pool(store, &a[0])?)
        }
        QUERY_POOLS => to_json(&query_pools(store)?),
        QUERY_POOL_STATS => {
            let a = args(rest, 1, "pool_stats/{asset_denom}")?;
            to_json(&query_pool_stats(store, &a[0])?)
        }
        QUERY_SPOT_PRICE => {
            let a = args(rest, 2, "spot_price/{input_denom}/{output_denom}")?;
            to_json(&query_spot_price(store, &a[0], &a[1])?)
        }
        QUERY_LIQUIDITY_DEPTH => {
            let a = args(rest, 2, "liquidity_depth/{input_denom}/{output_denom}")?;
            to_json(&query_liquidity_depth(store, &a[0], &a[1])?)
        }
        QUERY_LP_POSITION => {
            let a = args(rest, 2, "lp_position/{asset_denom}/{shares}")?;
            let shares = parse_amount("shares", &a[1])?;
            to_json(&query_lp_position(store, &a[0], shares)?)
        }
        QUERY_ESTIMATE_SWAP => {
            let a = args(rest, 3, "estimate_swap/{input_denom}/{amount}/{output_denom}")?;
            let amount = parse_amount("amount", &a[1])?;
            to_json(&query_estimate_swap(store, &a[0], amount, &a[2])?)
        }
        QUERY_REGISTERED_ASSETS => to_json(&query_registered_assets(store)?),
        QUERY_ASSET => {
            let a = args(rest, 1, "asset/{ibc_denom}")?;
            to_json(&query_asset_by_denom(store, &a[0])?)
        }
        QUERY_ASSET_BY_SYMBOL => {
            let a = args(rest, 1, "asset_by_symbol/{symbol}")?;
            to_json(&query_asset_by_symbol(store, &a[0])?)
        }
        other => Err(DexError::unknown_request(format!("unknown query path: {}", other))),
    }
}

/// Answer a `/`-separated query path
pub fn query(store: &dyn KVStore, path: &str) -> DexResult<Vec<u8>> {
    query_segments(store, &split_path(path))
}
