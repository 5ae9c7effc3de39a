//! Path queries answered from the committed store

use crate::common::*;
use pnyx_dex::queries;
use serde_json::{json, Value};

fn query_json(ctx: &TestContext, path: &str) -> Value {
    let bytes = queries::query(&ctx.store, path).unwrap_or_else(|e| panic!("{}: {}", path, e));
    serde_json::from_slice(&bytes).unwrap()
}

fn query_err(ctx: &TestContext, path: &str) -> DexError {
    queries::query(&ctx.store, path).unwrap_err()
}

#[test]
fn test_pool_and_pools() {
    let mut ctx = TestContext::with_default_genesis();
    ctx.listed_pool("ibc/BTC", "BTC", 2_000_000, 100);

    let bytes = queries::query(&ctx.store, "pool/atom").unwrap();
    let pool: Pool = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(pool.asset_symbol, "ATOM");
    assert_eq!(pool.pnyx_reserve, 1_000_000);

    let pools = query_json(&ctx, "pools");
    let denoms: Vec<&str> = pools
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["asset_denom"].as_str().unwrap())
        .collect();
    assert_eq!(denoms, vec!["atom", "ibc/BTC"]);
    assert_eq!(pools[1]["asset_symbol"], "BTC");

    // denoms with a slash are passed encoded
    let btc = query_json(&ctx, "pool/ibc%2FBTC");
    assert_eq!(btc["pnyx_reserve"], "2000000");
}

#[test]
fn test_pool_stats_after_trading() {
    let mut ctx = TestContext::with_default_genesis();
    ctx.swap("pnyx", 10_000, "atom", 0).unwrap();

    let stats = query_json(&ctx, "pool_stats/atom");
    assert_eq!(
        stats,
        json!({
            "asset_denom": "atom",
            "asset_symbol": "ATOM",
            "swap_count": 1,
            "total_volume_pnyx": "10000",
            "total_fees_earned": "30",
            "total_burned": "0",
            "pnyx_reserve": "1010000",
            "asset_reserve": "990129",
            "spot_price_per_million": "977384",
            "total_shares": "1000000",
        })
    );
}

#[test]
fn test_spot_price_direct_and_routed() {
    let mut ctx = TestContext::with_default_genesis();
    ctx.listed_pool("ibc/BTC", "BTC", 1_000_000, 1_000_000);

    let direct = query_json(&ctx, "spot_price/pnyx/atom");
    assert_eq!(direct["price_per_million"], "997000");
    assert_eq!(direct["route"], json!(["pnyx", "atom"]));
    assert_eq!(direct["input_symbol"], "PNYX");
    assert_eq!(direct["output_symbol"], "ATOM");

    let into_pnyx = query_json(&ctx, "spot_price/atom/pnyx");
    assert_eq!(into_pnyx["price_per_million"], "987030");

    let routed = query_json(&ctx, "spot_price/atom/ibc%2FBTC");
    assert_eq!(routed["price_per_million"], "984068");
    assert_eq!(routed["route"], json!(["atom", "pnyx", "ibc/BTC"]));
    assert_eq!(routed["output_symbol"], "BTC");

    let err = query_err(&ctx, "spot_price/atom/atom");
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
}

#[test]
fn test_liquidity_depth_levels() {
    let ctx = TestContext::with_default_genesis();
    let depth = query_json(&ctx, "liquidity_depth/pnyx/atom");

    assert_eq!(
        depth["levels"],
        json!([
            {"input_amount": "1000", "output_amount": "996", "price_impact_bps": 10},
            {"input_amount": "5000", "output_amount": "4960", "price_impact_bps": 50},
            {"input_amount": "10000", "output_amount": "9871", "price_impact_bps": 99},
            {"input_amount": "50000", "output_amount": "47482", "price_impact_bps": 475},
            {"input_amount": "100000", "output_amount": "90661", "price_impact_bps": 906},
        ])
    );
}

#[test]
fn test_lp_position() {
    let ctx = TestContext::with_default_genesis();

    let position = query_json(&ctx, "lp_position/atom/500000");
    assert_eq!(
        position,
        json!({
            "asset_denom": "atom",
            "shares": "500000",
            "pnyx_value": "500000",
            "asset_value": "500000",
            "share_of_pool_bps": 5000,
        })
    );

    let err = query_err(&ctx, "lp_position/atom/1000001");
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    let err = query_err(&ctx, "lp_position/atom/lots");
    assert_eq!(err.to_string(), "invalid request: invalid shares: lots");
}

#[test]
fn test_estimate_swap_matches_execution() {
    let mut ctx = TestContext::with_default_genesis();
    ctx.listed_pool("ibc/BTC", "BTC", 3_000_000, 1_000_000);

    let direct = query_json(&ctx, "estimate_swap/pnyx/10000/atom");
    assert_eq!(direct["expected_output"], "9871");
    assert_eq!(direct["hops"], 1);
    assert_eq!(direct["route_symbols"], json!(["PNYX", "ATOM"]));

    let routed = query_json(&ctx, "estimate_swap/atom/10000/ibc%2FBTC");
    assert_eq!(routed["hops"], 2);
    let expected: Amount = routed["expected_output"].as_str().unwrap().parse().unwrap();

    let actual = ctx.swap_exact("atom", 10_000, "ibc/BTC", 0).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_registry_queries() {
    let mut ctx = TestContext::with_default_genesis();
    ctx.register("ibc/BTC", "BTC");

    let assets = query_json(&ctx, "registered_assets");
    let symbols: Vec<&str> = assets
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["symbol"].as_str().unwrap())
        .collect();
    assert_eq!(symbols, vec!["PNYX", "ATOM", "BTC"]);

    assert_eq!(query_json(&ctx, "asset/ibc%2FBTC")["symbol"], "BTC");
    assert_eq!(query_json(&ctx, "asset/pnyx")["origin_chain"], "truerepublic-1");
    assert_eq!(query_json(&ctx, "asset_by_symbol/BTC")["ibc_denom"], "ibc/BTC");

    let err = query_err(&ctx, "asset_by_symbol/DOGE");
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
}

#[test]
fn test_query_errors() {
    let ctx = TestContext::with_default_genesis();

    let err = query_err(&ctx, "pool/ibc%2FNOPE");
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    assert_eq!(err.to_string(), "key not found: pool for ibc/NOPE not found");

    let err = query_err(&ctx, "pool");
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(err.to_string().contains("usage: pool/{asset_denom}"));

    let err = query_err(&ctx, "estimate_swap/pnyx/100");
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);

    let err = query_err(&ctx, "orderbook/atom");
    assert_eq!(err.kind(), ErrorKind::UnknownRequest);
    assert_eq!(err.to_string(), "unknown request: unknown query path: orderbook");

    let err = query_err(&ctx, "");
    assert_eq!(err.kind(), ErrorKind::UnknownRequest);
}

#[test]
fn test_queries_do_not_write() {
    let ctx = TestContext::with_default_genesis();
    let before = ctx.store.clone();

    for path in [
        "pools",
        "pool_stats/atom",
        "spot_price/pnyx/atom",
        "liquidity_depth/atom/pnyx",
        "estimate_swap/atom/5000/pnyx",
        "registered_assets",
    ] {
        query_json(&ctx, path);
    }
    assert_eq!(ctx.store, before);
}
