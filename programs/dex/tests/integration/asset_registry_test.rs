//! Asset registry and trading gate

use crate::common::*;

#[test]
fn test_register_and_lookup() {
    let mut ctx = TestContext::new();
    let (_, events) = ctx
        .exec(|c| register_asset(c, asset("ibc/BTC", "BTC")))
        .unwrap();

    assert_eq!(
        events,
        vec![DexEvent::AssetRegistered {
            ibc_denom: "ibc/BTC".to_string(),
            symbol: "BTC".to_string(),
            origin_chain: "cosmoshub-4".to_string(),
        }]
    );

    let stored = get_asset_by_denom(&ctx.store, "ibc/BTC").unwrap().unwrap();
    assert_eq!(stored, asset("ibc/BTC", "BTC"));

    let by_symbol = get_asset_by_symbol(&ctx.store, "BTC").unwrap().unwrap();
    assert_eq!(by_symbol.ibc_denom, "ibc/BTC");
    assert!(get_asset_by_symbol(&ctx.store, "DOGE").unwrap().is_none());
    assert!(get_asset_by_denom(&ctx.store, "ibc/DOGE").unwrap().is_none());
}

#[test]
fn test_all_assets_in_denom_order() {
    let mut ctx = TestContext::new();
    ctx.register("ibc/ETH", "ETH");
    ctx.register("atom", "ATOM");
    ctx.register("ibc/BTC", "BTC");

    let denoms: Vec<String> = get_all_assets(&ctx.store)
        .unwrap()
        .into_iter()
        .map(|a| a.ibc_denom)
        .collect();
    assert_eq!(denoms, vec!["atom", "ibc/BTC", "ibc/ETH"]);
}

#[test]
fn test_duplicate_registration_rejected() {
    let mut ctx = TestContext::new();
    ctx.register("ibc/BTC", "BTC");

    let err = ctx
        .exec(|c| register_asset(c, asset("ibc/BTC", "WBTC")))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(err.to_string().contains("already registered"));

    // first registration untouched
    let stored = get_asset_by_denom(&ctx.store, "ibc/BTC").unwrap().unwrap();
    assert_eq!(stored.symbol, "BTC");
}

#[test]
fn test_native_denom_cannot_be_registered() {
    let mut ctx = TestContext::new();
    let err = ctx
        .exec(|c| register_asset(c, asset(NATIVE_DENOM, "PNYX")))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(ctx.store.is_empty());
}

#[test]
fn test_invalid_fields_rejected() {
    let mut ctx = TestContext::new();

    let mut no_symbol = asset("ibc/BTC", "BTC");
    no_symbol.symbol.clear();
    assert!(ctx.exec(|c| register_asset(c, no_symbol)).is_err());

    let mut too_precise = asset("ibc/BTC", "BTC");
    too_precise.decimals = MAX_DECIMALS + 1;
    assert!(ctx.exec(|c| register_asset(c, too_precise)).is_err());

    assert!(ctx.store.is_empty());
}

#[test]
fn test_trading_gate() {
    let mut ctx = TestContext::new();
    ctx.register("ibc/BTC", "BTC");

    validate_asset_for_trading(&ctx.store, NATIVE_DENOM).unwrap();
    validate_asset_for_trading(&ctx.store, "ibc/BTC").unwrap();

    let err = validate_asset_for_trading(&ctx.store, "ibc/DOGE").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AssetNotRegistered);
    assert!(err.to_string().contains("not registered"));

    let (_, events) = ctx
        .exec(|c| update_asset_trading_status(c, "ibc/BTC", false))
        .unwrap();
    assert_eq!(
        events,
        vec![DexEvent::AssetTradingStatusUpdated {
            ibc_denom: "ibc/BTC".to_string(),
            enabled: false,
        }]
    );

    let err = validate_asset_for_trading(&ctx.store, "ibc/BTC").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TradingDisabled);
}

#[test]
fn test_status_update_on_unknown_asset() {
    let mut ctx = TestContext::new();
    let err = ctx
        .exec(|c| update_asset_trading_status(c, "ibc/DOGE", true))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    assert!(err.to_string().contains("asset not found"));
}

#[test]
fn test_deregistration_leaves_pool_addressable() {
    let mut ctx = TestContext::new();
    ctx.listed_pool("ibc/BTC", "BTC", 1_000_000, 1_000_000);

    let (_, events) = ctx.exec(|c| deregister_asset(c, "ibc/BTC")).unwrap();
    assert_eq!(
        events,
        vec![DexEvent::AssetDeregistered {
            ibc_denom: "ibc/BTC".to_string(),
        }]
    );
    assert!(get_asset_by_denom(&ctx.store, "ibc/BTC").unwrap().is_none());

    // orphan pool stays readable but the gate blocks trading
    assert_eq!(ctx.pool("ibc/BTC").pnyx_reserve, 1_000_000);
    let err = ctx.swap("pnyx", 1_000, "ibc/BTC", 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AssetNotRegistered);

    let err = ctx.exec(|c| deregister_asset(c, "ibc/BTC")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
}

#[test]
fn test_symbol_resolution() {
    let mut ctx = TestContext::new();
    ctx.register("ibc/BTC", "BTC");

    assert_eq!(symbol_for_denom(&ctx.store, NATIVE_DENOM).unwrap(), "PNYX");
    assert_eq!(symbol_for_denom(&ctx.store, "ibc/BTC").unwrap(), "BTC");
    assert_eq!(symbol_for_denom(&ctx.store, "ibc/DOGE").unwrap(), "ibc/DOGE");
}
