//! Pool creation and share accounting

use crate::common::*;

#[test]
fn test_create_pool_emits_event() -> TestResult {
    let mut ctx = TestContext::new();
    ctx.register("ibc/BTC", "BTC");

    let (pool, events) = ctx.exec(|c| create_pool(c, "ibc/BTC", 1_000_000, 500_000))?;

    assert_eq!(pool.total_shares, 707_106);
    assert_eq!(pool, ctx.pool("ibc/BTC"));
    assert_eq!(
        events,
        vec![DexEvent::CreatePool {
            asset_denom: "ibc/BTC".to_string(),
            pnyx_amount: 1_000_000,
            asset_amount: 500_000,
        }]
    );
    Ok(())
}

#[test]
fn test_create_pool_gates() {
    let mut ctx = TestContext::new();

    let err = ctx
        .exec(|c| create_pool(c, "ibc/BTC", 1_000, 1_000))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AssetNotRegistered);

    ctx.register("ibc/BTC", "BTC");
    ctx.exec(|c| update_asset_trading_status(c, "ibc/BTC", false))
        .unwrap();
    let err = ctx
        .exec(|c| create_pool(c, "ibc/BTC", 1_000, 1_000))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TradingDisabled);

    ctx.exec(|c| update_asset_trading_status(c, "ibc/BTC", true))
        .unwrap();
    for (pnyx, amount) in [(0, 1_000), (1_000, 0)] {
        let err = ctx
            .exec(|c| create_pool(c, "ibc/BTC", pnyx, amount))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    ctx.create_pool("ibc/BTC", 1_000, 1_000);
    let err = ctx
        .exec(|c| create_pool(c, "ibc/BTC", 1_000, 1_000))
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));

    let err = ctx
        .exec(|c| create_pool(c, NATIVE_DENOM, 1_000, 1_000))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
}

#[test]
fn test_add_liquidity_mints_smaller_claim() -> TestResult {
    let mut ctx = TestContext::new();
    ctx.listed_pool("atom", "ATOM", 1_000_000, 1_000_000);

    let (shares, events) = ctx.exec(|c| add_liquidity(c, "atom", 100_000, 50_000))?;
    assert_eq!(shares, 50_000);
    assert_eq!(
        events,
        vec![DexEvent::AddLiquidity {
            asset_denom: "atom".to_string(),
            shares_minted: 50_000,
        }]
    );

    // the excess PNYX stays in the pool
    let pool = ctx.pool("atom");
    assert_eq!(pool.pnyx_reserve, 1_100_000);
    assert_eq!(pool.asset_reserve, 1_050_000);
    assert_eq!(pool.total_shares, 1_050_000);
    Ok(())
}

#[test]
fn test_add_liquidity_rejections() {
    let mut ctx = TestContext::new();
    ctx.listed_pool("atom", "ATOM", 1_000_000, 1_000_000);

    let err = ctx
        .exec(|c| add_liquidity(c, "ibc/NOPE", 1_000, 1_000))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownRequest);
    assert!(err.to_string().contains("no pool for ibc/NOPE"));

    let err = ctx.exec(|c| add_liquidity(c, "atom", 0, 1_000)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);

    // a deposit too small for one share mints nothing and is refused
    ctx.listed_pool("ibc/BTC", "BTC", 1_000_000_000, 1_000);
    let err = ctx
        .exec(|c| add_liquidity(c, "ibc/BTC", 1, 1))
        .unwrap_err();
    assert!(err.to_string().contains("too small"));
}

#[test]
fn test_remove_liquidity_pro_rata() -> TestResult {
    let mut ctx = TestContext::new();
    ctx.listed_pool("atom", "ATOM", 1_000_000, 500_000);

    let total = ctx.pool("atom").total_shares;
    let (returned, events) = ctx.exec(|c| remove_liquidity(c, "atom", total / 4))?;

    assert_eq!(returned, (250_000 - 1, 125_000 - 1));
    assert_eq!(
        events,
        vec![DexEvent::RemoveLiquidity {
            asset_denom: "atom".to_string(),
            pnyx_returned: returned.0,
            asset_returned: returned.1,
        }]
    );
    let pool = ctx.pool("atom");
    assert_eq!(pool.total_shares, total - total / 4);
    assert_eq!(pool.pnyx_reserve, 1_000_000 - returned.0);
    Ok(())
}

#[test]
fn test_remove_more_than_supply_fails() {
    let mut ctx = TestContext::new();
    ctx.listed_pool("atom", "ATOM", 1_000_000, 1_000_000);

    let err = ctx
        .exec(|c| remove_liquidity(c, "atom", 1_000_001))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(err.to_string().contains("exceed"));

    let err = ctx.exec(|c| remove_liquidity(c, "atom", 0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);

    let err = ctx.exec(|c| remove_liquidity(c, "ibc/NOPE", 1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownRequest);
}

#[test]
fn test_full_withdrawal_leaves_empty_record_that_can_be_reseeded() -> TestResult {
    let mut ctx = TestContext::new();
    ctx.listed_pool("atom", "ATOM", 1_000_000, 1_000_000);
    ctx.swap("pnyx", 10_000, "atom", 0)?;

    ctx.exec(|c| remove_liquidity(c, "atom", 1_000_000))?;
    let drained = ctx.pool("atom");
    assert!(drained.is_drained());
    assert_eq!(drained.swap_count, 1);

    let err = ctx.swap("pnyx", 10_000, "atom", 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);

    let (shares, _) = ctx.exec(|c| add_liquidity(c, "atom", 400, 100))?;
    assert_eq!(shares, 200);
    let pool = ctx.pool("atom");
    assert_eq!((pool.pnyx_reserve, pool.asset_reserve, pool.total_shares), (400, 100, 200));
    Ok(())
}
