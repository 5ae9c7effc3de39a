//! Property tests for pool invariants under random trade sequences

use crate::common::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    BuyAsset(Amount),
    BuyPnyx(Amount),
    Add(Amount, Amount),
    Remove(u16),
}

prop_compose! {
    fn reserves_strategy()(
        pnyx in 1_000u128..1_000_000_000_000u128,
        asset in 1_000u128..1_000_000_000_000u128,
    ) -> (Amount, Amount) {
        (pnyx, asset)
    }
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (1u128..10_000_000_000u128).prop_map(Action::BuyAsset),
        (1u128..10_000_000_000u128).prop_map(Action::BuyPnyx),
        (1u128..1_000_000_000u128, 1u128..1_000_000_000u128)
            .prop_map(|(p, a)| Action::Add(p, a)),
        (1u16..5_000u16).prop_map(Action::Remove),
    ]
}

fn market(pnyx: Amount, asset: Amount) -> TestContext {
    let mut ctx = TestContext::new();
    ctx.listed_pool("atom", "ATOM", pnyx, asset);
    ctx
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swaps_never_shrink_k(
        (pnyx, asset) in reserves_strategy(),
        trades in prop::collection::vec((any::<bool>(), 1u128..10_000_000_000u128), 1..20),
    ) {
        let mut ctx = market(pnyx, asset);
        let mut k = ctx.k("atom");
        let mut burned = 0;

        for (buy_asset, amount) in trades {
            let before = ctx.pool("atom");
            let (input, output) = if buy_asset { ("pnyx", "atom") } else { ("atom", "pnyx") };
            let out_reserve = if buy_asset { before.asset_reserve } else { before.pnyx_reserve };

            if let Ok(received) = ctx.swap(input, amount, output, 0) {
                let after = ctx.pool("atom");
                let burn = after.total_burned - before.total_burned;
                prop_assert!(received > 0);
                prop_assert!(received + burn < out_reserve);
                if buy_asset {
                    prop_assert_eq!(burn, 0);
                }
            }

            let next_k = ctx.k("atom");
            prop_assert!(next_k >= k);
            k = next_k;

            let total_burned = ctx.pool("atom").total_burned;
            prop_assert!(total_burned >= burned);
            burned = total_burned;
        }
    }

    #[test]
    fn prop_estimate_equals_execution(
        (pnyx, asset) in reserves_strategy(),
        buy_asset in any::<bool>(),
        amount in 1u128..10_000_000_000u128,
    ) {
        let mut ctx = market(pnyx, asset);
        let (input, output) = if buy_asset { ("pnyx", "atom") } else { ("atom", "pnyx") };

        let estimate = estimate_swap_output(&ctx.store, input, amount, output);
        let executed = ctx.swap(input, amount, output, 0);
        match (estimate, executed) {
            (Ok(estimate), Ok(executed)) => prop_assert_eq!(estimate.expected_output, executed),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "estimate {:?} disagrees with swap {:?}", a, b),
        }
    }

    #[test]
    fn prop_routed_estimate_equals_execution(
        (btc_pnyx, btc) in reserves_strategy(),
        (eth_pnyx, eth) in reserves_strategy(),
        amount in 1u128..1_000_000_000u128,
    ) {
        let mut ctx = TestContext::new();
        ctx.listed_pool("ibc/BTC", "BTC", btc_pnyx, btc);
        ctx.listed_pool("ibc/ETH", "ETH", eth_pnyx, eth);

        let estimate = estimate_swap_output(&ctx.store, "ibc/BTC", amount, "ibc/ETH");
        let executed = ctx.swap_exact("ibc/BTC", amount, "ibc/ETH", 0);
        match (estimate, executed) {
            (Ok(estimate), Ok(executed)) => prop_assert_eq!(estimate.expected_output, executed),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "estimate {:?} disagrees with swap {:?}", a, b),
        }
    }

    #[test]
    fn prop_liquidity_round_trip_never_gains(
        (pnyx, asset) in reserves_strategy(),
        deposit_pnyx in 1u128..1_000_000_000u128,
        deposit_asset in 1u128..1_000_000_000u128,
    ) {
        let mut ctx = market(pnyx, asset);

        let shares = match ctx.exec(|c| add_liquidity(c, "atom", deposit_pnyx, deposit_asset)) {
            Ok((shares, _)) => shares,
            Err(err) => {
                prop_assert!(err.to_string().contains("too small"));
                return Ok(());
            }
        };
        let ((pnyx_out, asset_out), _) = ctx
            .exec(|c| remove_liquidity(c, "atom", shares))
            .unwrap();

        prop_assert!(pnyx_out <= deposit_pnyx);
        prop_assert!(asset_out <= deposit_asset);
    }

    #[test]
    fn prop_mixed_sequences_keep_pool_valid(
        (pnyx, asset) in reserves_strategy(),
        actions in prop::collection::vec(action_strategy(), 1..25),
    ) {
        let mut ctx = market(pnyx, asset);

        for action in actions {
            let _ = match action {
                Action::BuyAsset(amount) => ctx.swap("pnyx", amount, "atom", 0).map(drop),
                Action::BuyPnyx(amount) => ctx.swap("atom", amount, "pnyx", 0).map(drop),
                Action::Add(p, a) => ctx.exec(|c| add_liquidity(c, "atom", p, a)).map(drop),
                Action::Remove(bps) => {
                    let total = ctx.pool("atom").total_shares;
                    let shares = total * Amount::from(bps) / 10_000;
                    ctx.exec(|c| remove_liquidity(c, "atom", shares)).map(drop)
                }
            };

            let pool = ctx.pool("atom");
            prop_assert!(pool.validate().is_ok(), "{:?}", pool);
        }
    }
}
