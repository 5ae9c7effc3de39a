//! Pool creation and share accounting

use crate::logic::asset_registry::validate_asset_for_trading;
use crate::logic::pool_store::{get_pool, require_pool, set_pool};
use crate::logic::state_context::Context;
use pnyx_math::{initial_shares, safe_add, safe_sub, shares_for_deposit, withdrawal_amounts};
use pnyx_types::{is_native, Amount, DexError, DexEvent, DexResult, Pool};
use tracing::{debug, info};

/// Create a pool seeded with `isqrt(pnyx · asset)` shares
pub fn create_pool(
    ctx: &mut dyn Context,
    asset_denom: &str,
    pnyx_amount: Amount,
    asset_amount: Amount,
) -> DexResult<Pool> {
    if pnyx_amount == 0 || asset_amount == 0 {
        return Err(DexError::invalid_request("both reserve amounts must be positive"));
    }
    if is_native(asset_denom) {
        return Err(DexError::invalid_request("cannot pair pnyx with itself"));
    }
    validate_asset_for_trading(ctx.store(), asset_denom)?;
    if get_pool(ctx.store(), asset_denom)?.is_some() {
        return Err(DexError::invalid_request(format!(
            "pool for {} already exists",
            asset_denom
        )));
    }

    let pool = Pool::new(
        asset_denom,
        pnyx_amount,
        asset_amount,
        initial_shares(pnyx_amount, asset_amount),
    );
    set_pool(ctx.store_mut(), &pool)?;

    info!(
        asset = %asset_denom,
        pnyx = %pnyx_amount,
        amount = %asset_amount,
        shares = %pool.total_shares,
        "pool created"
    );
    ctx.emit(DexEvent::CreatePool {
        asset_denom: asset_denom.to_string(),
        pnyx_amount,
        asset_amount,
    });
    Ok(pool)
}

/// Deposit both sides and mint shares for the smaller proportional claim.
///
/// The full deposit joins the reserves; the excess on the overweighted side
/// stays in the pool. A pool emptied by withdrawals is re-seeded as if new.
pub fn add_liquidity(
    ctx: &mut dyn Context,
    asset_denom: &str,
    pnyx_amount: Amount,
    asset_amount: Amount,
) -> DexResult<Amount> {
    if pnyx_amount == 0 || asset_amount == 0 {
        return Err(DexError::invalid_request("both amounts must be positive"));
    }
    let mut pool = require_pool(ctx.store(), asset_denom)?;

    let shares = if pool.is_drained() {
        initial_shares(pnyx_amount, asset_amount)
    } else {
        shares_for_deposit(
            pnyx_amount,
            asset_amount,
            pool.pnyx_reserve,
            pool.asset_reserve,
            pool.total_shares,
        )?
    };
    if shares == 0 {
        return Err(DexError::invalid_request(format!(
            "deposit too small to mint shares: {} pnyx, {} {}",
            pnyx_amount, asset_amount, asset_denom
        )));
    }

    pool.pnyx_reserve = safe_add(pool.pnyx_reserve, pnyx_amount)?;
    pool.asset_reserve = safe_add(pool.asset_reserve, asset_amount)?;
    pool.total_shares = safe_add(pool.total_shares, shares)?;
    set_pool(ctx.store_mut(), &pool)?;

    debug!(asset = %asset_denom, shares = %shares, "liquidity added");
    ctx.emit(DexEvent::AddLiquidity {
        asset_denom: asset_denom.to_string(),
        shares_minted: shares,
    });
    Ok(shares)
}

/// Burn shares for their pro-rata slice of both reserves.
///
/// Withdrawing every share leaves the record in place with zero reserves.
pub fn remove_liquidity(
    ctx: &mut dyn Context,
    asset_denom: &str,
    shares: Amount,
) -> DexResult<(Amount, Amount)> {
    if shares == 0 {
        return Err(DexError::invalid_request("shares must be positive"));
    }
    let mut pool = require_pool(ctx.store(), asset_denom)?;
    if shares > pool.total_shares {
        return Err(DexError::invalid_request(format!(
            "shares exceed total supply: {} > {}",
            shares, pool.total_shares
        )));
    }

    let (pnyx_out, asset_out) =
        withdrawal_amounts(shares, pool.pnyx_reserve, pool.asset_reserve, pool.total_shares)?;
    pool.pnyx_reserve = safe_sub(pool.pnyx_reserve, pnyx_out)?;
    pool.asset_reserve = safe_sub(pool.asset_reserve, asset_out)?;
    pool.total_shares = safe_sub(pool.total_shares, shares)?;
    set_pool(ctx.store_mut(), &pool)?;

    debug!(
        asset = %asset_denom,
        shares = %shares,
        pnyx = %pnyx_out,
        amount = %asset_out,
        "liquidity removed"
    );
    ctx.emit(DexEvent::RemoveLiquidity {
        asset_denom: asset_denom.to_string(),
        pnyx_returned: pnyx_out,
        asset_returned: asset_out,
    });
    Ok((pnyx_out, asset_out))
}
