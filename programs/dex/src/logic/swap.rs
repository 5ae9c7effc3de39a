//! Direct swaps between PNYX and one registered asset
//!
//! Pricing and every check run in `plan_swap` against a read-only store, so
//! the estimate path and the executing path share one code path and agree
//! exactly.

use crate::logic::asset_registry::validate_asset_for_trading;
use crate::logic::pool_store::{require_pool, set_pool};
use crate::logic::state_context::Context;
use crate::state::KVStore;
use pnyx_math::{compute_swap_output, safe_add, safe_inc_u64, safe_sub, SwapQuote};
use pnyx_types::{is_native, Amount, DexError, DexEvent, DexResult, Pool};
use tracing::debug;

/// A validated, priced direct swap that has not been applied yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedSwap {
    /// Pool state before the swap
    pub pool: Pool,
    pub input_is_pnyx: bool,
    pub input_amount: Amount,
    pub quote: SwapQuote,
}

impl PlannedSwap {
    /// Pool state after the swap
    pub fn apply(&self) -> DexResult<Pool> {
        let mut pool = self.pool.clone();
        let outflow = self.quote.reserve_outflow();

        if self.input_is_pnyx {
            pool.pnyx_reserve = safe_add(pool.pnyx_reserve, self.input_amount)?;
            pool.asset_reserve = safe_sub(pool.asset_reserve, outflow)?;
            pool.total_volume_pnyx = safe_add(pool.total_volume_pnyx, self.input_amount)?;
        } else {
            pool.asset_reserve = safe_add(pool.asset_reserve, self.input_amount)?;
            pool.pnyx_reserve = safe_sub(pool.pnyx_reserve, outflow)?;
            pool.total_volume_pnyx = safe_add(pool.total_volume_pnyx, outflow)?;
        }
        pool.total_burned = safe_add(pool.total_burned, self.quote.burn)?;
        pool.swap_count = safe_inc_u64(pool.swap_count)?;
        Ok(pool)
    }
}

/// The non-PNYX side of a direct pair; exactly one denom must be PNYX
pub fn resolve_asset_denom<'d>(input_denom: &'d str, output_denom: &'d str) -> DexResult<&'d str> {
    match (is_native(input_denom), is_native(output_denom)) {
        (true, false) => Ok(output_denom),
        (false, true) => Ok(input_denom),
        _ => Err(DexError::invalid_request(format!(
            "exactly one denom must be pnyx, got {} -> {}",
            input_denom, output_denom
        ))),
    }
}

/// Validate and price a direct swap without touching state
pub fn plan_swap(
    store: &dyn KVStore,
    input_denom: &str,
    input_amount: Amount,
    output_denom: &str,
    min_output: Amount,
) -> DexResult<PlannedSwap> {
    if input_amount == 0 {
        return Err(DexError::invalid_request("input amount must be positive"));
    }
    let asset_denom = resolve_asset_denom(input_denom, output_denom)?;
    validate_asset_for_trading(store, asset_denom)?;
    let pool = require_pool(store, asset_denom)?;

    let input_is_pnyx = is_native(input_denom);
    let (in_reserve, out_reserve) = pool.reserves(input_is_pnyx);
    let quote = compute_swap_output(in_reserve, out_reserve, input_amount, !input_is_pnyx)?;

    if quote.output == 0 {
        return Err(DexError::invalid_request(format!(
            "output would be zero for {} {} -> {}",
            input_amount, input_denom, output_denom
        )));
    }
    if quote.reserve_outflow() >= out_reserve {
        return Err(DexError::invalid_request(format!(
            "swap would drain the pool: outflow {} >= reserve {}",
            quote.reserve_outflow(),
            out_reserve
        )));
    }
    if min_output > 0 && quote.output < min_output {
        return Err(DexError::slippage(quote.output, min_output));
    }

    Ok(PlannedSwap {
        pool,
        input_is_pnyx,
        input_amount,
        quote,
    })
}

/// Execute a direct swap and return the amount credited to the trader
pub fn swap(
    ctx: &mut dyn Context,
    input_denom: &str,
    input_amount: Amount,
    output_denom: &str,
    min_output: Amount,
) -> DexResult<Amount> {
    let plan = plan_swap(ctx.store(), input_denom, input_amount, output_denom, min_output)?;
    let pool = plan.apply()?;
    set_pool(ctx.store_mut(), &pool)?;

    debug!(
        input = %input_denom,
        output = %output_denom,
        amount_in = %input_amount,
        amount_out = %plan.quote.output,
        burn = %plan.quote.burn,
        "swap executed"
    );
    ctx.emit(DexEvent::Swap {
        input_denom: input_denom.to_string(),
        input_amount,
        output_denom: output_denom.to_string(),
        output_amount: plan.quote.output,
    });
    Ok(plan.quote.output)
}
