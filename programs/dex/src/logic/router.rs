//! Hub router
//!
//! Direct pairs go straight to the swap engine. Any other pair is routed
//! `input -> PNYX -> output` as two hops executed inside one work unit, so a
//! failure in hop 2 or in the end-to-end slippage check leaves no trace of
//! hop 1.

use crate::logic::asset_registry::validate_asset_for_trading;
use crate::logic::state_context::Context;
use crate::logic::swap::{plan_swap, swap};
use crate::logic::unit_of_work::WorkUnit;
use crate::state::KVStore;
use pnyx_types::{is_native, Amount, DexError, DexResult, NATIVE_DENOM, NATIVE_SYMBOL};
use serde::Serialize;
use tracing::debug;

/// Expected output of a swap and the denoms it passes through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapEstimate {
    #[serde(with = "pnyx_types::amount_serde")]
    pub expected_output: Amount,
    pub route: Vec<String>,
}

impl SwapEstimate {
    pub fn hops(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

fn reject_same_denom(input_denom: &str, output_denom: &str) -> DexResult<()> {
    if input_denom == output_denom {
        return Err(DexError::invalid_request(format!(
            "input and output denoms must differ, got {} for both",
            input_denom
        )));
    }
    Ok(())
}

fn is_direct(input_denom: &str, output_denom: &str) -> bool {
    is_native(input_denom) || is_native(output_denom)
}

fn hop_one_error(input_denom: &str) -> impl FnOnce(DexError) -> DexError + '_ {
    move |e| DexError::hop(1, input_denom, NATIVE_SYMBOL, e)
}

fn hop_two_error(output_denom: &str) -> impl FnOnce(DexError) -> DexError + '_ {
    move |e| DexError::hop(2, NATIVE_SYMBOL, output_denom, e)
}

/// Swap any tradable denom for any other, routing through PNYX when needed.
///
/// Intermediate hops run without a minimum; `min_output` is checked against
/// the final output only.
pub fn swap_exact(
    ctx: &mut dyn Context,
    input_denom: &str,
    input_amount: Amount,
    output_denom: &str,
    min_output: Amount,
) -> DexResult<Amount> {
    reject_same_denom(input_denom, output_denom)?;
    if is_direct(input_denom, output_denom) {
        return swap(ctx, input_denom, input_amount, output_denom, min_output);
    }

    validate_asset_for_trading(ctx.store(), input_denom)?;
    validate_asset_for_trading(ctx.store(), output_denom)?;

    let block_height = ctx.block_height();
    let (output, events) = {
        let mut unit = WorkUnit::new(ctx.store_mut(), block_height);
        let intermediate = swap(&mut unit, input_denom, input_amount, NATIVE_DENOM, 0)
            .map_err(hop_one_error(input_denom))?;
        let output = swap(&mut unit, NATIVE_DENOM, intermediate, output_denom, 0)
            .map_err(hop_two_error(output_denom))?;

        if min_output > 0 && output < min_output {
            return Err(DexError::slippage(output, min_output));
        }
        debug!(
            input = %input_denom,
            output = %output_denom,
            intermediate = %intermediate,
            amount_out = %output,
            "routed swap executed"
        );
        (output, unit.commit())
    };

    for event in events {
        ctx.emit(event);
    }
    Ok(output)
}

/// Read-only mirror of `swap_exact`.
///
/// Runs the same validation and pricing as the executing path, so the
/// estimate equals the output of the swap on the same starting state.
pub fn estimate_swap_output(
    store: &dyn KVStore,
    input_denom: &str,
    input_amount: Amount,
    output_denom: &str,
) -> DexResult<SwapEstimate> {
    reject_same_denom(input_denom, output_denom)?;
    if is_direct(input_denom, output_denom) {
        let plan = plan_swap(store, input_denom, input_amount, output_denom, 0)?;
        return Ok(SwapEstimate {
            expected_output: plan.quote.output,
            route: vec![input_denom.to_string(), output_denom.to_string()],
        });
    }

    validate_asset_for_trading(store, input_denom)?;
    validate_asset_for_trading(store, output_denom)?;

    // The two hops touch different pools, so hop 2 prices against the
    // untouched output pool.
    let first = plan_swap(store, input_denom, input_amount, NATIVE_DENOM, 0)
        .map_err(hop_one_error(input_denom))?;
    let second = plan_swap(store, NATIVE_DENOM, first.quote.output, output_denom, 0)
        .map_err(hop_two_error(output_denom))?;

    Ok(SwapEstimate {
        expected_output: second.quote.output,
        route: vec![
            input_denom.to_string(),
            NATIVE_DENOM.to_string(),
            output_denom.to_string(),
        ],
    })
}
