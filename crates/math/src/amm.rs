//! Constant-product pricing kernel
//!
//! Pure functions over reserves. Callers own validation of denoms, pool
//! existence and the drain/slippage checks.

use crate::big_int::{add_wide, div_wide, isqrt_product, mul_div, mul_wide, narrow, widen};
use pnyx_types::{
    Amount, DexError, DexResult, BPS_DENOM, BURN_BPS, FEE_MULTIPLIER, PRICE_SCALE,
};

/// Result of pricing one swap against a pair of reserves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapQuote {
    /// Amount credited to the trader
    pub output: Amount,
    /// PNYX removed from the pool on top of `output`; zero unless buying PNYX
    pub burn: Amount,
}

impl SwapQuote {
    /// Total leaving the output-side reserve
    pub fn reserve_outflow(&self) -> Amount {
        self.output + self.burn
    }
}

/// Price a swap against `(in_reserve, out_reserve)`.
///
/// `raw = ⌊out · input · 9970 / (in · 10000 + input · 9970)⌋`. When the
/// output side is PNYX, 1% of `raw` is burned and the trader gets the rest.
pub fn compute_swap_output(
    in_reserve: Amount,
    out_reserve: Amount,
    input_amount: Amount,
    output_is_pnyx: bool,
) -> DexResult<SwapQuote> {
    let fee = widen(FEE_MULTIPLIER);
    let effective_input = mul_wide(widen(input_amount), fee, "swap input")?;

    let numerator = mul_wide(widen(out_reserve), effective_input, "swap numerator")?;
    let denominator = add_wide(
        mul_wide(widen(in_reserve), widen(BPS_DENOM), "swap denominator")?,
        effective_input,
        "swap denominator",
    )?;
    let raw_output = narrow(div_wide(numerator, denominator, "swap output")?, "swap output")?;

    if !output_is_pnyx {
        return Ok(SwapQuote {
            output: raw_output,
            burn: 0,
        });
    }

    let burn = mul_div(raw_output, BURN_BPS, BPS_DENOM)?;
    Ok(SwapQuote {
        output: raw_output - burn,
        burn,
    })
}

/// Output for `PRICE_SCALE` input units at the marginal rate.
///
/// Includes the swap fee, and the burn when the output is PNYX, but no curve
/// impact. An empty input reserve has no price.
pub fn spot_price_per_million(
    in_reserve: Amount,
    out_reserve: Amount,
    output_is_pnyx: bool,
) -> DexResult<Amount> {
    if in_reserve == 0 {
        return Err(DexError::invalid_request("pool has no liquidity"));
    }

    let numerator = mul_wide(
        mul_wide(widen(out_reserve), widen(PRICE_SCALE), "spot price")?,
        widen(FEE_MULTIPLIER),
        "spot price",
    )?;
    let denominator = mul_wide(widen(in_reserve), widen(BPS_DENOM), "spot price")?;
    let price = narrow(div_wide(numerator, denominator, "spot price")?, "spot price")?;

    if output_is_pnyx {
        mul_div(price, BPS_DENOM - BURN_BPS, BPS_DENOM)
    } else {
        Ok(price)
    }
}

/// Chain two per-million prices through the hub
pub fn chain_price_per_million(first: Amount, second: Amount) -> DexResult<Amount> {
    mul_div(first, second, PRICE_SCALE)
}

/// Shares minted when seeding a pool: ⌊√(pnyx · asset)⌋
pub fn initial_shares(pnyx_amount: Amount, asset_amount: Amount) -> Amount {
    isqrt_product(pnyx_amount, asset_amount)
}

/// Shares minted for a deposit: the smaller of the two proportional claims
pub fn shares_for_deposit(
    pnyx_amount: Amount,
    asset_amount: Amount,
    pnyx_reserve: Amount,
    asset_reserve: Amount,
    total_shares: Amount,
) -> DexResult<Amount> {
    let by_pnyx = mul_div(pnyx_amount, total_shares, pnyx_reserve)?;
    let by_asset = mul_div(asset_amount, total_shares, asset_reserve)?;
    Ok(by_pnyx.min(by_asset))
}

/// Reserve amounts owed to `shares`: `(⌊pnyx · s / total⌋, ⌊asset · s / total⌋)`
pub fn withdrawal_amounts(
    shares: Amount,
    pnyx_reserve: Amount,
    asset_reserve: Amount,
    total_shares: Amount,
) -> DexResult<(Amount, Amount)> {
    let pnyx_out = mul_div(pnyx_reserve, shares, total_shares)?;
    let asset_out = mul_div(asset_reserve, shares, total_shares)?;
    Ok((pnyx_out, asset_out))
}

/// Share of the pool in basis points: ⌊shares · 10000 / total⌋
pub fn share_of_pool_bps(shares: Amount, total_shares: Amount) -> DexResult<Amount> {
    mul_div(shares, BPS_DENOM, total_shares)
}

/// Shortfall of `actual` against `ideal`, in basis points of `ideal`
pub fn price_impact_bps(ideal: Amount, actual: Amount) -> DexResult<Amount> {
    if ideal == 0 || actual >= ideal {
        return Ok(0);
    }
    mul_div(ideal - actual, BPS_DENOM, ideal)
}
