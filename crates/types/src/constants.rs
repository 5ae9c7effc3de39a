/// Protocol constants for the PNYX hub exchange

/// Big non-negative integer used for reserves, shares and amounts.
///
/// Intermediate products are widened to 256 bits by `pnyx-math`.
pub type Amount = u128;

// ============================================================================
// Denominations
// ============================================================================

/// Native hub token denom. Always recognised, never stored in the registry.
pub const NATIVE_DENOM: &str = "pnyx";

/// Display symbol of the native token
pub const NATIVE_SYMBOL: &str = "PNYX";

/// Display name of the native token
pub const NATIVE_NAME: &str = "TrueRepublic Native Token";

/// Chain the native token originates from
pub const NATIVE_ORIGIN_CHAIN: &str = "truerepublic-1";

/// Display decimals of the native token
pub const NATIVE_DECIMALS: u32 = 6;

/// Upper bound for `RegisteredAsset::decimals`
pub const MAX_DECIMALS: u32 = 18;

// ============================================================================
// Fee Constants
// ============================================================================

/// Basis points denominator (10,000 = 100%)
pub const BPS_DENOM: u128 = 10_000;

/// Swap fee retained by the pool (0.30%)
pub const SWAP_FEE_BPS: u128 = 30;

/// Share of the raw output burned when the output side is PNYX (1%)
pub const BURN_BPS: u128 = 100;

/// Input multiplier after fee: `BPS_DENOM - SWAP_FEE_BPS`
pub const FEE_MULTIPLIER: u128 = BPS_DENOM - SWAP_FEE_BPS;

// ============================================================================
// Query Constants
// ============================================================================

/// Spot prices are quoted as output per this many input units
pub const PRICE_SCALE: u128 = 1_000_000;

/// Trade sizes probed by the liquidity depth query, in bps of the input reserve
pub const DEPTH_LEVELS_BPS: [u128; 5] = [10, 50, 100, 500, 1_000];

// ============================================================================
// Store Layout
// ============================================================================

/// Module name used for routing and event sourcing
pub const MODULE_NAME: &str = "dex";

/// Key prefix for `RegisteredAsset` records
pub const ASSET_KEY_PREFIX: &[u8] = b"asset:";

/// Key prefix for `Pool` records
pub const POOL_KEY_PREFIX: &[u8] = b"pool:";

/// Store key of a registered asset
pub fn asset_key(ibc_denom: &str) -> Vec<u8> {
    [ASSET_KEY_PREFIX, ibc_denom.as_bytes()].concat()
}

/// Store key of a pool
pub fn pool_key(asset_denom: &str) -> Vec<u8> {
    [POOL_KEY_PREFIX, asset_denom.as_bytes()].concat()
}

/// Whether `denom` names the native hub token
pub fn is_native(denom: &str) -> bool {
    denom == NATIVE_DENOM
}
