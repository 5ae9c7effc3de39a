//! Asset registry
//!
//! Whitelist of assets tradable against PNYX, keyed `asset:<ibc_denom>`.
//! The native denom is recognised everywhere but never stored.

use crate::logic::state_context::Context;
use crate::state::{decode, encode, prefix_iterator, KVStore};
use pnyx_types::{
    asset_key, is_native, DexError, DexEvent, DexResult, RegisteredAsset, ASSET_KEY_PREFIX,
    NATIVE_SYMBOL,
};
use tracing::{debug, info};

/// Register a new asset.
///
/// Fails on invalid fields, on the native denom and on an existing entry.
pub fn register_asset(ctx: &mut dyn Context, asset: RegisteredAsset) -> DexResult<()> {
    asset.validate_basic()?;
    if is_native(&asset.ibc_denom) {
        return Err(DexError::invalid_request(format!(
            "{} is the native denom and cannot be registered",
            asset.ibc_denom
        )));
    }
    if get_asset_by_denom(ctx.store(), &asset.ibc_denom)?.is_some() {
        return Err(DexError::invalid_request(format!(
            "asset already registered: {}",
            asset.ibc_denom
        )));
    }

    set_asset(ctx.store_mut(), &asset)?;

    info!(asset = %asset.ibc_denom, symbol = %asset.symbol, "asset registered");
    ctx.emit(DexEvent::AssetRegistered {
        ibc_denom: asset.ibc_denom,
        symbol: asset.symbol,
        origin_chain: asset.origin_chain,
    });
    Ok(())
}

/// Point lookup by denom
pub fn get_asset_by_denom(store: &dyn KVStore, ibc_denom: &str) -> DexResult<Option<RegisteredAsset>> {
    store
        .get(&asset_key(ibc_denom))
        .map(|bytes| decode(&bytes, "asset"))
        .transpose()
}

/// First asset in denom order whose symbol matches.
///
/// Full registry scan; meant for tooling, not hot paths.
pub fn get_asset_by_symbol(store: &dyn KVStore, symbol: &str) -> DexResult<Option<RegisteredAsset>> {
    for (_, bytes) in prefix_iterator(store, ASSET_KEY_PREFIX) {
        let asset: RegisteredAsset = decode(&bytes, "asset")?;
        if asset.symbol == symbol {
            return Ok(Some(asset));
        }
    }
    Ok(None)
}

/// Every stored asset in lexicographic denom order
pub fn get_all_assets(store: &dyn KVStore) -> DexResult<Vec<RegisteredAsset>> {
    prefix_iterator(store, ASSET_KEY_PREFIX)
        .map(|(_, bytes)| decode(&bytes, "asset"))
        .collect()
}

/// Enable or disable trading for a registered asset
pub fn update_asset_trading_status(ctx: &mut dyn Context, ibc_denom: &str, enabled: bool) -> DexResult<()> {
    let mut asset = get_asset_by_denom(ctx.store(), ibc_denom)?
        .ok_or_else(|| DexError::key_not_found(format!("asset not found: {}", ibc_denom)))?;

    asset.trading_enabled = enabled;
    set_asset(ctx.store_mut(), &asset)?;

    info!(asset = %ibc_denom, enabled, "asset trading status updated");
    ctx.emit(DexEvent::AssetTradingStatusUpdated {
        ibc_denom: ibc_denom.to_string(),
        enabled,
    });
    Ok(())
}

/// Remove an asset from the registry.
///
/// Pools referencing the asset stay addressable; the trading gate stops
/// activity on them.
pub fn deregister_asset(ctx: &mut dyn Context, ibc_denom: &str) -> DexResult<()> {
    if get_asset_by_denom(ctx.store(), ibc_denom)?.is_none() {
        return Err(DexError::key_not_found(format!("asset not found: {}", ibc_denom)));
    }

    ctx.store_mut().delete(&asset_key(ibc_denom));

    info!(asset = %ibc_denom, "asset deregistered");
    ctx.emit(DexEvent::AssetDeregistered {
        ibc_denom: ibc_denom.to_string(),
    });
    Ok(())
}

/// Trading gate: PNYX always passes; anything else must be registered and enabled
pub fn validate_asset_for_trading(store: &dyn KVStore, denom: &str) -> DexResult<()> {
    if is_native(denom) {
        return Ok(());
    }
    match get_asset_by_denom(store, denom)? {
        None => Err(DexError::asset_not_registered(denom)),
        Some(asset) if !asset.trading_enabled => Err(DexError::trading_disabled(denom)),
        Some(_) => {
            debug!(asset = %denom, "asset cleared for trading");
            Ok(())
        }
    }
}

/// Display symbol for a denom, falling back to the raw denom
pub fn symbol_for_denom(store: &dyn KVStore, denom: &str) -> DexResult<String> {
    if is_native(denom) {
        return Ok(NATIVE_SYMBOL.to_string());
    }
    Ok(get_asset_by_denom(store, denom)?
        .map(|asset| asset.symbol)
        .unwrap_or_else(|| denom.to_string()))
}

pub(crate) fn set_asset(store: &mut dyn KVStore, asset: &RegisteredAsset) -> DexResult<()> {
    let bytes = encode(asset)?;
    store.set(&asset_key(&asset.ibc_denom), bytes);
    Ok(())
}
