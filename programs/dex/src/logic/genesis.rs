//! Genesis import and export

use crate::logic::asset_registry::{get_all_assets, set_asset};
use crate::logic::pool_store::{get_all_pools, set_pool};
use crate::state::KVStore;
use pnyx_types::{DexResult, GenesisState, RegisteredAsset};
use tracing::info;

/// Load a validated genesis into an empty store.
///
/// Pools are written verbatim. The native descriptor, if listed, is skipped
/// because PNYX is never stored in the registry.
pub fn init_genesis(store: &mut dyn KVStore, genesis: &GenesisState) -> DexResult<()> {
    genesis.validate()?;

    let mut assets = 0usize;
    for asset in genesis.stored_assets() {
        set_asset(store, asset)?;
        assets += 1;
    }
    for pool in &genesis.pools {
        set_pool(store, pool)?;
    }

    info!(assets, pools = genesis.pools.len(), "genesis imported");
    Ok(())
}

/// Dump the registry (native descriptor first) and every pool
pub fn export_genesis(store: &dyn KVStore) -> DexResult<GenesisState> {
    let mut registered_assets = vec![RegisteredAsset::native()];
    registered_assets.extend(get_all_assets(store)?);
    let pools = get_all_pools(store)?;

    info!(
        assets = registered_assets.len(),
        pools = pools.len(),
        "genesis exported"
    );
    Ok(GenesisState {
        registered_assets,
        pools,
    })
}
