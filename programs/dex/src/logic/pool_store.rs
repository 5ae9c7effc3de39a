//! Pool records keyed `pool:<asset_denom>`

use crate::state::{decode, encode, prefix_iterator, KVStore};
use pnyx_types::{pool_key, DexError, DexResult, Pool, POOL_KEY_PREFIX};

pub fn get_pool(store: &dyn KVStore, asset_denom: &str) -> DexResult<Option<Pool>> {
    store
        .get(&pool_key(asset_denom))
        .map(|bytes| decode(&bytes, "pool"))
        .transpose()
}

/// Load a pool that must exist for a state transition
pub fn require_pool(store: &dyn KVStore, asset_denom: &str) -> DexResult<Pool> {
    get_pool(store, asset_denom)?.ok_or_else(|| DexError::no_pool(asset_denom))
}

pub fn set_pool(store: &mut dyn KVStore, pool: &Pool) -> DexResult<()> {
    let bytes = encode(pool)?;
    store.set(&pool_key(&pool.asset_denom), bytes);
    Ok(())
}

/// Visit pools in denom order; the callback returns `true` to stop early
pub fn iterate_pools<F>(store: &dyn KVStore, mut callback: F) -> DexResult<()>
where
    F: FnMut(Pool) -> bool,
{
    for (_, bytes) in prefix_iterator(store, POOL_KEY_PREFIX) {
        let pool: Pool = decode(&bytes, "pool")?;
        if callback(pool) {
            break;
        }
    }
    Ok(())
}

/// Every pool in denom order
pub fn get_all_pools(store: &dyn KVStore) -> DexResult<Vec<Pool>> {
    let mut pools = Vec::new();
    iterate_pools(store, |pool| {
        pools.push(pool);
        false
    })?;
    Ok(pools)
}
