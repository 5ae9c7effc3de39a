//! # Execution Context
//!
//! Every state transition receives a `Context`: the store handle it reads
//! and writes, the event sink, and the height of the block being executed.

use crate::state::KVStore;
use pnyx_types::DexEvent;

/// Host-provided execution context
pub trait Context {
    /// Read access to the current store view
    fn store(&self) -> &dyn KVStore;

    /// Write access to the current store view
    fn store_mut(&mut self) -> &mut dyn KVStore;

    /// Append an event; exposed by the host only after commit
    fn emit(&mut self, event: DexEvent);

    fn block_height(&self) -> u64;
}
