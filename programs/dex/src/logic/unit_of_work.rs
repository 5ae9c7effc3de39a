/// Unit of Work Pattern for State Management
///
/// Buffers every write and event made during a message (or a routed swap)
/// on top of a parent store. `commit` flushes the writes to the parent in key
/// order and hands back the events; dropping the unit discards both.
use crate::logic::state_context::Context;
use crate::state::{key_range, KVStore, KvIter};
use pnyx_types::DexEvent;
use std::collections::BTreeMap;

/// Write-buffering overlay over a parent store
pub struct WorkUnit<'a> {
    /// Store the pending writes are flushed to
    parent: &'a mut dyn KVStore,

    /// `Some` is a pending set, `None` a pending delete
    pending: BTreeMap<Vec<u8>, Option<Vec<u8>>>,

    /// Events in emission order
    events: Vec<DexEvent>,

    block_height: u64,
}

impl<'a> WorkUnit<'a> {
    /// Create a new unit of work
    pub fn new(parent: &'a mut dyn KVStore, block_height: u64) -> Self {
        Self {
            parent,
            pending: BTreeMap::new(),
            events: Vec::new(),
            block_height,
        }
    }

    /// Number of keys with a pending write
    pub fn pending_writes(&self) -> usize {
        self.pending.len()
    }

    pub fn events(&self) -> &[DexEvent] {
        &self.events
    }

    /// Flush pending writes to the parent and return the buffered events
    pub fn commit(self) -> Vec<DexEvent> {
        let WorkUnit {
            parent,
            pending,
            events,
            ..
        } = self;

        for (key, value) in pending {
            match value {
                Some(value) => parent.set(&key, value),
                None => parent.delete(&key),
            }
        }
        events
    }
}

impl KVStore for WorkUnit<'_> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.pending.get(key) {
            Some(pending) => pending.clone(),
            None => self.parent.get(key),
        }
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) {
        self.pending.insert(key.to_vec(), Some(value));
    }

    fn delete(&mut self, key: &[u8]) {
        self.pending.insert(key.to_vec(), None);
    }

    fn iterator<'s>(&'s self, start: &[u8], end: &[u8]) -> KvIter<'s> {
        let bounds = match key_range(start, end) {
            Some(bounds) => bounds,
            None => return Box::new(std::iter::empty()),
        };

        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> = self.parent.iterator(start, end).collect();
        for (key, value) in self.pending.range::<[u8], _>(bounds) {
            match value {
                Some(value) => {
                    merged.insert(key.clone(), value.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }
        Box::new(merged.into_iter())
    }
}

impl Context for WorkUnit<'_> {
    fn store(&self) -> &dyn KVStore {
        self
    }

    fn store_mut(&mut self) -> &mut dyn KVStore {
        self
    }

    fn emit(&mut self, event: DexEvent) {
        self.events.push(event);
    }

    fn block_height(&self) -> u64 {
        self.block_height
    }
}
