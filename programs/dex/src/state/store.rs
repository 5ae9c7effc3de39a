//! Key-value store abstraction
//!
//! The exchange keeps all of its state in a byte-keyed store supplied by the
//! host. Iteration is always in ascending lexicographic key order so every
//! node walks records identically.

use std::collections::BTreeMap;
use std::ops::Bound;

/// Key/value pair yielded by store iteration
pub type KvPair = (Vec<u8>, Vec<u8>);

/// Boxed iterator over a key range
pub type KvIter<'a> = Box<dyn Iterator<Item = KvPair> + 'a>;

/// Transactional key-value store handed to the exchange by the host
pub trait KVStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    fn set(&mut self, key: &[u8], value: Vec<u8>);

    fn delete(&mut self, key: &[u8]);

    /// Ascending iteration over `[start, end)`; an empty `end` is unbounded
    fn iterator<'a>(&'a self, start: &[u8], end: &[u8]) -> KvIter<'a>;

    fn has(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }
}

/// First key after every key starting with `prefix`.
///
/// Increments the last byte that is not `0xFF`, dropping the trailing `0xFF`
/// bytes. Returns an empty vector (an open-ended scan) when every byte is
/// `0xFF`.
pub fn prefix_end(prefix: &[u8]) -> Vec<u8> {
    let mut end = prefix.to_vec();
    while let Some(last) = end.pop() {
        if last < 0xFF {
            end.push(last + 1);
            return end;
        }
    }
    Vec::new()
}

/// Iterate every key starting with `prefix`
pub fn prefix_iterator<'a>(store: &'a dyn KVStore, prefix: &[u8]) -> KvIter<'a> {
    let end = prefix_end(prefix);
    store.iterator(prefix, &end)
}

/// Range bounds for `[start, end)`, or `None` when the range is empty
pub(crate) fn key_range<'k>(start: &'k [u8], end: &'k [u8]) -> Option<(Bound<&'k [u8]>, Bound<&'k [u8]>)> {
    if end.is_empty() {
        return Some((Bound::Included(start), Bound::Unbounded));
    }
    if start >= end {
        return None;
    }
    Some((Bound::Included(start), Bound::Excluded(end)))
}

// ============================================================================
// In-memory store
// ============================================================================

/// Ordered in-memory store used by tests, genesis tooling and the simulator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Every entry in key order
    pub fn entries(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.data.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}

impl KVStore for MemStore {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.data.get(key).cloned()
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) {
        self.data.insert(key.to_vec(), value);
    }

    fn delete(&mut self, key: &[u8]) {
        self.data.remove(key);
    }

    fn iterator<'a>(&'a self, start: &[u8], end: &[u8]) -> KvIter<'a> {
        match key_range(start, end) {
            Some(bounds) => Box::new(
                self.data
                    .range::<[u8], _>(bounds)
                    .map(|(k, v)| (k.clone(), v.clone())),
            ),
            None => Box::new(std::iter::empty()),
        }
    }
}
