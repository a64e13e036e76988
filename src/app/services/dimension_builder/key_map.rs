//! Natural-key to surrogate-identity lookup tables
//!
//! A [`KeyMap`] is built fresh for each dimension on every rebuild, used to
//! resolve fact relationships, and discarded when the run completes.
//! Surrogate identities are assigned densely from 1 in first-seen order and
//! carry no meaning beyond identity; they are never stable across rebuilds
//! and must never be persisted outside the pipeline.

use std::collections::HashMap;
use std::hash::Hash;

/// A per-rebuild mapping from natural key to surrogate identity
#[derive(Debug, Clone, Default)]
pub struct KeyMap<K> {
    map: HashMap<K, u32>,
}

impl<K: Eq + Hash> KeyMap<K> {
    /// Create an empty key map
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Assign a surrogate identity to a natural key, returning the existing
    /// identity when the key was already seen this rebuild
    pub fn assign(&mut self, key: K) -> u32 {
        let next = (self.map.len() + 1) as u32;
        *self.map.entry(key).or_insert(next)
    }

    /// Resolve a natural key to its surrogate identity
    pub fn get(&self, key: &K) -> Option<u32> {
        self.map.get(key).copied()
    }

    /// Check whether a natural key has been assigned
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Number of assigned keys
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether no keys have been assigned
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
