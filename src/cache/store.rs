//! Cache Store Module
//!
//! Dual-index storage: a map by key plus an insertion-ordered sequence used
//! for positional lookup.
//!
//! Every method here is the unlocked variant. `MemCache` wraps the store in
//! its lock; code that already holds that lock, or owns a store outright,
//! calls these directly.

use std::collections::HashMap;

use crate::cache::Entry;

// == Cache Store ==
/// Key-indexed and position-indexed holder of entries.
///
/// Positional IDs are 1-based and shift down by one for every entry after a
/// deleted one. Entries written only through [`Store::set_with_expiry`] have
/// no position.
#[derive(Debug)]
pub struct Store<V> {
    /// Key-value storage
    by_key: HashMap<String, Entry<V>>,
    /// Keys in insertion order; index `i` is positional ID `i + 1`
    by_position: Vec<String>,
}

impl<V> Default for Store<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Store<V> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            by_key: HashMap::new(),
            by_position: Vec::new(),
        }
    }

    // == Get ==
    /// Looks up an entry by key.
    pub fn get(&self, key: &str) -> Option<&Entry<V>> {
        self.by_key.get(key)
    }

    // == Get By Position ==
    /// Looks up an entry by 1-based positional ID.
    ///
    /// IDs below 1 or beyond the positional count are treated as not found.
    pub fn get_by_position(&self, id: i64) -> Option<&Entry<V>> {
        if id < 1 {
            return None;
        }
        let index = usize::try_from(id - 1).ok()?;
        let key = self.by_position.get(index)?;
        self.by_key.get(key)
    }

    // == Insert If Absent ==
    /// Inserts a non-expiring entry unless the key is already present.
    ///
    /// Returns the positional ID assigned to the new entry, or `0` when the
    /// key was present and nothing changed.
    pub fn insert_if_absent(&mut self, key: &str, value: V) -> u64 {
        if self.by_key.contains_key(key) {
            return 0;
        }

        self.by_position.push(key.to_string());
        self.by_key
            .insert(key.to_string(), Entry::persistent(key, value));

        self.by_position.len() as u64
    }

    // == Set With Expiry ==
    /// Stores `value` under `key`, replacing any existing entry.
    ///
    /// A `ttl_seconds` of zero or less never expires. Only the key index is
    /// touched: a key with no position does not gain one, and a key that has
    /// one keeps it.
    pub fn set_with_expiry(&mut self, key: &str, value: V, ttl_seconds: i64, now: u64) {
        self.by_key
            .insert(key.to_string(), Entry::new(key, value, ttl_seconds, now));
    }

    // == Delete ==
    /// Removes `key` from both indexes.
    ///
    /// The first positional slot holding `key` is removed and every later
    /// slot shifts down by one. Returns whether the key index held `key`.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.by_key.remove(key).is_some();

        if let Some(index) = self.by_position.iter().position(|k| k == key) {
            self.by_position.remove(index);
        }

        removed
    }

    // == Evict Expired ==
    /// Removes every entry expired at `now` from both indexes.
    ///
    /// Returns the evicted keys.
    pub fn evict_expired(&mut self, now: u64) -> Vec<String> {
        let expired: Vec<String> = self
            .by_key
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.delete(key);
        }

        expired
    }

    // == Length ==
    /// Returns the number of entries in the key index.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Returns the number of positional slots.
    pub fn position_count(&self) -> usize {
        self.by_position.len()
    }

    /// Checks whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Keys in positional order.
    pub fn keys_by_position(&self) -> &[String] {
        &self.by_position
    }
}

impl<V: Clone> Store<V> {
    // == Snapshot ==
    /// Returns an owned copy of the key-value mapping.
    pub fn snapshot(&self) -> HashMap<String, V> {
        self.by_key
            .iter()
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }
}
