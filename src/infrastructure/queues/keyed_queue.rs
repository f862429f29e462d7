//! Keyed staging queue - Insertion-ordered queue with insert-if-absent
//!
//! Each queue is parameterized by a key function. Keys stay reserved after
//! the queue is drained, so a duplicate submitted after a render is still a
//! duplicate, and the record that claimed a key stays resolvable.

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::entities::Canonical;

#[derive(Debug)]
pub struct KeyedQueue<K, V: Canonical> {
    key_of: fn(&V) -> K,
    /// Key -> handle of the first record staged under it
    claimed: HashMap<K, V::Handle>,
    pending: Vec<V>,
}

impl<K: Eq + Hash, V: Canonical> KeyedQueue<K, V> {
    pub fn new(key_of: fn(&V) -> K) -> Self {
        Self {
            key_of,
            claimed: HashMap::new(),
            pending: Vec::new(),
        }
    }

    /// Queue `value` unless its key was seen before. Returns whether it was queued.
    pub fn insert_if_absent(&mut self, value: V) -> bool {
        let key = (self.key_of)(&value);
        if self.claimed.contains_key(&key) {
            return false;
        }
        self.claimed.insert(key, value.handle());
        self.pending.push(value);
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.claimed.contains_key(key)
    }

    /// Handle of the record that claimed `key`, pending or already drained
    pub fn claimed(&self, key: &K) -> Option<&V::Handle> {
        self.claimed.get(key)
    }

    /// Pending values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take all pending values, leaving their keys reserved
    pub fn drain(&mut self) -> Vec<V> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        key: &'static str,
        id: u32,
    }

    impl Canonical for Entry {
        type Handle = u32;

        fn handle(&self) -> u32 {
            self.id
        }
    }

    fn entry(key: &'static str, id: u32) -> Entry {
        Entry { key, id }
    }

    fn queue() -> KeyedQueue<String, Entry> {
        KeyedQueue::new(|entry: &Entry| entry.key.to_string())
    }

    #[test]
    fn test_first_submission_wins() {
        let mut queue = queue();
        assert!(queue.insert_if_absent(entry("a", 1)));
        assert!(!queue.insert_if_absent(entry("a", 2)));
        assert!(queue.insert_if_absent(entry("b", 3)));
        let values: Vec<_> = queue.iter().cloned().collect();
        assert_eq!(values, vec![entry("a", 1), entry("b", 3)]);
        assert_eq!(queue.claimed(&"a".to_string()), Some(&1));
    }

    #[test]
    fn test_keys_survive_drain() {
        let mut queue = queue();
        queue.insert_if_absent(entry("a", 1));
        assert_eq!(queue.drain().len(), 1);
        assert!(queue.is_empty());
        assert!(queue.contains(&"a".to_string()));
        assert_eq!(queue.claimed(&"a".to_string()), Some(&1));
        assert!(!queue.insert_if_absent(entry("a", 2)));
        assert!(queue.drain().is_empty());
        assert_eq!(queue.claimed(&"z".to_string()), None);
    }
}
