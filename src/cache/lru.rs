//! LRU Tracker Module
//!
//! Implements Least Recently Used ordering for dedupe entries.

use std::collections::HashMap;
use std::sync::Arc;

// == LRU Tracker ==
/// Access-ordered key/value store backed by a slab of linked nodes.
///
/// Nodes live in a `Vec` and link to each other by slot index, so the key
/// index and the recency list never hold references into each other:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Lookup, promotion, insertion at the head and removal at the tail are O(1).
#[derive(Debug)]
pub struct LruTracker<V> {
    /// Key -> slot index
    index: HashMap<Arc<str>, usize>,
    /// Node storage, `None` marks a vacant slot
    slots: Vec<Option<Node<V>>>,
    /// Vacant slot indices available for reuse
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

#[derive(Debug)]
struct Node<V> {
    key: Arc<str>,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<V> Default for LruTracker<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> LruTracker<V> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Get ==
    /// Reads the value for `key` without changing recency.
    pub fn get(&self, key: &str) -> Option<&V> {
        let &slot = self.index.get(key)?;
        self.node(slot).map(|node| &node.value)
    }

    /// Mutable access to the value for `key` without changing recency.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let &slot = self.index.get(key)?;
        self.node_mut(slot).map(|node| &mut node.value)
    }

    // == Touch ==
    /// Marks a key as recently used (moves to head).
    ///
    /// Returns false if the key is not tracked.
    pub fn touch(&mut self, key: &str) -> bool {
        match self.index.get(key) {
            Some(&slot) => {
                self.promote(slot);
                true
            }
            None => false,
        }
    }

    // == Insert ==
    /// Inserts `key` at the head.
    ///
    /// If the key is already tracked its value is replaced, it is promoted to
    /// the head, and the previous value is returned.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(key) {
            let previous = self
                .node_mut(slot)
                .map(|node| std::mem::replace(&mut node.value, value));
            self.promote(slot);
            return previous;
        }

        let key: Arc<str> = Arc::from(key);
        let node = Node {
            key: Arc::clone(&key),
            value,
            prev: None,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        self.attach_head(slot);
        self.index.insert(key, slot);
        None
    }

    // == Remove ==
    /// Removes a key from the tracker, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let &slot = self.index.get(key)?;
        self.release(slot).map(|(_, value)| value)
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used entry.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<(String, V)> {
        let slot = self.tail?;
        self.release(slot)
            .map(|(key, value)| (key.as_ref().to_owned(), value))
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.tail
            .and_then(|slot| self.node(slot))
            .map(|node| node.key.as_ref())
    }

    // == Retain ==
    /// Keeps only the entries for which `keep` returns true.
    ///
    /// Relative order of the survivors is preserved. Returns the number of
    /// entries removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str, &V) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.head;

        while let Some(slot) = cursor {
            let Some(node) = self.node(slot) else {
                break;
            };
            cursor = node.next;
            if !keep(node.key.as_ref(), &node.value) {
                self.release(slot);
                removed += 1;
            }
        }

        removed
    }

    // == Clear ==
    /// Drops every entry and all slab storage.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    // == Iter ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let node = self.node(cursor?)?;
            cursor = node.next;
            Some((node.key.as_ref(), &node.value))
        })
    }

    // == Internals ==
    fn node(&self, slot: usize) -> Option<&Node<V>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<V>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    fn promote(&mut self, slot: usize) {
        if self.head == Some(slot) {
            return;
        }
        self.detach(slot);
        self.attach_head(slot);
    }

    /// Unlinks a slot, frees it and drops its index entry.
    fn release(&mut self, slot: usize) -> Option<(Arc<str>, V)> {
        self.detach(slot);
        let node = self.slots.get_mut(slot)?.take()?;
        self.index.remove(&node.key);
        self.free.push(slot);
        Some((node.key, node.value))
    }

    fn detach(&mut self, slot: usize) {
        let Some((prev, next)) = self.node(slot).map(|node| (node.prev, node.next)) else {
            return;
        };

        match prev {
            Some(p) => {
                if let Some(prev_node) = self.node_mut(p) {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(next_node) = self.node_mut(n) {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }

        if let Some(node) = self.node_mut(slot) {
            node.prev = None;
            node.next = None;
        }
    }

    fn attach_head(&mut self, slot: usize) {
        let old_head = self.head;
        if let Some(node) = self.node_mut(slot) {
            node.prev = None;
            node.next = old_head;
        }

        match old_head {
            Some(h) => {
                if let Some(head_node) = self.node_mut(h) {
                    head_node.prev = Some(slot);
                }
            }
            None => self.tail = Some(slot),
        }

        self.head = Some(slot);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order(lru: &LruTracker<u32>) -> Vec<&str> {
        lru.iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn test_lru_new() {
        let lru: LruTracker<u32> = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.peek_oldest(), None);
    }

    #[test]
    fn test_lru_insert_new_key() {
        let mut lru = LruTracker::new();

        lru.insert("key1", 1);
        lru.insert("key2", 2);
        lru.insert("key3", 3);

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.peek_oldest(), Some("key1"));
        assert_eq!(order(&lru), vec!["key3", "key2", "key1"]);
    }

    #[test]
    fn test_lru_insert_existing_key_replaces_and_promotes() {
        let mut lru = LruTracker::new();

        lru.insert("key1", 1);
        lru.insert("key2", 2);

        assert_eq!(lru.insert("key1", 10), Some(1));
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.get("key1"), Some(&10));
        assert_eq!(lru.peek_oldest(), Some("key2"));
    }

    #[test]
    fn test_lru_touch_existing_key() {
        let mut lru = LruTracker::new();

        lru.insert("key1", 1);
        lru.insert("key2", 2);
        lru.insert("key3", 3);

        // Touch key1 again - should move to head
        assert!(lru.touch("key1"));

        assert_eq!(lru.len(), 3);
        // key2 is now oldest
        assert_eq!(lru.peek_oldest(), Some("key2"));
    }

    #[test]
    fn test_lru_touch_missing_key() {
        let mut lru = LruTracker::new();
        lru.insert("key1", 1);

        assert!(!lru.touch("missing"));
        assert_eq!(order(&lru), vec!["key1"]);
    }

    #[test]
    fn test_lru_evict_oldest() {
        let mut lru = LruTracker::new();

        lru.insert("key1", 1);
        lru.insert("key2", 2);
        lru.insert("key3", 3);

        assert_eq!(lru.evict_oldest(), Some(("key1".to_string(), 1)));
        assert_eq!(lru.len(), 2);

        assert_eq!(lru.evict_oldest(), Some(("key2".to_string(), 2)));
        assert_eq!(lru.len(), 1);
        assert!(!lru.contains("key2"));
    }

    #[test]
    fn test_lru_evict_empty() {
        let mut lru: LruTracker<u32> = LruTracker::new();
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_lru_remove() {
        let mut lru = LruTracker::new();

        lru.insert("key1", 1);
        lru.insert("key2", 2);
        lru.insert("key3", 3);

        assert_eq!(lru.remove("key2"), Some(2));

        assert_eq!(lru.len(), 2);
        assert!(!lru.contains("key2"));
        assert_eq!(order(&lru), vec!["key3", "key1"]);
    }

    #[test]
    fn test_lru_remove_nonexistent_key() {
        let mut lru = LruTracker::new();

        lru.insert("key1", 1);
        lru.insert("key2", 2);

        assert_eq!(lru.remove("nonexistent"), None);
        assert_eq!(lru.len(), 2);
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = LruTracker::new();

        lru.insert("a", 1);
        lru.insert("b", 2);
        lru.insert("c", 3);

        // [c, b, a] -> touch a -> [a, c, b] -> touch c -> [c, a, b] -> touch b -> [b, c, a]
        lru.touch("a");
        lru.touch("c");
        lru.touch("b");

        assert_eq!(order(&lru), vec!["b", "c", "a"]);
        assert_eq!(lru.evict_oldest().map(|(k, _)| k), Some("a".to_string()));
        assert_eq!(lru.evict_oldest().map(|(k, _)| k), Some("c".to_string()));
        assert_eq!(lru.evict_oldest().map(|(k, _)| k), Some("b".to_string()));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_reuses_freed_slots() {
        let mut lru = LruTracker::new();

        lru.insert("a", 1);
        lru.insert("b", 2);
        lru.remove("a");
        lru.insert("c", 3);

        assert_eq!(lru.slots.len(), 2);
        assert_eq!(order(&lru), vec!["c", "b"]);
    }

    #[test]
    fn test_lru_retain() {
        let mut lru = LruTracker::new();

        for (i, key) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
            lru.insert(key, i as u32);
        }

        let removed = lru.retain(|_, value| value % 2 == 0);

        assert_eq!(removed, 2);
        assert_eq!(order(&lru), vec!["e", "c", "a"]);
        assert_eq!(lru.peek_oldest(), Some("a"));
    }

    #[test]
    fn test_lru_retain_everything_removed() {
        let mut lru = LruTracker::new();
        lru.insert("a", 1);
        lru.insert("b", 2);

        assert_eq!(lru.retain(|_, _| false), 2);
        assert!(lru.is_empty());
        assert_eq!(lru.peek_oldest(), None);

        // Still usable after being drained
        lru.insert("c", 3);
        assert_eq!(order(&lru), vec!["c"]);
    }

    #[test]
    fn test_lru_get_mut_keeps_order() {
        let mut lru = LruTracker::new();
        lru.insert("a", 1);
        lru.insert("b", 2);

        if let Some(value) = lru.get_mut("a") {
            *value = 5;
        }

        assert_eq!(lru.get("a"), Some(&5));
        assert_eq!(lru.peek_oldest(), Some("a"));
    }

    #[test]
    fn test_lru_clear() {
        let mut lru = LruTracker::new();
        lru.insert("a", 1);
        lru.insert("b", 2);

        lru.clear();

        assert!(lru.is_empty());
        assert!(!lru.contains("a"));
        assert_eq!(lru.iter().count(), 0);
    }
}
