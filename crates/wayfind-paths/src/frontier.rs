//! Min-priority frontier for best-first search.
//!
//! Entries are stored in a binary min-heap keyed by `(priority, seq)`.
//! Lower priorities are extracted first; ties are broken by insertion order
//! (FIFO). There is no decrease-key: callers insert a fresh, better entry
//! and discard the outdated one when it surfaces.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    priority: f64,
    /// Monotonically increasing insertion counter used to break ties.
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue of search candidates.
pub struct Frontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert `item` with the given priority. O(log n).
    ///
    /// Inserting an item that is already queued is allowed and is how a
    /// priority gets lowered.
    pub fn insert(&mut self, priority: f64, item: T) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            item,
        }));
    }

    /// Remove and return the entry with the lowest priority. O(log n).
    pub fn extract_min(&mut self) -> Option<(f64, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.priority, entry.item))
    }

    /// The entry [`extract_min`](Self::extract_min) would return next. O(1).
    pub fn peek(&self) -> Option<(f64, &T)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (entry.priority, &entry.item))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drop every entry. The tie-break counter keeps running.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_priority_order() {
        let mut f = Frontier::new();
        f.insert(3.0, "a");
        f.insert(1.0, "b");
        f.insert(2.5, "c");

        assert_eq!(f.extract_min(), Some((1.0, "b")));
        assert_eq!(f.extract_min(), Some((2.5, "c")));
        assert_eq!(f.extract_min(), Some((3.0, "a")));
        assert_eq!(f.extract_min(), None);
    }

    #[test]
    fn ties_are_fifo() {
        let mut f = Frontier::new();
        f.insert(1.0, "first");
        f.insert(1.0, "second");
        f.insert(0.5, "lowest");
        f.insert(1.0, "third");

        assert_eq!(f.extract_min(), Some((0.5, "lowest")));
        assert_eq!(f.extract_min(), Some((1.0, "first")));
        assert_eq!(f.extract_min(), Some((1.0, "second")));
        assert_eq!(f.extract_min(), Some((1.0, "third")));
    }

    #[test]
    fn reinsertion_lowers_priority() {
        let mut f = Frontier::new();
        f.insert(10.0, 'x');
        f.insert(4.0, 'y');
        f.insert(2.0, 'x');

        assert_eq!(f.len(), 3);
        assert_eq!(f.extract_min(), Some((2.0, 'x')));
        assert_eq!(f.extract_min(), Some((4.0, 'y')));
        // The outdated entry is still there for the caller to discard.
        assert_eq!(f.extract_min(), Some((10.0, 'x')));
    }

    #[test]
    fn peek_does_not_remove() {
        let mut f = Frontier::new();
        assert!(f.peek().is_none());
        f.insert(7.0, 1);
        f.insert(0.0, 2);
        assert_eq!(f.peek(), Some((0.0, &2)));
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn is_empty_len_and_clear() {
        let mut f = Frontier::<u8>::new();
        assert!(f.is_empty());
        assert_eq!(f.len(), 0);

        f.insert(1.0, 1);
        f.insert(2.0, 2);
        assert!(!f.is_empty());
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.extract_min(), None);
    }

    #[test]
    fn infinite_priority_sorts_last() {
        let mut f = Frontier::new();
        f.insert(f64::INFINITY, "far");
        f.insert(1e300, "near");
        assert_eq!(f.extract_min().map(|(_, s)| s), Some("near"));
        assert_eq!(f.extract_min().map(|(_, s)| s), Some("far"));
    }
}
