//! Binary min-heap with decrease-key support
//!
//! Dijkstra needs a priority queue whose entries can have their priority
//! lowered after insertion. `std::collections::BinaryHeap` has no such
//! operation, so this is an explicit array heap that tracks each item's
//! slot in an identity -> index map, updated on every swap; decrease-key
//! is O(log n) instead of a linear scan.
//!
//! Tie-break: entries with equal priority order by insertion sequence
//! (earliest-inserted-first), so extraction order is deterministic.

use crate::graph::{GraphError, GraphResult, NodeKey};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct HeapEntry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> HeapEntry<T> {
    /// Min-heap ordering: priority first, insertion sequence on ties.
    /// Priorities are never NaN (the store rejects non-finite weights),
    /// but a NaN would still order deterministically via `seq`.
    fn precedes(&self, other: &Self) -> bool {
        match self.priority.partial_cmp(&other.priority) {
            Some(Ordering::Less) => true,
            Some(Ordering::Greater) => false,
            _ => self.seq < other.seq,
        }
    }
}

/// Binary min-heap of (priority, item) pairs with identity-based
/// decrease-key
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T: NodeKey> {
    entries: Vec<HeapEntry<T>>,
    positions: FxHashMap<T, usize>,
    next_seq: u64,
}

impl<T: NodeKey> MinPriorityQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty queue with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            entries: Vec::with_capacity(capacity),
            positions: FxHashMap::default(),
            next_seq: 0,
        }
    }

    /// Number of queued items
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no items remain
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an item with the given priority. Items are distinguished by
    /// identity; inserting an item that is already queued is a caller bug.
    pub fn insert(&mut self, priority: f64, item: T) {
        debug_assert!(
            !self.positions.contains_key(&item),
            "item inserted twice: {:?}",
            item
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        let idx = self.entries.len();
        self.positions.insert(item.clone(), idx);
        self.entries.push(HeapEntry {
            priority,
            seq,
            item,
        });
        self.sift_up(idx);
    }

    /// Remove and return the (priority, item) pair with the smallest
    /// priority. Fails with [`GraphError::EmptyQueue`] when no items
    /// remain.
    pub fn extract_min(&mut self) -> GraphResult<(f64, T), T> {
        if self.entries.is_empty() {
            return Err(GraphError::EmptyQueue);
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let root = self.entries.pop().expect("checked non-empty");
        self.positions.remove(&root.item);
        if !self.entries.is_empty() {
            self.positions.insert(self.entries[0].item.clone(), 0);
            self.sift_down(0);
        }
        Ok((root.priority, root.item))
    }

    /// Lower an item's priority and restore heap order.
    ///
    /// No-op returning `false` when the item is not queued or when
    /// `new_priority` is not strictly smaller than the current priority
    /// (monotonicity guard: raising a key could break the heap invariant
    /// and with it Dijkstra's correctness). Returns `true` when the key
    /// was lowered.
    pub fn decrease_key(&mut self, item: &T, new_priority: f64) -> bool {
        let idx = match self.positions.get(item) {
            Some(&idx) => idx,
            None => return false,
        };
        if new_priority >= self.entries[idx].priority {
            return false;
        }
        self.entries[idx].priority = new_priority;
        self.sift_up(idx);
        true
    }

    /// Current priority of a queued item, if present
    pub fn priority_of(&self, item: &T) -> Option<f64> {
        self.positions
            .get(item)
            .map(|&idx| self.entries[idx].priority)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.entries[idx].precedes(&self.entries[parent]) {
                break;
            }
            self.swap_entries(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut smallest = idx;
            if left < len && self.entries[left].precedes(&self.entries[smallest]) {
                smallest = left;
            }
            if right < len && self.entries[right].precedes(&self.entries[smallest]) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.swap_entries(idx, smallest);
            idx = smallest;
        }
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions.insert(self.entries[a].item.clone(), a);
        self.positions.insert(self.entries[b].item.clone(), b);
    }
}

impl<T: NodeKey> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
