use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;
use rustc_hash::FxHashMap;

// Monotonic enqueue counter; also the tie-break between equal keys
type Slot = u64;

// KeyedPriorityQueue is a max-heap, so flip the ordering: smallest key first,
// then the earliest slot among equal keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MinKey<K>(K, Slot);

impl<K: Ord> PartialOrd for MinKey<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for MinKey<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0).then_with(|| other.1.cmp(&self.1))
    }
}

/// Min-heap of ready entries ordered by a per-discipline key.
///
/// Entries with equal keys pop in the order they were pushed, so a run is
/// reproducible regardless of the underlying heap layout. The entries
/// themselves are stored outside the heap so they can be updated in place
/// and re-keyed while queued.
#[derive(Debug)]
pub struct ReadyHeap<T, K: Ord> {
    entries: FxHashMap<Slot, T>,
    queue: KeyedPriorityQueue<Slot, MinKey<K>>,
    key: fn(&T) -> K,
    next_slot: Slot,
}

impl<T, K: Ord + Copy> ReadyHeap<T, K> {
    pub fn new(key: fn(&T) -> K) -> Self {
        Self {
            entries: FxHashMap::default(),
            queue: KeyedPriorityQueue::new(),
            key,
            next_slot: 0,
        }
    }

    pub fn push(&mut self, entry: T) {
        let slot = self.next_slot;
        self.next_slot += 1;

        let key = (self.key)(&entry);
        self.queue.push(slot, MinKey(key, slot));
        self.entries.insert(slot, entry);
    }

    pub fn pop(&mut self) -> Option<T> {
        let (slot, _) = self.queue.pop()?;
        let entry = self.entries.remove(&slot);
        debug_assert!(entry.is_some(), "Slot {slot} queued without an entry");
        entry
    }

    #[cfg(test)]
    pub fn peek(&self) -> Option<&T> {
        let (slot, _) = self.queue.peek()?;
        self.entries.get(slot)
    }

    /// Apply `update` to every queued entry matching `filter` and re-key it.
    /// The entry keeps its original slot, so its tie-break rank is preserved.
    /// Returns the number of entries touched.
    pub fn update_where(
        &mut self,
        mut filter: impl FnMut(&T) -> bool,
        mut update: impl FnMut(&mut T),
    ) -> usize {
        let mut touched = 0;
        for (&slot, entry) in self.entries.iter_mut() {
            if !filter(&*entry) {
                continue;
            }

            update(&mut *entry);
            let key = (self.key)(&*entry);
            let previous = self.queue.set_priority(&slot, MinKey(key, slot));
            debug_assert!(previous.is_ok(), "Entry slot {slot} missing from heap");
            touched += 1;
        }
        touched
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u64,
        cost: u64,
    }

    fn cost(item: &Item) -> u64 {
        item.cost
    }

    #[test]
    fn test_pops_smallest_key_first() {
        let mut heap = ReadyHeap::new(cost);
        heap.push(Item { id: 1, cost: 9 });
        heap.push(Item { id: 2, cost: 3 });
        heap.push(Item { id: 3, cost: 5 });

        let order: Vec<u64> = std::iter::from_fn(|| heap.pop()).map(|i| i.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_equal_keys_pop_in_push_order() {
        let mut heap = ReadyHeap::new(cost);
        for id in [7, 3, 5, 1] {
            heap.push(Item { id, cost: 4 });
        }

        let order: Vec<u64> = std::iter::from_fn(|| heap.pop()).map(|i| i.id).collect();
        assert_eq!(order, vec![7, 3, 5, 1]);
    }

    #[test]
    fn test_update_where_rekeys_entries() {
        let mut heap = ReadyHeap::new(cost);
        heap.push(Item { id: 1, cost: 2 });
        heap.push(Item { id: 2, cost: 8 });
        heap.push(Item { id: 2, cost: 8 });

        let touched = heap.update_where(|i| i.id == 2, |i| i.cost = 1);
        assert_eq!(touched, 2);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek().map(|i| (i.id, i.cost)), Some((2, 1)));

        assert_eq!(heap.pop().map(|i| i.id), Some(2));
        assert_eq!(heap.pop().map(|i| i.id), Some(2));
        assert_eq!(heap.pop().map(|i| i.id), Some(1));
        assert_eq!(heap.pop(), None);
    }
}
