use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<T> {
    cost: f32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed: the max-heap must surface the lowest cost, then the oldest push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-cost priority queue that pops equal costs in insertion order.
///
/// The heap's own handling of equal keys never leaks out: every entry carries
/// a monotonically increasing sequence number used as the second key, so the
/// pop order is a pure function of the push sequence.
pub struct FloodQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for FloodQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FloodQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push(&mut self, cost: f32, item: T) {
        // -0.0 + 0.0 is 0.0; signed zeros must tie.
        let cost = cost + 0.0;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { cost, seq, item });
    }

    /// Remove the cheapest entry; among equal costs, the earliest pushed.
    pub fn pop(&mut self) -> Option<(f32, T)> {
        self.heap.pop().map(|e| (e.cost, e.item))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes since construction.
    pub fn pushed(&self) -> u64 {
        self.next_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_by_cost_then_insertion_order() {
        let mut q = FloodQueue::new();
        q.push(2.0, 'a');
        q.push(1.0, 'b');
        q.push(2.0, 'c');
        q.push(1.0, 'd');
        q.push(0.5, 'e');
        q.push(2.0, 'f');

        let order: Vec<char> = std::iter::from_fn(|| q.pop().map(|(_, c)| c)).collect();
        assert_eq!(vec!['e', 'b', 'd', 'a', 'c', 'f'], order);
        assert!(q.is_empty());
        assert_eq!(6, q.pushed());
    }

    #[test]
    fn signed_zeros_are_one_cost() {
        let mut q = FloodQueue::new();
        q.push(0.0, 'a');
        q.push(-0.0, 'b');
        q.push(0.0, 'c');
        assert_eq!(Some((0.0, 'a')), q.pop());
        assert_eq!(Some((0.0, 'b')), q.pop());
        assert_eq!(Some((0.0, 'c')), q.pop());
    }

    #[test]
    fn long_runs_of_equal_cost_stay_fifo() {
        let mut q = FloodQueue::with_capacity(64);
        for i in 0..64 {
            q.push(3.0, i);
        }
        for expected in 0..64 {
            assert_eq!(Some((3.0, expected)), q.pop());
        }
    }
}
