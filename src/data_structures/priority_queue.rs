use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue used by the route searches.
///
/// Entries with equal priority are popped in payload order, so a search
/// driven by this queue visits nodes in the same order on every run.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
    pushes: usize,
}

impl<V, P> MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
            pushes: 0,
        }
    }

    /// Total number of pushes since creation
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn push(&mut self, item: V, priority: P) {
        self.pushes += 1;
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Ord + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
