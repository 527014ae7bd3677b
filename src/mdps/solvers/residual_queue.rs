use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

#[derive(Debug)]
struct Entry<S> {
    residual: f64,
    seq: u64,
    state: S,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Entry<S> {}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Entry<S> {
    // Max-heap on residual, earlier insertion wins ties.
    fn cmp(&self, other: &Self) -> Ordering {
        self.residual
            .total_cmp(&other.residual)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// States keyed by Bellman residual, largest first.
///
/// Decrease-key is done lazily: an improved push leaves the old heap entry in
/// place and `pending` remembers which sequence number is current. Stale
/// entries are dropped when they surface in `pop`. A push that would not
/// improve a pending entry is ignored.
#[derive(Debug)]
pub struct ResidualQueue<S: Clone + Eq + Hash> {
    heap: BinaryHeap<Entry<S>>,
    pending: HashMap<S, (f64, u64)>,
    next_seq: u64,
}

impl<S: Clone + Eq + Hash> Default for ResidualQueue<S> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pending: HashMap::new(),
            next_seq: 0,
        }
    }
}

impl<S: Clone + Eq + Hash> ResidualQueue<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `state`, or raises its pending residual. Returns whether the
    /// queue changed.
    pub fn push(&mut self, state: S, residual: f64) -> bool {
        if let Some(&(pending, _)) = self.pending.get(&state) {
            if residual <= pending {
                return false;
            }
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert(state.clone(), (residual, seq));
        self.heap.push(Entry {
            residual,
            seq,
            state,
        });

        true
    }

    pub fn pop(&mut self) -> Option<S> {
        while let Some(e) = self.heap.pop() {
            if self.pending.get(&e.state).map(|&(_, seq)| seq) == Some(e.seq) {
                self.pending.remove(&e.state);
                return Some(e.state);
            }
        }

        None
    }

    pub fn residual(&self, state: &S) -> Option<f64> {
        self.pending.get(state).map(|&(r, _)| r)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
