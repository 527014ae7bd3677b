use super::{bellman::Bellman, residual_queue::ResidualQueue, value_iteration::RunStats, value_table::ValueTable};
use crate::mdps::mdp::Mdp;
use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;
use tracing::trace;

/// `s` is a predecessor of `s'` iff some legal action in non-terminal `s`
/// reaches `s'` with nonzero probability.
#[derive(Debug, Clone)]
pub struct Predecessors<S: Eq + Hash> {
    map: IndexMap<S, IndexSet<S>>,
}

impl<S: Clone + Eq + Hash> Predecessors<S> {
    pub fn build<M: Mdp<State = S>>(mdp: &M, states: &[S]) -> Self {
        let mut map: IndexMap<S, IndexSet<S>> =
            states.iter().map(|s| (s.clone(), IndexSet::new())).collect();

        for s in states.iter().filter(|s| !mdp.is_terminal(s)) {
            for a in mdp.actions(s) {
                for (next, p) in mdp.transitions(s, &a) {
                    if p > 0. {
                        map.entry(next).or_default().insert(s.clone());
                    }
                }
            }
        }

        Self { map }
    }

    pub fn of(&self, s: &S) -> impl Iterator<Item = &S> {
        self.map.get(s).into_iter().flatten()
    }

    /// Number of distinct predecessor edges.
    pub fn edges(&self) -> usize {
        self.map.values().map(IndexSet::len).sum()
    }
}

pub(crate) fn run<M: Mdp>(
    bellman: &Bellman<M>,
    states: &[M::State],
    iterations: usize,
    theta: f64,
    values: &mut ValueTable<M::State>,
) -> RunStats {
    let mdp = bellman.mdp;
    let predecessors = Predecessors::build(mdp, states);

    let mut queue = ResidualQueue::new();
    for s in states.iter().filter(|s| !mdp.is_terminal(s)) {
        if let Some(r) = bellman.residual(values, s) {
            queue.push(s.clone(), r);
        }
    }
    trace!(
        edges = predecessors.edges(),
        queued = queue.len(),
        "prioritized sweeping seeded"
    );

    let mut stats = RunStats::default();
    while stats.rounds < iterations {
        let Some(s) = queue.pop() else {
            break;
        };
        stats.rounds += 1;

        if mdp.is_terminal(&s) {
            stats.skipped += 1;
            continue;
        }
        let Some(v) = bellman.max_q(values, &s) else {
            stats.skipped += 1;
            continue;
        };
        values.set(s.clone(), v);
        stats.updates += 1;
        trace!(state = ?s, value = v, "updated");

        for p in predecessors.of(&s) {
            if mdp.is_terminal(p) {
                continue;
            }
            if let Some(r) = bellman.residual(values, p) {
                if r > theta {
                    queue.push(p.clone(), r);
                }
            }
        }
    }

    stats
}
