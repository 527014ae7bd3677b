use super::{bellman::Bellman, prioritized_sweeping, value_table::ValueTable};
use crate::config::*;
use crate::error::*;
use crate::mdps::{mdp::Mdp, mdp_solver::MdpSolver};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

/// Bookkeeping from a single run.
///
/// `rounds` counts budget consumed, `updates` counts value writes and
/// `skipped` counts state-slots left alone (terminal, or no legal actions).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub rounds: usize,
    pub updates: usize,
    pub skipped: usize,
}

/// Value iteration over a known MDP.
///
/// All the work happens in [`ValueIterationAgent::new`]; afterwards the agent is
/// read-only and every query is re-derived from the final value table.
pub struct ValueIterationAgent<M: Mdp> {
    mdp: Arc<M>,
    config: SolverConfig,
    values: ValueTable<M::State>,
    stats: RunStats,
}

impl<M: Mdp> ValueIterationAgent<M> {
    pub fn new(mdp: Arc<M>, config: SolverConfig) -> Result<Self> {
        config.validate()?;

        let states = mdp.states();
        if states.is_empty() && config.strategy == UpdateStrategy::Cyclic {
            return Err(SolverError::EmptyStateSpace);
        }

        let mut values = ValueTable::new();
        let bellman = Bellman::new(&*mdp, config.discount);
        let stats = match config.strategy {
            UpdateStrategy::Batch => run_batch(&bellman, &states, config.iterations, &mut values),
            UpdateStrategy::Cyclic => run_cyclic(&bellman, &states, config.iterations, &mut values),
            UpdateStrategy::PrioritizedSweeping { theta } => prioritized_sweeping::run(
                &bellman,
                &states,
                config.iterations,
                theta,
                &mut values,
            ),
        };
        debug!(
            strategy = config.strategy.name(),
            states = states.len(),
            rounds = stats.rounds,
            updates = stats.updates,
            skipped = stats.skipped,
            "value iteration finished"
        );

        Ok(Self {
            mdp,
            config,
            values,
            stats,
        })
    }

    fn bellman(&self) -> Bellman<'_, M> {
        Bellman::new(&*self.mdp, self.config.discount)
    }

    pub fn value(&self, s: &M::State) -> f64 {
        self.values.get(s)
    }

    pub fn q_value(&self, s: &M::State, a: &M::Action) -> f64 {
        self.bellman().q_value(&self.values, s, a)
    }

    /// Greedy action, `None` when `s` has no legal actions.
    pub fn policy(&self, s: &M::State) -> Option<M::Action> {
        self.bellman().greedy_action(&self.values, s)
    }

    /// Same as [`Self::policy`], no exploration.
    pub fn action(&self, s: &M::State) -> Option<M::Action> {
        self.policy(s)
    }

    pub fn residual(&self, s: &M::State) -> Option<f64> {
        self.bellman().residual(&self.values, s)
    }

    /// Sum of Bellman residuals over non-terminal states.
    pub fn total_residual(&self) -> f64 {
        self.mdp
            .states()
            .iter()
            .filter(|s| !self.mdp.is_terminal(s))
            .filter_map(|s| self.residual(s))
            .sum()
    }

    pub fn mdp(&self) -> &M {
        &self.mdp
    }

    pub fn values(&self) -> &ValueTable<M::State> {
        &self.values
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }
}

impl<M: Mdp> MdpSolver<M> for ValueIterationAgent<M> {
    fn v_star(&self, s: &M::State) -> f64 {
        self.value(s)
    }

    fn q_star(&self, s: &M::State, a: &M::Action) -> f64 {
        self.q_value(s, a)
    }

    fn pi_star(&self, s: &M::State) -> Option<M::Action> {
        self.policy(s)
    }
}

/// Synchronous sweeps: round k reads only round k-1's table.
fn run_batch<M: Mdp>(
    bellman: &Bellman<M>,
    states: &[M::State],
    iterations: usize,
    values: &mut ValueTable<M::State>,
) -> RunStats {
    let mut stats = RunStats::default();
    for _ in 0..iterations {
        let mut next = values.clone();
        for s in states {
            if bellman.mdp.is_terminal(s) {
                stats.skipped += 1;
                continue;
            }
            match bellman.max_q(values, s) {
                Some(v) => {
                    next.set(s.clone(), v);
                    stats.updates += 1;
                    trace!(state = ?s, value = v, "updated");
                }
                None => stats.skipped += 1,
            }
        }
        *values = next;
        stats.rounds += 1;
    }

    stats
}

/// One in-place update per round, state `round % n` of the enumeration.
fn run_cyclic<M: Mdp>(
    bellman: &Bellman<M>,
    states: &[M::State],
    iterations: usize,
    values: &mut ValueTable<M::State>,
) -> RunStats {
    let mut stats = RunStats::default();
    for round in 0..iterations {
        let s = &states[round % states.len()];
        stats.rounds += 1;

        if bellman.mdp.is_terminal(s) {
            stats.skipped += 1;
            continue;
        }
        match bellman.max_q(values, s) {
            Some(v) => {
                values.set(s.clone(), v);
                stats.updates += 1;
                trace!(round, state = ?s, value = v, "updated");
            }
            None => stats.skipped += 1,
        }
    }

    stats
}
