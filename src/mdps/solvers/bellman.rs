use super::value_table::ValueTable;
use crate::mdps::mdp::Mdp;

/// Bellman backups against a value table. Pure reads, nothing here mutates.
pub struct Bellman<'a, M: Mdp> {
    pub mdp: &'a M,
    pub discount: f64,
}

impl<'a, M: Mdp> Bellman<'a, M> {
    pub fn new(mdp: &'a M, discount: f64) -> Self {
        Self { mdp, discount }
    }

    /// Q(s, a) = sum_{s'} P(s'|s,a) [ R(s,a,s') + gamma * V(s') ].
    pub fn q_value(&self, values: &ValueTable<M::State>, s: &M::State, a: &M::Action) -> f64 {
        self.mdp
            .transitions(s, a)
            .iter()
            .map(|(next, p)| {
                p * (self.mdp.reward(s, a, next) + self.discount * values.get(next))
            })
            .sum()
    }

    /// Best Q-value over the legal actions, `None` if there are none.
    pub fn max_q(&self, values: &ValueTable<M::State>, s: &M::State) -> Option<f64> {
        self.mdp
            .actions(s)
            .iter()
            .map(|a| self.q_value(values, s, a))
            .reduce(f64::max)
    }

    /// |V(s) - max_a Q(s, a)|, `None` if `s` has no legal actions.
    pub fn residual(&self, values: &ValueTable<M::State>, s: &M::State) -> Option<f64> {
        self.max_q(values, s).map(|q| (values.get(s) - q).abs())
    }

    /// Greedy action. Ties go to the action enumerated first.
    pub fn greedy_action(&self, values: &ValueTable<M::State>, s: &M::State) -> Option<M::Action> {
        let mut best: Option<(M::Action, f64)> = None;
        for a in self.mdp.actions(s) {
            let q = self.q_value(values, s, &a);
            if best.as_ref().map_or(true, |(_, b)| q > *b) {
                best = Some((a, q));
            }
        }

        best.map(|(a, _)| a)
    }
}
