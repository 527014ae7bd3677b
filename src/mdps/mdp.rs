use std::fmt::Debug;
use std::hash::Hash;

/// Markov Decision Process - Sutton & Barto 2018.
///
/// A finite, fully known model. The discount factor is not part of the model,
/// it belongs to whoever solves it.
pub trait Mdp {
    type State: Clone + Eq + Hash + Debug;

    type Action: Clone + Eq + Hash + Debug;

    /// All states, in a fixed order.
    fn states(&self) -> Vec<Self::State>;

    /// Legal actions in `s`. Empty for terminal states.
    fn actions(&self, s: &Self::State) -> Vec<Self::Action>;

    /// `(next_state, probability)` pairs for taking `a` in `s`. Probabilities sum to 1.
    fn transitions(&self, s: &Self::State, a: &Self::Action) -> Vec<(Self::State, f64)>;

    fn reward(&self, s: &Self::State, a: &Self::Action, next: &Self::State) -> f64;

    fn is_terminal(&self, s: &Self::State) -> bool;
}
