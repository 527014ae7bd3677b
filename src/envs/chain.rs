use super::Discrete;
use crate::mdps::mdp::Mdp;

pub const GO: Discrete = 0;

/// `0 -> 1 -> ... -> n`, deterministic, reward 1 only on the last step into
/// the terminal state `n`. V*(i) = gamma^(n - 1 - i).
pub struct Chain {
    n: usize,
    reversed: bool,
}

impl Chain {
    pub fn new(n: usize) -> Self {
        Self { n, reversed: false }
    }

    /// Same model, states enumerated from the exit backwards.
    pub fn reversed(n: usize) -> Self {
        Self { n, reversed: true }
    }
}

impl Mdp for Chain {
    type State = Discrete;
    type Action = Discrete;

    fn states(&self) -> Vec<Discrete> {
        if self.reversed {
            (0..=self.n).rev().collect()
        } else {
            (0..=self.n).collect()
        }
    }

    fn actions(&self, s: &Discrete) -> Vec<Discrete> {
        if self.is_terminal(s) {
            vec![]
        } else {
            vec![GO]
        }
    }

    fn transitions(&self, s: &Discrete, _a: &Discrete) -> Vec<(Discrete, f64)> {
        vec![(s + 1, 1.)]
    }

    fn reward(&self, _s: &Discrete, _a: &Discrete, next: &Discrete) -> f64 {
        if *next == self.n {
            1.
        } else {
            0.
        }
    }

    fn is_terminal(&self, s: &Discrete) -> bool {
        *s == self.n
    }
}
