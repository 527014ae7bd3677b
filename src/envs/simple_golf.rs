use super::*;
use crate::mdps::mdp::Mdp;
use itertools::Itertools;

pub const FAIRWAY: Discrete = 0;
pub const GREEN: Discrete = 1;
pub const HOLE: Discrete = 2;

pub const HIT_TO_GREEN: Discrete = 0;
pub const HIT_TO_FAIRWAY: Discrete = 1;
pub const PUTT: Discrete = 2;

/// https://towardsdatascience.com/reinforcement-learning-an-easy-introduction-to-value-iteration-e4cfe0731fd5
pub struct SimpleGolf {
    n_s: usize,
    transitions: Transitions,
}

impl SimpleGolf {
    pub fn new() -> Self {
        let transitions = Transitions::from([
            (
                (FAIRWAY, HIT_TO_GREEN),
                vec![
                    Transition {
                        next_state: GREEN,
                        probability: 0.9,
                        reward: 0.,
                    },
                    Transition {
                        next_state: FAIRWAY,
                        probability: 0.1,
                        reward: 0.,
                    },
                ],
            ),
            (
                (GREEN, HIT_TO_FAIRWAY),
                vec![
                    Transition {
                        next_state: FAIRWAY,
                        probability: 0.9,
                        reward: 0.,
                    },
                    Transition {
                        next_state: GREEN,
                        probability: 0.1,
                        reward: 0.,
                    },
                ],
            ),
            (
                (GREEN, PUTT),
                vec![
                    Transition {
                        next_state: HOLE,
                        probability: 0.9,
                        reward: 10.,
                    },
                    Transition {
                        next_state: GREEN,
                        probability: 0.1,
                        reward: 0.,
                    },
                ],
            ),
        ]);

        Self { n_s: 3, transitions }
    }

    /// Closed-form V* for discount `gamma`.
    pub fn v_star(gamma: f64) -> Vec<f64> {
        let green = 0.9 * 10. / (1. - 0.1 * gamma);
        let fairway = 0.9 * gamma * green / (1. - 0.1 * gamma);
        vec![fairway, green, 0.]
    }
}

impl Mdp for SimpleGolf {
    type State = Discrete;
    type Action = Discrete;

    fn states(&self) -> Vec<Discrete> {
        (0..self.n_s).collect()
    }

    fn actions(&self, s: &Discrete) -> Vec<Discrete> {
        self.transitions
            .keys()
            .filter(|&&(ks, _)| ks == *s)
            .map(|&(_, a)| a)
            .sorted()
            .collect()
    }

    fn transitions(&self, s: &Discrete, a: &Discrete) -> Vec<(Discrete, f64)> {
        self.transitions
            .get(&(*s, *a))
            .map(|ts| ts.iter().map(|t| (t.next_state, t.probability)).collect())
            .unwrap_or_default()
    }

    fn reward(&self, s: &Discrete, a: &Discrete, next: &Discrete) -> f64 {
        self.transitions
            .get(&(*s, *a))
            .and_then(|ts| ts.iter().find(|t| t.next_state == *next))
            .map_or(0., |t| t.reward)
    }

    fn is_terminal(&self, s: &Discrete) -> bool {
        *s == HOLE
    }
}
