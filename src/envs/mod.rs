//! Small fixture MDPs for unit tests.

pub mod chain;
pub mod simple_golf;
pub mod two_exits;

use std::collections::HashMap;

pub type Discrete = usize;

#[derive(Debug, Clone)]
pub struct Transition {
    pub next_state: Discrete,
    pub probability: f64,
    pub reward: f64,
}

pub type Transitions = HashMap<(Discrete, Discrete), Vec<Transition>>;
