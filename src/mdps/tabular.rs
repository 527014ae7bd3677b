//! A data-driven MDP: states, terminal states and per-(state, action)
//! outcome tables, loadable from JSON.

use super::mdp::Mdp;
use crate::error::MdpError;
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub next: String,
    pub probability: f64,
    pub reward: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionDef {
    pub state: String,
    pub action: String,
    pub outcomes: Vec<Outcome>,
}

/// Wire format of a [`TabularMdp`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabularMdpDef {
    pub states: Vec<String>,
    #[serde(default)]
    pub terminals: Vec<String>,
    #[serde(default)]
    pub transitions: Vec<TransitionDef>,
}

/// States are enumerated in declaration order, followed by any state first
/// mentioned by a terminal or a transition. Actions keep first-mention order.
#[derive(Debug, Clone, Default)]
pub struct TabularMdp {
    states: IndexSet<String>,
    terminals: IndexSet<String>,
    model: IndexMap<String, IndexMap<String, Vec<Outcome>>>,
}

impl TabularMdp {
    pub fn new<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            states: states.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, MdpError> {
        let def: TabularMdpDef = serde_json::from_str(json)?;
        Self::try_from(def)
    }

    pub fn with_terminal(mut self, s: impl Into<String>) -> Self {
        let s = s.into();
        self.states.insert(s.clone());
        self.terminals.insert(s);
        self
    }

    pub fn with_transition(
        mut self,
        s: impl Into<String>,
        a: impl Into<String>,
        next: impl Into<String>,
        probability: f64,
        reward: f64,
    ) -> Self {
        self.add_outcome(
            s.into(),
            a.into(),
            Outcome {
                next: next.into(),
                probability,
                reward,
            },
        );
        self
    }

    /// Repeated `next` outcomes are folded into one, summing probabilities
    /// and weighting rewards by probability, so Q-values are unchanged.
    fn add_outcome(&mut self, s: String, a: String, outcome: Outcome) {
        self.states.insert(s.clone());
        self.states.insert(outcome.next.clone());

        let outcomes = self.model.entry(s).or_default().entry(a).or_default();
        match outcomes.iter_mut().find(|o| o.next == outcome.next) {
            Some(o) => {
                let p = o.probability + outcome.probability;
                if p != 0. {
                    o.reward =
                        (o.probability * o.reward + outcome.probability * outcome.reward) / p;
                }
                o.probability = p;
            }
            None => outcomes.push(outcome),
        }
    }

    pub fn outcomes(&self, s: &str, a: &str) -> &[Outcome] {
        self.model
            .get(s)
            .and_then(|acts| acts.get(a))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl TryFrom<TabularMdpDef> for TabularMdp {
    type Error = MdpError;

    fn try_from(def: TabularMdpDef) -> Result<Self, Self::Error> {
        if let Some(dup) = def.states.iter().duplicates().next() {
            return Err(MdpError::DuplicateState(dup.clone()));
        }

        let mut mdp = def
            .terminals
            .into_iter()
            .fold(TabularMdp::new(def.states), |mdp, t| mdp.with_terminal(t));
        for t in def.transitions {
            mdp.states.insert(t.state.clone());
            // An action declared with no outcomes is still legal.
            mdp.model
                .entry(t.state.clone())
                .or_default()
                .entry(t.action.clone())
                .or_default();
            for o in t.outcomes {
                mdp.add_outcome(t.state.clone(), t.action.clone(), o);
            }
        }

        Ok(mdp)
    }
}

impl Mdp for TabularMdp {
    type State = String;
    type Action = String;

    fn states(&self) -> Vec<String> {
        self.states.iter().cloned().collect()
    }

    fn actions(&self, s: &String) -> Vec<String> {
        self.model
            .get(s)
            .map(|acts| acts.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn transitions(&self, s: &String, a: &String) -> Vec<(String, f64)> {
        self.outcomes(s, a)
            .iter()
            .map(|o| (o.next.clone(), o.probability))
            .collect()
    }

    fn reward(&self, s: &String, a: &String, next: &String) -> f64 {
        self.outcomes(s, a)
            .iter()
            .find(|o| o.next == *next)
            .map_or(0., |o| o.reward)
    }

    fn is_terminal(&self, s: &String) -> bool {
        self.terminals.contains(s)
    }
}
