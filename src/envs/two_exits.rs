use crate::mdps::mdp::Mdp;

/// One decision state `A` with two ways into the terminal state `T`.
pub struct TwoExits {
    left: f64,
    right: f64,
}

impl TwoExits {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }
}

impl Mdp for TwoExits {
    type State = &'static str;
    type Action = &'static str;

    fn states(&self) -> Vec<&'static str> {
        vec!["A", "T"]
    }

    fn actions(&self, s: &&'static str) -> Vec<&'static str> {
        match *s {
            "A" => vec!["left", "right"],
            _ => vec![],
        }
    }

    fn transitions(&self, _s: &&'static str, _a: &&'static str) -> Vec<(&'static str, f64)> {
        vec![("T", 1.)]
    }

    fn reward(&self, _s: &&'static str, a: &&'static str, _next: &&'static str) -> f64 {
        match *a {
            "left" => self.left,
            _ => self.right,
        }
    }

    fn is_terminal(&self, s: &&'static str) -> bool {
        *s == "T"
    }
}
