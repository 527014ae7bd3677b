use super::mdp::Mdp;

/// Read side of a solved MDP.
pub trait MdpSolver<M: Mdp> {
    fn v_star(&self, s: &M::State) -> f64;

    fn q_star(&self, s: &M::State, a: &M::Action) -> f64;

    fn pi_star(&self, s: &M::State) -> Option<M::Action>;
}
