use super::{mdp::Mdp, mdp_solver::*};
use std::sync::Arc;

pub trait Policy<S, A> {
    fn policy(&self, s: &S) -> Option<A>;
}

/// Acts greedily with respect to whatever the wrapped solver has computed.
pub struct MdpSolverPolicy<M: Mdp> {
    pub mdp_solver: Arc<dyn MdpSolver<M>>,
}

impl<M: Mdp> Policy<M::State, M::Action> for MdpSolverPolicy<M> {
    fn policy(&self, s: &M::State) -> Option<M::Action> {
        self.mdp_solver.pi_star(s)
    }
}
