pub mod mdp;
pub mod mdp_solver;
pub mod mdp_solver_policy;
pub mod solvers;
pub mod tabular;
