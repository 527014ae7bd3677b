pub mod config;
pub mod error;
pub mod mdps;

#[cfg(test)]
mod envs;

pub use config::*;
pub use error::*;
pub use mdps::{mdp::*, mdp_solver::*, mdp_solver_policy::*, solvers::*, tabular::*};
