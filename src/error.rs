use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Shared `serde_json::Error`, so [`SolverError`] can stay `Clone` and
/// comparable while keeping the parser error as its source.
#[derive(Debug, Clone)]
pub struct JsonError(Arc<serde_json::Error>);

impl JsonError {
    pub fn inner(&self) -> &serde_json::Error {
        &self.0
    }
}

impl From<serde_json::Error> for JsonError {
    fn from(e: serde_json::Error) -> Self {
        Self(Arc::new(e))
    }
}

impl fmt::Display for JsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.0)
    }
}

impl PartialEq for JsonError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.to_string() == other.0.to_string()
    }
}

/// Configuration errors, all detected when a solver is constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolverError {
    #[error("discount must be in (0, 1], got {0}")]
    InvalidDiscount(f64),

    #[error("iteration budget must be a positive integer")]
    ZeroIterations,

    #[error("theta must be a positive finite number, got {0}")]
    InvalidTheta(f64),

    #[error("cyclic value iteration needs at least one state")]
    EmptyStateSpace,

    #[error("invalid solver config: {0}")]
    Config(#[from] JsonError),
}

#[derive(Debug, Error)]
pub enum MdpError {
    #[error("failed to parse MDP: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("state '{0}' is declared more than once")]
    DuplicateState(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;
