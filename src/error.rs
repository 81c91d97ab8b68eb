//! Simulation error types.

use thiserror::Error;

use crate::scheduler::Violation;
use crate::validation::ValidationError;

/// Why a simulation produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The request was rejected before the clock loop started.
    #[error("invalid simulation request: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// The generated trace broke a scheduling invariant. Indicates a defect.
    #[error("simulation invariant violated: {}", join_messages(.0))]
    InvariantViolation(Vec<Violation>),
}

impl SimulationError {
    /// Whether the caller can fix the error by changing the request.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Validation errors, if this is a rejected request.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            Self::InvariantViolation(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn join_messages<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
