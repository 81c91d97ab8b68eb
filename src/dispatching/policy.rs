//! Dispatching policy selection.
//!
//! One tagged variant per supported discipline, resolved once per request
//! into the ready queue that drives the trace builder.

use super::{ReadyQueue, RoundRobinQueue, RuleEngine, RuleQueue};
use crate::models::{Algorithm, SimulationRequest};
use crate::validation::{ValidationError, ValidationErrorKind};

/// A fully-parameterized dispatching discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Static priority (non-preemptive, lower value first).
    Priority,
    /// Round Robin with a positive quantum.
    RoundRobin {
        /// Maximum contiguous slice.
        quantum: i64,
    },
}

impl Policy {
    /// Resolves the policy of a request.
    ///
    /// Fails if Round Robin lacks a positive quantum.
    pub fn from_request(request: &SimulationRequest) -> Result<Self, ValidationError> {
        match request.algorithm {
            Algorithm::Fcfs => Ok(Self::Fcfs),
            Algorithm::Sjf => Ok(Self::Sjf),
            Algorithm::Priority => Ok(Self::Priority),
            Algorithm::RoundRobin => match request.quantum {
                Some(quantum) if quantum > 0 => Ok(Self::RoundRobin { quantum }),
                Some(quantum) => Err(ValidationError::new(
                    ValidationErrorKind::InvalidQuantum,
                    format!("Quantum must be positive, got {quantum}"),
                )),
                None => Err(ValidationError::new(
                    ValidationErrorKind::MissingQuantum,
                    "Round Robin requires a quantum",
                )),
            },
        }
    }

    /// The discipline this policy implements.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Fcfs => Algorithm::Fcfs,
            Self::Sjf => Algorithm::Sjf,
            Self::Priority => Algorithm::Priority,
            Self::RoundRobin { .. } => Algorithm::RoundRobin,
        }
    }

    /// Quantum, for Round Robin.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }

    /// Ordering engine of a non-preemptive policy.
    pub fn rule_engine(&self) -> Option<RuleEngine> {
        match self {
            Self::Fcfs => Some(RuleEngine::fcfs()),
            Self::Sjf => Some(RuleEngine::sjf()),
            Self::Priority => Some(RuleEngine::priority()),
            Self::RoundRobin { .. } => None,
        }
    }

    /// Creates an empty ready queue implementing this policy.
    pub fn ready_queue(&self) -> Box<dyn ReadyQueue> {
        match self {
            Self::Fcfs => Box::new(RuleQueue::new("FCFS", RuleEngine::fcfs())),
            Self::Sjf => Box::new(RuleQueue::new("SJF", RuleEngine::sjf())),
            Self::Priority => Box::new(RuleQueue::new("PRIORITY", RuleEngine::priority())),
            Self::RoundRobin { quantum } => Box::new(RoundRobinQueue::new(*quantum)),
        }
    }
}
