//! Input validation for simulation requests.
//!
//! Checks a request once, eagerly, before the clock loop starts. Detects:
//! - Empty process lists
//! - Empty or duplicate process IDs
//! - Negative arrival times and non-positive burst times
//! - Missing or non-positive Round Robin quanta
//! - Requests whose simulated horizon or segment count exceeds the configured bounds
//!
//! All problems are collected so the caller sees every error at once.

use std::collections::HashSet;
use thiserror::Error;

use crate::config::SimulatorConfig;
use crate::models::{ProcessDescriptor, SimulationRequest};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The request has no processes.
    EmptyInput,
    /// A process has an empty ID.
    EmptyPid,
    /// Two processes share the same ID.
    DuplicatePid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// Round Robin without a quantum.
    MissingQuantum,
    /// Round Robin with a zero or negative quantum.
    InvalidQuantum,
    /// The makespan bound would be exceeded.
    HorizonExceeded,
    /// The segment-count bound would be exceeded.
    SegmentLimitExceeded,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a simulation request against the configured limits.
///
/// Checks:
/// 1. At least one process
/// 2. Every pid is non-empty and unique
/// 3. `arrival_time >= 0` and `burst_time > 0` for every process
/// 4. Round Robin carries a positive quantum
/// 5. Horizon and segment bounds (only when 1-4 pass)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &SimulationRequest, config: &SimulatorConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if request.processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process list is empty",
        ));
    }

    let mut pids = HashSet::new();
    for (index, p) in request.processes.iter().enumerate() {
        if p.pid.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPid,
                format!("Process at position {index} has an empty pid"),
            ));
        } else if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }
    }

    if request.algorithm.requires_quantum() {
        match request.quantum {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingQuantum,
                "Round Robin requires a quantum",
            )),
            Some(q) if q <= 0 => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Quantum must be positive, got {q}"),
            )),
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        check_limits(&request.processes, request.effective_quantum(), config, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks the horizon and segment bounds.
///
/// Assumes per-process checks passed (non-negative arrivals, positive bursts,
/// positive quantum).
fn check_limits(
    processes: &[ProcessDescriptor],
    quantum: Option<i64>,
    config: &SimulatorConfig,
    errors: &mut Vec<ValidationError>,
) {
    let max_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(max_arrival, |acc, p| acc.checked_add(p.burst_time));

    match horizon {
        Some(h) if h <= config.max_horizon => {}
        Some(h) => errors.push(ValidationError::new(
            ValidationErrorKind::HorizonExceeded,
            format!(
                "Simulated horizon {h} exceeds the limit of {}",
                config.max_horizon
            ),
        )),
        None => errors.push(ValidationError::new(
            ValidationErrorKind::HorizonExceeded,
            "Simulated horizon overflows the clock",
        )),
    }

    let segments = match quantum {
        Some(q) => processes.iter().try_fold(0usize, |acc, p| {
            let slices = p.burst_time / q + i64::from(p.burst_time % q != 0);
            usize::try_from(slices).ok().and_then(|s| acc.checked_add(s))
        }),
        None => Some(processes.len()),
    };

    match segments {
        Some(n) if n <= config.max_segments => {}
        Some(n) => errors.push(ValidationError::new(
            ValidationErrorKind::SegmentLimitExceeded,
            format!(
                "Simulation would emit {n} segments, limit is {}",
                config.max_segments
            ),
        )),
        None => errors.push(ValidationError::new(
            ValidationErrorKind::SegmentLimitExceeded,
            "Segment count overflows",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Algorithm;

    fn sample_processes() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new("P1", 0, 10).with_priority(3),
            ProcessDescriptor::new("P2", 2, 5).with_priority(1),
            ProcessDescriptor::new("P3", 4, 8).with_priority(2),
        ]
    }

    fn kinds(request: &SimulationRequest) -> Vec<ValidationErrorKind> {
        validate_request(request, &SimulatorConfig::default())
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_input() {
        for algo in [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::Priority] {
            let request = SimulationRequest::new(algo, sample_processes());
            assert!(validate_request(&request, &SimulatorConfig::default()).is_ok());
        }
        let rr = SimulationRequest::round_robin(sample_processes(), 2);
        assert!(validate_request(&rr, &SimulatorConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        for algo in Algorithm::ALL {
            let mut request = SimulationRequest::new(algo, vec![]);
            if algo.requires_quantum() {
                request = request.with_quantum(2);
            }
            let errors = validate_request(&request, &SimulatorConfig::default()).unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
            assert!(errors[0].to_string().contains("empty"));
        }
    }

    #[test]
    fn test_duplicate_pid() {
        let request = SimulationRequest::new(
            Algorithm::Fcfs,
            vec![
                ProcessDescriptor::new("P1", 0, 3),
                ProcessDescriptor::new("P1", 1, 3),
            ],
        );
        assert_eq!(kinds(&request), vec![ValidationErrorKind::DuplicatePid]);
    }

    #[test]
    fn test_empty_pid() {
        let request =
            SimulationRequest::new(Algorithm::Sjf, vec![ProcessDescriptor::new("", 0, 3)]);
        assert_eq!(kinds(&request), vec![ValidationErrorKind::EmptyPid]);
    }

    #[test]
    fn test_negative_arrival() {
        let request =
            SimulationRequest::new(Algorithm::Fcfs, vec![ProcessDescriptor::new("P1", -1, 3)]);
        assert_eq!(kinds(&request), vec![ValidationErrorKind::NegativeArrival]);
    }

    #[test]
    fn test_non_positive_burst() {
        let request = SimulationRequest::new(
            Algorithm::Priority,
            vec![
                ProcessDescriptor::new("P1", 0, 0),
                ProcessDescriptor::new("P2", 0, -4),
            ],
        );
        assert_eq!(
            kinds(&request),
            vec![
                ValidationErrorKind::NonPositiveBurst,
                ValidationErrorKind::NonPositiveBurst
            ]
        );
    }

    #[test]
    fn test_round_robin_quantum() {
        let zero = SimulationRequest::round_robin(sample_processes(), 0);
        assert_eq!(kinds(&zero), vec![ValidationErrorKind::InvalidQuantum]);

        let negative = SimulationRequest::round_robin(sample_processes(), -3);
        assert_eq!(kinds(&negative), vec![ValidationErrorKind::InvalidQuantum]);

        let missing = SimulationRequest::new(Algorithm::RoundRobin, sample_processes());
        assert_eq!(kinds(&missing), vec![ValidationErrorKind::MissingQuantum]);
    }

    #[test]
    fn test_quantum_ignored_for_non_preemptive() {
        let request = SimulationRequest::new(Algorithm::Fcfs, sample_processes()).with_quantum(0);
        assert!(validate_request(&request, &SimulatorConfig::default()).is_ok());
    }

    #[test]
    fn test_horizon_limit() {
        let config = SimulatorConfig::new().with_max_horizon(20);
        let request = SimulationRequest::new(Algorithm::Fcfs, sample_processes());
        // max arrival 4 + bursts 23 = 27 > 20
        let errors = validate_request(&request, &config).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonExceeded);
    }

    #[test]
    fn test_horizon_overflow() {
        let request = SimulationRequest::new(
            Algorithm::Fcfs,
            vec![
                ProcessDescriptor::new("P1", 0, i64::MAX),
                ProcessDescriptor::new("P2", 0, i64::MAX),
            ],
        );
        assert_eq!(kinds(&request), vec![ValidationErrorKind::HorizonExceeded]);
    }

    #[test]
    fn test_segment_limit() {
        let config = SimulatorConfig::new().with_max_segments(10);
        // ceil(10/1) + ceil(5/1) + ceil(8/1) = 23 slices
        let request = SimulationRequest::round_robin(sample_processes(), 1);
        let errors = validate_request(&request, &config).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::SegmentLimitExceeded);

        // ceil(10/4) + ceil(5/4) + ceil(8/4) = 3 + 2 + 2 = 7 slices
        let coarse = SimulationRequest::round_robin(sample_processes(), 4);
        assert!(validate_request(&coarse, &config).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let request = SimulationRequest::round_robin(
            vec![
                ProcessDescriptor::new("P1", -2, 0),
                ProcessDescriptor::new("P1", 0, 4),
            ],
            0,
        );
        let errors = kinds(&request);
        assert!(errors.len() >= 4);
        assert!(errors.contains(&ValidationErrorKind::DuplicatePid));
        assert!(errors.contains(&ValidationErrorKind::InvalidQuantum));
    }
}
