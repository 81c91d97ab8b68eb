//! Simulation entry point.
//!
//! # Algorithm
//!
//! 1. Validate the request (all errors collected, nothing simulated on failure).
//! 2. Resolve the policy and its ready queue.
//! 3. Build the execution trace.
//! 4. Optionally verify trace invariants.
//! 5. Derive per-process results, averages and schedule metrics.
//!
//! The simulator holds only configuration; every call is independent.

use tracing::{debug, error, instrument, warn};

use super::metrics::{average_turnaround_time, average_waiting_time, process_results};
use super::verify::verify_trace;
use super::{ScheduleMetrics, TraceBuilder};
use crate::config::SimulatorConfig;
use crate::dispatching::Policy;
use crate::error::{Result, SimulationError};
use crate::models::{Algorithm, ProcessDescriptor, SimulationRequest, SimulationResult};
use crate::validation::validate_request;

/// Deterministic CPU scheduling simulator.
///
/// # Example
///
/// ```
/// use cpu_sched::models::ProcessDescriptor;
/// use cpu_sched::scheduler::Simulator;
///
/// let processes = vec![
///     ProcessDescriptor::new("P1", 0, 10),
///     ProcessDescriptor::new("P2", 2, 5),
///     ProcessDescriptor::new("P3", 4, 8),
/// ];
/// let result = Simulator::new().fcfs(processes).unwrap();
/// assert_eq!(result.completion_times(), vec![10, 15, 23]);
/// assert_eq!(result.waiting_times(), vec![0, 8, 11]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with the given configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Runs one simulation.
    ///
    /// Results are returned in request order, alongside the full trace.
    #[instrument(
        level = "debug",
        skip_all,
        fields(algorithm = %request.algorithm, processes = request.processes.len())
    )]
    pub fn simulate(&self, request: &SimulationRequest) -> Result<SimulationResult> {
        if let Err(errors) = validate_request(request, &self.config) {
            warn!(errors = errors.len(), "rejected simulation request");
            return Err(SimulationError::Validation(errors));
        }

        let policy =
            Policy::from_request(request).map_err(|e| SimulationError::Validation(vec![e]))?;
        if request.quantum.is_some() && policy.quantum().is_none() {
            debug!("quantum ignored for non-preemptive policy");
        }

        let mut queue = policy.ready_queue();
        let trace = TraceBuilder::new(&request.processes).run(queue.as_mut());

        if self.config.verify_trace {
            let violations = verify_trace(&trace, &request.processes);
            if !violations.is_empty() {
                error!(violations = violations.len(), "trace invariant violated");
                return Err(SimulationError::InvariantViolation(violations));
            }
        }

        let processes = process_results(&request.processes, &trace)
            .map_err(|v| SimulationError::InvariantViolation(vec![v]))?;
        let metrics = ScheduleMetrics::calculate(&processes, &trace);
        let average_waiting_time = average_waiting_time(&processes);
        let average_turnaround_time = average_turnaround_time(&processes);

        debug!(
            makespan = metrics.makespan,
            segments = metrics.segment_count,
            average_waiting_time,
            "simulation complete"
        );

        Ok(SimulationResult {
            algorithm: policy.algorithm(),
            quantum: policy.quantum(),
            processes,
            trace,
            average_waiting_time,
            average_turnaround_time,
            metrics,
        })
    }

    /// First-Come-First-Served.
    pub fn fcfs(&self, processes: Vec<ProcessDescriptor>) -> Result<SimulationResult> {
        self.simulate(&SimulationRequest::new(Algorithm::Fcfs, processes))
    }

    /// Shortest Job First (non-preemptive).
    pub fn sjf(&self, processes: Vec<ProcessDescriptor>) -> Result<SimulationResult> {
        self.simulate(&SimulationRequest::new(Algorithm::Sjf, processes))
    }

    /// Static priority (non-preemptive).
    pub fn priority(&self, processes: Vec<ProcessDescriptor>) -> Result<SimulationResult> {
        self.simulate(&SimulationRequest::new(Algorithm::Priority, processes))
    }

    /// Round Robin with the given quantum.
    pub fn round_robin(
        &self,
        processes: Vec<ProcessDescriptor>,
        quantum: i64,
    ) -> Result<SimulationResult> {
        self.simulate(&SimulationRequest::round_robin(processes, quantum))
    }
}
