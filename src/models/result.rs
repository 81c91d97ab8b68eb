//! Simulation result models.

use serde::{Deserialize, Serialize};

use super::{Algorithm, ExecutionTrace, ProcessDescriptor};
use crate::scheduler::ScheduleMetrics;

/// Per-process timing outcome.
///
/// Serialized as the descriptor fields augmented with
/// `completionTime`, `turnaroundTime`, `waitingTime` and `responseTime`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// Process identifier.
    pub pid: String,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// Static priority.
    pub priority: i32,
    /// End of the last segment.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `first_start - arrival_time`.
    pub response_time: i64,
}

impl ProcessResult {
    /// Derives the timing outcome from a process and its trace endpoints.
    pub fn new(process: &ProcessDescriptor, first_start: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            pid: process.pid.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: first_start - process.arrival_time,
        }
    }

    /// The descriptor this result was computed for.
    pub fn descriptor(&self) -> ProcessDescriptor {
        ProcessDescriptor::new(self.pid.clone(), self.arrival_time, self.burst_time)
            .with_priority(self.priority)
    }
}

/// Everything one simulation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Simulated discipline.
    pub algorithm: Algorithm,
    /// Quantum used (Round Robin only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
    /// Per-process outcomes, in request order.
    pub processes: Vec<ProcessResult>,
    /// Exact CPU timeline.
    pub trace: ExecutionTrace,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Aggregate schedule metrics.
    pub metrics: ScheduleMetrics,
}

impl SimulationResult {
    /// Finds the outcome for a process.
    pub fn process(&self, pid: &str) -> Option<&ProcessResult> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Completion times in request order.
    pub fn completion_times(&self) -> Vec<i64> {
        self.processes.iter().map(|p| p.completion_time).collect()
    }

    /// Turnaround times in request order.
    pub fn turnaround_times(&self) -> Vec<i64> {
        self.processes.iter().map(|p| p.turnaround_time).collect()
    }

    /// Waiting times in request order.
    pub fn waiting_times(&self) -> Vec<i64> {
        self.processes.iter().map(|p| p.waiting_time).collect()
    }

    /// Consumes the result, keeping only the per-process outcomes.
    pub fn into_processes(self) -> Vec<ProcessResult> {
        self.processes
    }
}
