//! Simulation request model.
//!
//! A request bundles the submitted processes with the dispatching
//! discipline to simulate. It is built once per invocation and consumed
//! by a single simulator run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::ProcessDescriptor;

/// Dispatching discipline.
///
/// Serialized with the short identifiers used by the scheduler endpoints
/// (`fcfs`, `sjf`, `priority`, `rr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served (non-preemptive).
    #[serde(rename = "fcfs")]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    #[serde(rename = "sjf")]
    Sjf,
    /// Static priority (non-preemptive).
    #[serde(rename = "priority")]
    Priority,
    /// Round Robin with a fixed quantum (preemptive).
    #[serde(rename = "rr", alias = "round_robin")]
    RoundRobin,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Short identifier (`fcfs`, `sjf`, `priority`, `rr`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin => "rr",
        }
    }

    /// Display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "Priority",
            Self::RoundRobin => "Round Robin",
        }
    }

    /// Whether the discipline may interrupt a running process.
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Whether the discipline needs a time quantum.
    pub const fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown algorithm identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheduling algorithm '{0}' (expected fcfs, sjf, priority or rr)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "priority" | "prio" => Ok(Self::Priority),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes in submission order.
    pub processes: Vec<ProcessDescriptor>,
    /// Dispatching discipline.
    pub algorithm: Algorithm,
    /// Time quantum. Required for Round Robin, ignored otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request without a quantum.
    pub fn new(algorithm: Algorithm, processes: Vec<ProcessDescriptor>) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Creates a Round Robin request.
    pub fn round_robin(processes: Vec<ProcessDescriptor>, quantum: i64) -> Self {
        Self::new(Algorithm::RoundRobin, processes).with_quantum(quantum)
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Appends a process.
    pub fn with_process(mut self, process: ProcessDescriptor) -> Self {
        self.processes.push(process);
        self
    }

    /// Quantum that applies to this request's algorithm.
    pub fn effective_quantum(&self) -> Option<i64> {
        if self.algorithm.requires_quantum() {
            self.quantum
        } else {
            None
        }
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
