//! Process descriptor model.
//!
//! A process is the unit of work submitted to the simulator: it becomes
//! eligible at its arrival time and needs `burst_time` units of CPU.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// Immutable once submitted. Serialized with the camelCase field names
/// used on the wire (`pid`, `arrivalTime`, `burstTime`, `priority`).
///
/// # Time Representation
/// All times are integer clock ticks relative to the simulation start (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDescriptor {
    /// Process identifier, unique within a request.
    pub pid: String,
    /// Clock value at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time the process needs.
    pub burst_time: i64,
    /// Static priority (lower = more important).
    #[serde(default)]
    pub priority: i32,
}

impl ProcessDescriptor {
    /// Creates a process with priority 0.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the static priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Earliest possible completion time (arrival + burst).
    #[inline]
    pub fn earliest_completion(&self) -> i64 {
        self.arrival_time + self.burst_time
    }
}
