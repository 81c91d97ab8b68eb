//! Simulation engine: trace builder, verification and metrics.
//!
//! # Pipeline
//!
//! `Simulator` validates a request, drives a `TraceBuilder` with the
//! request's ready queue, verifies the resulting trace, and derives
//! per-process results plus `ScheduleMetrics`.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod metrics;
mod simulator;
mod trace;
mod verify;

pub use metrics::{
    average_turnaround_time, average_waiting_time, process_results, ScheduleMetrics,
};
pub use simulator::Simulator;
pub use trace::TraceBuilder;
pub use verify::{verify_trace, Violation, ViolationType};
