//! Deterministic CPU scheduling simulator.
//!
//! Given a batch of processes (pid, arrival, burst, priority) and a
//! dispatching discipline, computes each process's completion, turnaround
//! and waiting time together with the exact single-CPU execution trace.
//!
//! # Modules
//!
//! - **`models`**: Data types — `ProcessDescriptor`, `SimulationRequest`,
//!   `ExecutionTrace`, `ProcessResult`, `SimulationResult`
//! - **`validation`**: Request checks (empty input, duplicate pids, bad bursts, quanta, limits)
//! - **`dispatching`**: Dispatching rules, `RuleEngine`, ready queues and `Policy`
//! - **`scheduler`**: Trace builder, trace verification, metrics and the `Simulator`
//! - **`workload`**: Demo data sets and a random workload generator
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::ProcessDescriptor;
//! use cpu_sched::scheduler::Simulator;
//!
//! let processes = vec![
//!     ProcessDescriptor::new("P1", 0, 4),
//!     ProcessDescriptor::new("P2", 1, 5),
//!     ProcessDescriptor::new("P3", 2, 2),
//! ];
//! let result = Simulator::new().round_robin(processes, 2).unwrap();
//! assert_eq!(result.completion_times(), vec![8, 11, 6]);
//! assert_eq!(result.trace.segment_count(), 6);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use config::SimulatorConfig;
pub use error::SimulationError;
pub use scheduler::Simulator;
