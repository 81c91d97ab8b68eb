//! Dispatching rules, rule engine and ready queues.
//!
//! A dispatching discipline is expressed as a [`ReadyQueue`]: the trace
//! builder admits arriving processes into it and asks it which process
//! runs next and for how long. Non-preemptive disciplines (FCFS, SJF,
//! Priority) are rule queues ordered by a [`RuleEngine`]; Round Robin is
//! a FIFO queue with a quantum.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{rules, RuleEngine, SchedulingContext};
//! use cpu_sched::models::ProcessDescriptor;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fifo);
//!
//! let ready = vec![
//!     ProcessDescriptor::new("P1", 0, 8),
//!     ProcessDescriptor::new("P2", 1, 4),
//! ];
//! let ctx = SchedulingContext::at_time(1);
//! assert_eq!(engine.select_best(&ready, &ctx), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
mod policy;
mod queue;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RankKey, RuleEngine};
pub use policy::Policy;
pub use queue::{ReadyQueue, RoundRobinQueue, RuleQueue};

use crate::models::ProcessDescriptor;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Integer so that
/// ties are exact and tie-breaking is deterministic.
pub type RuleScore = i64;

/// A dispatching rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = dispatched first.** Rules should return smaller values
/// for processes that should get the CPU earlier.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates a process given the current scheduling context.
    ///
    /// Returns a score where lower = dispatched first.
    fn evaluate(&self, process: &ProcessDescriptor, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
