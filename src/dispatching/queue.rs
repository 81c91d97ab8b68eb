//! Ready queues: the per-discipline selection policy.
//!
//! The trace builder owns the clock and the arrival stream; a ready queue
//! only decides which admitted process runs next and how long it may hold
//! the CPU before it is handed back.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::Debug;

use super::{RankKey, RuleEngine, SchedulingContext};
use crate::models::ProcessDescriptor;

/// Selection policy consulted at every scheduling point.
///
/// Processes are identified by their index in the request.
pub trait ReadyQueue: Debug {
    /// Policy name for logging.
    fn name(&self) -> &'static str;

    /// A process became ready (arrived).
    fn admit(&mut self, index: usize, process: &ProcessDescriptor, context: &SchedulingContext);

    /// Removes and returns the process that gets the CPU next.
    fn pick(&mut self, context: &SchedulingContext) -> Option<usize>;

    /// How long the picked process may run, given its remaining burst.
    fn time_slice(&self, remaining: i64) -> i64;

    /// A preempted process goes back to the queue.
    fn requeue(&mut self, index: usize, process: &ProcessDescriptor, context: &SchedulingContext);

    /// Number of waiting processes.
    fn len(&self) -> usize;

    /// Whether no process is waiting.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Non-preemptive queue ordered by a rule engine.
///
/// Rank keys are computed on admission; the smallest key is picked and
/// runs its whole remaining burst.
#[derive(Debug, Clone)]
pub struct RuleQueue {
    name: &'static str,
    engine: RuleEngine,
    heap: BinaryHeap<Reverse<RankKey>>,
}

impl RuleQueue {
    /// Creates a queue ordered by `engine`.
    pub fn new(name: &'static str, engine: RuleEngine) -> Self {
        Self {
            name,
            engine,
            heap: BinaryHeap::new(),
        }
    }

    /// The ordering engine.
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }
}

impl ReadyQueue for RuleQueue {
    fn name(&self) -> &'static str {
        self.name
    }

    fn admit(&mut self, index: usize, process: &ProcessDescriptor, context: &SchedulingContext) {
        self.heap
            .push(Reverse(self.engine.rank_key(process, index, context)));
    }

    fn pick(&mut self, _context: &SchedulingContext) -> Option<usize> {
        self.heap.pop().map(|Reverse(key)| key.index)
    }

    fn time_slice(&self, remaining: i64) -> i64 {
        remaining
    }

    fn requeue(&mut self, index: usize, process: &ProcessDescriptor, context: &SchedulingContext) {
        self.admit(index, process, context);
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Preemptive FIFO queue with a fixed time quantum.
#[derive(Debug, Clone)]
pub struct RoundRobinQueue {
    quantum: i64,
    queue: VecDeque<usize>,
}

impl RoundRobinQueue {
    /// Creates a queue with the given quantum. The quantum must be positive.
    pub fn new(quantum: i64) -> Self {
        Self {
            quantum,
            queue: VecDeque::new(),
        }
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl ReadyQueue for RoundRobinQueue {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn admit(&mut self, index: usize, _process: &ProcessDescriptor, _context: &SchedulingContext) {
        self.queue.push_back(index);
    }

    fn pick(&mut self, _context: &SchedulingContext) -> Option<usize> {
        self.queue.pop_front()
    }

    fn time_slice(&self, remaining: i64) -> i64 {
        remaining.min(self.quantum)
    }

    fn requeue(&mut self, index: usize, _process: &ProcessDescriptor, _context: &SchedulingContext) {
        self.queue.push_back(index);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
