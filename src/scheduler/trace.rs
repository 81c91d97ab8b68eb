//! Execution trace builder (simulation clock driver).
//!
//! # Algorithm
//!
//! 1. Sort arrivals by (arrival time, input index).
//! 2. Admit every process with `arrival <= clock` into the ready queue.
//! 3. If the queue is empty, jump the clock to the next arrival (idle gap).
//! 4. Pick a process, run it for the queue's time slice, emit a segment.
//! 5. Admit arrivals up to the new clock *before* requeueing the process
//!    that just ran, then requeue it if it still has work left.
//!
//! Every non-idle step strictly decreases the total remaining burst and
//! every idle step jumps to a pending arrival, so the loop terminates.
//!
//! # Complexity
//! O(n log n + s log n) with a rule queue, O(n log n + s) with Round Robin,
//! where s is the number of emitted segments.

use tracing::{debug, trace};

use crate::dispatching::{ReadyQueue, SchedulingContext};
use crate::models::{ExecutionSegment, ExecutionTrace, ProcessDescriptor};

/// Drives one simulation over a fixed set of processes.
///
/// Expects validated input: unique pids, `arrival >= 0`, `burst > 0`.
#[derive(Debug, Clone, Copy)]
pub struct TraceBuilder<'a> {
    processes: &'a [ProcessDescriptor],
}

impl<'a> TraceBuilder<'a> {
    /// Creates a builder over `processes` (request order).
    pub fn new(processes: &'a [ProcessDescriptor]) -> Self {
        Self { processes }
    }

    /// Runs the clock loop with `queue` as the selection policy.
    pub fn run(&self, queue: &mut dyn ReadyQueue) -> ExecutionTrace {
        let processes = self.processes;

        let mut arrivals: Vec<usize> = (0..processes.len()).collect();
        arrivals.sort_by_key(|&i| (processes[i].arrival_time, i));

        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst_time).collect();
        let mut ctx = SchedulingContext::at_time(0);
        let mut cursor = 0;
        let mut trace = ExecutionTrace::new();

        loop {
            self.admit_arrivals(&arrivals, &mut cursor, queue, &ctx);

            if queue.is_empty() {
                match arrivals.get(cursor) {
                    Some(&next) => {
                        let wake = processes[next].arrival_time;
                        debug!(from = ctx.current_time, to = wake, "cpu idle");
                        ctx.advance_to(wake);
                        continue;
                    }
                    None => break,
                }
            }

            let Some(index) = queue.pick(&ctx) else {
                break;
            };

            // A slice is at least one tick and never exceeds the remaining burst.
            let run = queue
                .time_slice(remaining[index])
                .clamp(1, remaining[index].max(1));
            let start = ctx.current_time;
            let end = start + run;
            let process = &processes[index];

            trace!(pid = %process.pid, start, end, policy = queue.name(), "segment");
            trace.push(ExecutionSegment::new(process.pid.clone(), start, end));

            ctx.advance_to(end);
            remaining[index] -= run;

            self.admit_arrivals(&arrivals, &mut cursor, queue, &ctx);

            if remaining[index] > 0 {
                queue.requeue(index, process, &ctx);
            } else {
                trace!(pid = %process.pid, completion = end, "process completed");
            }
        }

        trace
    }

    /// Admits, in arrival order, every pending process with `arrival <= clock`.
    fn admit_arrivals(
        &self,
        arrivals: &[usize],
        cursor: &mut usize,
        queue: &mut dyn ReadyQueue,
        ctx: &SchedulingContext,
    ) {
        while let Some(&index) = arrivals.get(*cursor) {
            let process = &self.processes[index];
            if process.arrival_time > ctx.current_time {
                break;
            }
            queue.admit(index, process, ctx);
            *cursor += 1;
        }
    }
}
