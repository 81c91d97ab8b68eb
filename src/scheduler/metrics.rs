//! Per-process timing and schedule quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | End of the process's last segment |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | Makespan | Latest segment end |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//! | Context Switches | Adjacent segments with different pids |
//!
//! Averages are arithmetic means; no rounding is applied.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::verify::{Violation, ViolationType};
use crate::models::{ExecutionTrace, ProcessDescriptor, ProcessResult};

/// Derives per-process results from a trace, in request order.
///
/// Fails if some process has no segment in the trace.
pub fn process_results(
    processes: &[ProcessDescriptor],
    trace: &ExecutionTrace,
) -> Result<Vec<ProcessResult>, Violation> {
    // pid → (first start, completion)
    let mut spans: HashMap<&str, (i64, i64)> = HashMap::new();
    for s in trace.segments() {
        spans
            .entry(s.pid.as_str())
            .and_modify(|(first, last)| {
                *first = (*first).min(s.start);
                *last = (*last).max(s.end);
            })
            .or_insert((s.start, s.end));
    }

    processes
        .iter()
        .map(|p| {
            spans
                .get(p.pid.as_str())
                .map(|&(first, completion)| ProcessResult::new(p, first, completion))
                .ok_or_else(|| {
                    Violation::new(ViolationType::Unscheduled, &p.pid, "Process never ran")
                })
        })
        .collect()
}

/// Mean waiting time.
pub fn average_waiting_time(results: &[ProcessResult]) -> f64 {
    mean(results.iter().map(|r| r.waiting_time), results.len())
}

/// Mean turnaround time.
pub fn average_turnaround_time(results: &[ProcessResult]) -> f64 {
    mean(results.iter().map(|r| r.turnaround_time), results.len())
}

fn mean(values: impl Iterator<Item = i64>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.map(|v| v as f64).sum::<f64>() / count as f64
}

/// Aggregate schedule metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetrics {
    /// Latest completion time.
    pub makespan: i64,
    /// Time the CPU ran some process.
    pub busy_time: i64,
    /// Idle time within `[0, makespan)`.
    pub idle_time: i64,
    /// busy / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean response time.
    pub average_response_time: f64,
    /// Longest single waiting time.
    pub max_waiting_time: i64,
    /// Switches between different processes.
    pub context_switches: usize,
    /// Number of trace segments.
    pub segment_count: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from per-process results and their trace.
    pub fn calculate(results: &[ProcessResult], trace: &ExecutionTrace) -> Self {
        let makespan = trace.makespan();
        let busy_time = trace.busy_time();

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                results.len() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            makespan,
            busy_time,
            idle_time: trace.idle_time(),
            cpu_utilization,
            throughput,
            average_response_time: mean(results.iter().map(|r| r.response_time), results.len()),
            max_waiting_time: results.iter().map(|r| r.waiting_time).max().unwrap_or(0),
            context_switches: trace.context_switches(),
            segment_count: trace.segment_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSegment;

    fn rr_case() -> (Vec<ProcessDescriptor>, ExecutionTrace) {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 4),
            ProcessDescriptor::new("P2", 1, 5),
            ProcessDescriptor::new("P3", 2, 2),
        ];
        let trace = ExecutionTrace::from_segments(vec![
            ExecutionSegment::new("P1", 0, 2),
            ExecutionSegment::new("P2", 2, 4),
            ExecutionSegment::new("P3", 4, 6),
            ExecutionSegment::new("P1", 6, 8),
            ExecutionSegment::new("P2", 8, 10),
            ExecutionSegment::new("P2", 10, 11),
        ]);
        (processes, trace)
    }

    #[test]
    fn test_process_results_from_trace() {
        let (processes, trace) = rr_case();
        let results = process_results(&processes, &trace).unwrap();

        let completion: Vec<i64> = results.iter().map(|r| r.completion_time).collect();
        let turnaround: Vec<i64> = results.iter().map(|r| r.turnaround_time).collect();
        let waiting: Vec<i64> = results.iter().map(|r| r.waiting_time).collect();
        let response: Vec<i64> = results.iter().map(|r| r.response_time).collect();
        assert_eq!(completion, vec![8, 11, 6]);
        assert_eq!(turnaround, vec![8, 10, 4]);
        assert_eq!(waiting, vec![4, 5, 2]);
        assert_eq!(response, vec![0, 1, 2]);
    }

    #[test]
    fn test_averages() {
        let (processes, trace) = rr_case();
        let results = process_results(&processes, &trace).unwrap();
        assert!((average_waiting_time(&results) - 11.0 / 3.0).abs() < 1e-10);
        assert!((average_turnaround_time(&results) - 22.0 / 3.0).abs() < 1e-10);
        assert_eq!(average_waiting_time(&[]), 0.0);
    }

    #[test]
    fn test_unscheduled_process() {
        let (mut processes, trace) = rr_case();
        processes.push(ProcessDescriptor::new("P4", 0, 1));
        let err = process_results(&processes, &trace).unwrap_err();
        assert_eq!(err.violation_type, ViolationType::Unscheduled);
        assert_eq!(err.entity_id, "P4");
    }

    #[test]
    fn test_schedule_metrics() {
        let (processes, trace) = rr_case();
        let results = process_results(&processes, &trace).unwrap();
        let m = ScheduleMetrics::calculate(&results, &trace);
        assert_eq!(m.makespan, 11);
        assert_eq!(m.busy_time, 11);
        assert_eq!(m.idle_time, 0);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((m.throughput - 3.0 / 11.0).abs() < 1e-10);
        assert!((m.average_response_time - 1.0).abs() < 1e-10);
        assert_eq!(m.max_waiting_time, 5);
        assert_eq!(m.context_switches, 4);
        assert_eq!(m.segment_count, 6);
    }

    #[test]
    fn test_metrics_with_idle() {
        let processes = vec![
            ProcessDescriptor::new("P1", 2, 2),
            ProcessDescriptor::new("P2", 6, 2),
        ];
        let trace = ExecutionTrace::from_segments(vec![
            ExecutionSegment::new("P1", 2, 4),
            ExecutionSegment::new("P2", 6, 8),
        ]);
        let results = process_results(&processes, &trace).unwrap();
        let m = ScheduleMetrics::calculate(&results, &trace);
        assert_eq!(m.idle_time, 4);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = ScheduleMetrics::calculate(&[], &ExecutionTrace::new());
        assert_eq!(m.makespan, 0);
        assert_eq!(m.cpu_utilization, 0.0);
        assert_eq!(m.max_waiting_time, 0);
    }
}
