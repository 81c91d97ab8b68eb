//! Trace invariant verification.
//!
//! Checks a generated trace against the processes it was built from:
//! - every segment is non-empty and names a known process
//! - segments are ordered and never overlap (single CPU)
//! - no segment starts before its process arrives
//! - each process receives exactly its burst time
//!
//! A violation on a trace produced by the built-in policies is a defect.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::models::{ExecutionTrace, ProcessDescriptor};

/// A broken trace invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related process ID.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of trace violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationType {
    /// Segment with `end <= start`.
    EmptySegment,
    /// Segment for a pid not in the request.
    UnknownProcess,
    /// Segment starts before the previous one ends.
    Overlap,
    /// Segment starts before its process arrives.
    EarlyStart,
    /// Total segment time differs from the burst time.
    BurstMismatch,
    /// Process never got the CPU.
    Unscheduled,
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ({}): {}", self.violation_type, self.entity_id, self.message)
    }
}

/// Verifies a trace against its processes.
///
/// # Returns
/// All detected violations; empty if the trace is sound.
pub fn verify_trace(trace: &ExecutionTrace, processes: &[ProcessDescriptor]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let by_pid: HashMap<&str, &ProcessDescriptor> =
        processes.iter().map(|p| (p.pid.as_str(), p)).collect();

    let mut previous_end: Option<i64> = None;
    for s in trace.segments() {
        if s.end <= s.start {
            violations.push(Violation::new(
                ViolationType::EmptySegment,
                &s.pid,
                format!("Segment [{}, {}) is empty", s.start, s.end),
            ));
        }

        if let Some(prev) = previous_end {
            if s.start < prev {
                violations.push(Violation::new(
                    ViolationType::Overlap,
                    &s.pid,
                    format!("Segment starts at {} before the CPU is free at {prev}", s.start),
                ));
            }
        }
        previous_end = Some(previous_end.map_or(s.end, |prev| prev.max(s.end)));

        match by_pid.get(s.pid.as_str()) {
            None => violations.push(Violation::new(
                ViolationType::UnknownProcess,
                &s.pid,
                "Segment for a process not in the request",
            )),
            Some(p) if s.start < p.arrival_time => violations.push(Violation::new(
                ViolationType::EarlyStart,
                &s.pid,
                format!("Runs at {} before arriving at {}", s.start, p.arrival_time),
            )),
            Some(_) => {}
        }
    }

    let service = trace.service_by_process();
    for p in processes {
        match service.get(p.pid.as_str()) {
            None => violations.push(Violation::new(
                ViolationType::Unscheduled,
                &p.pid,
                "Process never ran",
            )),
            Some(&total) if total != p.burst_time => violations.push(Violation::new(
                ViolationType::BurstMismatch,
                &p.pid,
                format!("Ran for {total}, burst is {}", p.burst_time),
            )),
            Some(_) => {}
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSegment;

    fn processes() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new("P1", 0, 4),
            ProcessDescriptor::new("P2", 1, 2),
        ]
    }

    fn types(trace: Vec<ExecutionSegment>) -> Vec<ViolationType> {
        verify_trace(&ExecutionTrace::from_segments(trace), &processes())
            .into_iter()
            .map(|v| v.violation_type)
            .collect()
    }

    #[test]
    fn test_sound_trace() {
        let t = vec![
            ExecutionSegment::new("P1", 0, 2),
            ExecutionSegment::new("P2", 2, 4),
            ExecutionSegment::new("P1", 4, 6),
        ];
        assert!(types(t).is_empty());
    }

    #[test]
    fn test_overlap() {
        let t = vec![
            ExecutionSegment::new("P1", 0, 4),
            ExecutionSegment::new("P2", 3, 5),
        ];
        assert_eq!(types(t), vec![ViolationType::Overlap]);
    }

    #[test]
    fn test_early_start() {
        let t = vec![
            ExecutionSegment::new("P2", 0, 2),
            ExecutionSegment::new("P1", 2, 6),
        ];
        assert_eq!(types(t), vec![ViolationType::EarlyStart]);
    }

    #[test]
    fn test_burst_mismatch_and_unscheduled() {
        let t = vec![ExecutionSegment::new("P1", 0, 3)];
        assert_eq!(
            types(t),
            vec![ViolationType::BurstMismatch, ViolationType::Unscheduled]
        );
    }

    #[test]
    fn test_unknown_and_empty_segment() {
        let t = vec![
            ExecutionSegment::new("P1", 0, 4),
            ExecutionSegment::new("P2", 4, 6),
            ExecutionSegment::new("ghost", 6, 6),
        ];
        assert_eq!(
            types(t),
            vec![ViolationType::EmptySegment, ViolationType::UnknownProcess]
        );
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::new(ViolationType::Overlap, "P1", "overlaps");
        assert_eq!(v.to_string(), "Overlap (P1): overlaps");
    }
}
