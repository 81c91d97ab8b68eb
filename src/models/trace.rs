//! Execution trace model.
//!
//! A trace is the ordered list of CPU segments produced by one simulation.
//! Idle time is never stored; it is the gap between consecutive segments.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3 (Gantt charts)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A contiguous interval `[start, end)` during which one process holds the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Process holding the CPU.
    pub pid: String,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl ExecutionSegment {
    /// Creates a new segment.
    pub fn new(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            pid: pid.into(),
            start,
            end,
        }
    }

    /// Segment length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two segments share any instant.
    #[inline]
    pub fn overlaps(&self, other: &ExecutionSegment) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One block of a rendered timeline: either a segment or an idle gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TimelineBlock {
    /// CPU held by `pid`.
    Run {
        /// Running process.
        pid: String,
        /// Start time.
        start: i64,
        /// End time.
        end: i64,
    },
    /// CPU idle.
    Idle {
        /// Start time.
        start: i64,
        /// End time.
        end: i64,
    },
}

impl TimelineBlock {
    /// Block length.
    pub fn duration(&self) -> i64 {
        match self {
            Self::Run { start, end, .. } | Self::Idle { start, end } => end - start,
        }
    }
}

/// The full CPU trace of a simulation, ordered by start time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionTrace {
    segments: Vec<ExecutionSegment>,
}

impl ExecutionTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trace from already-ordered segments.
    pub fn from_segments(segments: Vec<ExecutionSegment>) -> Self {
        Self { segments }
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: ExecutionSegment) {
        self.segments.push(segment);
    }

    /// All segments in emission order.
    pub fn segments(&self) -> &[ExecutionSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the trace has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Makespan: latest segment end.
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end).max().unwrap_or(0)
    }

    /// Segments belonging to one process.
    pub fn segments_for(&self, pid: &str) -> Vec<&ExecutionSegment> {
        self.segments.iter().filter(|s| s.pid == pid).collect()
    }

    /// Completion time of a process (end of its last segment).
    pub fn completion_time(&self, pid: &str) -> Option<i64> {
        self.segments
            .iter()
            .filter(|s| s.pid == pid)
            .map(|s| s.end)
            .max()
    }

    /// First time a process got the CPU.
    pub fn first_start(&self, pid: &str) -> Option<i64> {
        self.segments
            .iter()
            .filter(|s| s.pid == pid)
            .map(|s| s.start)
            .min()
    }

    /// Total CPU time per process.
    pub fn service_by_process(&self) -> HashMap<&str, i64> {
        let mut service: HashMap<&str, i64> = HashMap::new();
        for s in &self.segments {
            *service.entry(s.pid.as_str()).or_insert(0) += s.duration();
        }
        service
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Total idle time within `[0, makespan)`.
    pub fn idle_time(&self) -> i64 {
        self.idle_gaps().iter().map(|(start, end)| end - start).sum()
    }

    /// Idle intervals `(start, end)` within `[0, makespan)`.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for s in &self.segments {
            if s.start > cursor {
                gaps.push((cursor, s.start));
            }
            cursor = cursor.max(s.end);
        }
        gaps
    }

    /// Number of times the CPU switched between different processes.
    ///
    /// An idle gap between two segments of the same process is not a switch.
    pub fn context_switches(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }

    /// Run and idle blocks covering `[0, makespan)`, for Gantt rendering.
    pub fn timeline(&self) -> Vec<TimelineBlock> {
        let mut blocks = Vec::with_capacity(self.segments.len() * 2);
        let mut cursor = 0;
        for s in &self.segments {
            if s.start > cursor {
                blocks.push(TimelineBlock::Idle {
                    start: cursor,
                    end: s.start,
                });
            }
            blocks.push(TimelineBlock::Run {
                pid: s.pid.clone(),
                start: s.start,
                end: s.end,
            });
            cursor = cursor.max(s.end);
        }
        blocks
    }
}
