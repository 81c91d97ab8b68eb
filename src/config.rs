//! Simulator configuration.
//!
//! Sanity bounds that keep a single request from simulating an absurd
//! amount of time, plus the switch for post-run trace verification.
//! Deserializable from any serde format; missing fields take defaults.

use serde::{Deserialize, Serialize};

/// Default upper bound on the makespan of a single request.
pub const DEFAULT_MAX_HORIZON: i64 = 1_000_000_000_000;

/// Default upper bound on the number of segments a request may emit.
pub const DEFAULT_MAX_SEGMENTS: usize = 10_000_000;

/// Simulator limits and checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimulatorConfig {
    /// Largest admissible `max(arrival) + Σ burst`.
    pub max_horizon: i64,
    /// Largest admissible segment count (`Σ ceil(burst / quantum)` for RR).
    pub max_segments: usize,
    /// Check trace invariants after every run.
    pub verify_trace: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_horizon: DEFAULT_MAX_HORIZON,
            max_segments: DEFAULT_MAX_SEGMENTS,
            verify_trace: true,
        }
    }
}

impl SimulatorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the makespan bound.
    pub fn with_max_horizon(mut self, max_horizon: i64) -> Self {
        self.max_horizon = max_horizon;
        self
    }

    /// Sets the segment-count bound.
    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    /// Enables or disables trace verification.
    pub fn with_verify_trace(mut self, verify: bool) -> Self {
        self.verify_trace = verify;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let c = SimulatorConfig::new();
        assert_eq!(c.max_horizon, DEFAULT_MAX_HORIZON);
        assert_eq!(c.max_segments, DEFAULT_MAX_SEGMENTS);
        assert!(c.verify_trace);
    }

    #[test]
    fn test_config_builder() {
        let c = SimulatorConfig::new()
            .with_max_horizon(100)
            .with_max_segments(10)
            .with_verify_trace(false);
        assert_eq!(c.max_horizon, 100);
        assert_eq!(c.max_segments, 10);
        assert!(!c.verify_trace);
    }

    #[test]
    fn test_config_partial_deserialize() {
        let c: SimulatorConfig = serde_json::from_str(r#"{"maxSegments": 500}"#).unwrap();
        assert_eq!(c.max_segments, 500);
        assert_eq!(c.max_horizon, DEFAULT_MAX_HORIZON);
        assert!(c.verify_trace);
    }
}
