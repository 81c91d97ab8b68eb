//! Built-in dispatching rules.
//!
//! - **FIFO**: earliest arrival first
//! - **SPT**: shortest burst first
//! - **PRIORITY**: lowest priority value first
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessDescriptor;

/// First In First Out.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &ProcessDescriptor, _context: &SchedulingContext) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Processing Time.
///
/// Prioritizes processes with shorter bursts. Minimizes mean waiting time
/// among non-preemptive disciplines evaluated at fixed decision points.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &ProcessDescriptor, _context: &SchedulingContext) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Static priority rule.
///
/// Lower `priority` value = more important (0 is the most urgent).
/// No aging is applied.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &ProcessDescriptor, _context: &SchedulingContext) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Static Priority"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo() {
        let ctx = SchedulingContext::at_time(10);
        let first = ProcessDescriptor::new("first", 1, 5);
        let second = ProcessDescriptor::new("second", 3, 1);
        assert!(Fifo.evaluate(&first, &ctx) < Fifo.evaluate(&second, &ctx));
    }

    #[test]
    fn test_spt() {
        let ctx = SchedulingContext::at_time(0);
        let short = ProcessDescriptor::new("short", 0, 2);
        let long = ProcessDescriptor::new("long", 0, 9);
        assert!(Spt.evaluate(&short, &ctx) < Spt.evaluate(&long, &ctx));
    }

    #[test]
    fn test_priority_lower_value_wins() {
        let ctx = SchedulingContext::at_time(0);
        let urgent = ProcessDescriptor::new("Urgent", 3, 3).with_priority(0);
        let low = ProcessDescriptor::new("Low", 2, 4).with_priority(3);
        assert!(Priority.evaluate(&urgent, &ctx) < Priority.evaluate(&low, &ctx));
    }

    #[test]
    fn test_priority_negative_values() {
        let ctx = SchedulingContext::at_time(0);
        let p = ProcessDescriptor::new("P", 0, 1).with_priority(-5);
        assert_eq!(Priority.evaluate(&p, &ctx), -5);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Fifo.name(), "FIFO");
        assert_eq!(Spt.description(), "Shortest Processing Time");
        assert_eq!(Priority.name(), "PRIORITY");
    }
}
