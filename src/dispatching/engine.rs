//! Rule engine for multi-criteria dispatching.
//!
//! Composes dispatching rules sequentially: the primary rule decides, the
//! next rule is consulted only on ties, and input order breaks whatever
//! tie remains. The result is a total, deterministic order.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessDescriptor;

/// Sort key of one process under a rule engine.
///
/// Ordered lexicographically by rule scores, then by input index.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    /// One score per rule, in rule order.
    pub scores: Vec<RuleScore>,
    /// Position of the process in the request.
    pub index: usize,
}

/// A composable rule engine for process prioritization.
///
/// # Example
/// ```
/// use cpu_sched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::Priority)
///     .with_tie_breaker(rules::Fifo);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (pure input order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// First-Come-First-Served: arrival, then input order.
    pub fn fcfs() -> Self {
        Self::new().with_rule(rules::Fifo)
    }

    /// Shortest Job First: burst, then arrival, then input order.
    pub fn sjf() -> Self {
        Self::new()
            .with_rule(rules::Spt)
            .with_tie_breaker(rules::Fifo)
    }

    /// Static priority: priority value, then arrival, then input order.
    pub fn priority() -> Self {
        Self::new()
            .with_rule(rules::Priority)
            .with_tie_breaker(rules::Fifo)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(
        &self,
        process: &ProcessDescriptor,
        context: &SchedulingContext,
    ) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|r| r.evaluate(process, context))
            .collect()
    }

    /// Builds the sort key of a process at `index` in the request.
    pub fn rank_key(
        &self,
        process: &ProcessDescriptor,
        index: usize,
        context: &SchedulingContext,
    ) -> RankKey {
        RankKey {
            scores: self.evaluate(process, context),
            index,
        }
    }

    /// Compares two processes; `Less` means `a` is dispatched first.
    pub fn compare(
        &self,
        (a_index, a): (usize, &ProcessDescriptor),
        (b_index, b): (usize, &ProcessDescriptor),
        context: &SchedulingContext,
    ) -> Ordering {
        for rule in &self.rules {
            let ord = rule
                .evaluate(a, context)
                .cmp(&rule.evaluate(b, context));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a_index.cmp(&b_index)
    }

    /// Sorts processes by dispatch order.
    ///
    /// Returns indices into the original slice.
    pub fn sort_indices(
        &self,
        processes: &[ProcessDescriptor],
        context: &SchedulingContext,
    ) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare((a, &processes[a]), (b, &processes[b]), context));
        indices
    }

    /// Returns the index of the process to dispatch first.
    pub fn select_best(
        &self,
        processes: &[ProcessDescriptor],
        context: &SchedulingContext,
    ) -> Option<usize> {
        (0..processes.len())
            .min_by(|&a, &b| self.compare((a, &processes[a]), (b, &processes[b]), context))
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
