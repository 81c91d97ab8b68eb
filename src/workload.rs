//! Sample and randomly generated workloads.
//!
//! `DemoSet` carries small hand-made process batches that exercise the
//! interesting cases of each discipline. `WorkloadGenerator` draws random
//! valid batches for load and property testing.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ProcessDescriptor;

/// Built-in demonstration workloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DemoSet {
    /// Three processes, staggered arrivals.
    Basic,
    /// Five processes with varied bursts and priorities.
    Complex,
    /// Four processes at distinct priority levels, including an urgent late arrival.
    PriorityTest,
}

impl DemoSet {
    /// All demo sets.
    pub const ALL: [DemoSet; 3] = [DemoSet::Basic, DemoSet::Complex, DemoSet::PriorityTest];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Basic => "Basic Example",
            Self::Complex => "Complex Scenario",
            Self::PriorityTest => "Priority Test",
        }
    }

    /// Short description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Basic => "Simple 3-process example",
            Self::Complex => "Multi-process with varied times",
            Self::PriorityTest => "Different priority levels",
        }
    }

    /// The processes of this set, in submission order.
    pub fn processes(&self) -> Vec<ProcessDescriptor> {
        let rows: &[(&str, i64, i64, i32)] = match self {
            Self::Basic => &[("P1", 0, 10, 3), ("P2", 2, 5, 1), ("P3", 4, 8, 2)],
            Self::Complex => &[
                ("P1", 0, 8, 2),
                ("P2", 1, 4, 1),
                ("P3", 2, 9, 3),
                ("P4", 3, 5, 2),
                ("P5", 4, 2, 1),
            ],
            Self::PriorityTest => &[
                ("High", 0, 6, 1),
                ("Medium", 1, 8, 2),
                ("Low", 2, 4, 3),
                ("Urgent", 3, 3, 0),
            ],
        };
        rows.iter()
            .map(|&(pid, arrival, burst, priority)| {
                ProcessDescriptor::new(pid, arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

/// Random workload generator.
///
/// Produces `count` processes named `P1..Pn` with arrivals in
/// `[0, max_arrival]`, bursts in `[min_burst, max_burst]` and priorities
/// in `[min_priority, max_priority]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival time.
    pub max_arrival: i64,
    /// Shortest burst (clamped to at least 1).
    pub min_burst: i64,
    /// Longest burst.
    pub max_burst: i64,
    /// Most urgent priority value.
    pub min_priority: i32,
    /// Least urgent priority value.
    pub max_priority: i32,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            min_priority: 0,
            max_priority: 5,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min_priority: i32, max_priority: i32) -> Self {
        self.min_priority = min_priority;
        self.max_priority = max_priority;
        self
    }

    /// Draws one workload.
    ///
    /// Ranges given in the wrong order are swapped; the output always
    /// passes validation.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessDescriptor> {
        let arrival_hi = self.max_arrival.max(0);
        let (burst_lo, burst_hi) = ordered(self.min_burst.max(1), self.max_burst.max(1));
        let (prio_lo, prio_hi) = ordered(self.min_priority, self.max_priority);

        (0..self.count)
            .map(|i| {
                ProcessDescriptor::new(
                    format!("P{}", i + 1),
                    rng.random_range(0..=arrival_hi),
                    rng.random_range(burst_lo..=burst_hi),
                )
                .with_priority(rng.random_range(prio_lo..=prio_hi))
            })
            .collect()
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulatorConfig;
    use crate::models::{Algorithm, SimulationRequest};
    use crate::validation::validate_request;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_sets() {
        assert_eq!(DemoSet::Basic.processes().len(), 3);
        assert_eq!(DemoSet::Complex.processes().len(), 5);

        let prio = DemoSet::PriorityTest.processes();
        let urgent = prio.iter().find(|p| p.pid == "Urgent").unwrap();
        assert_eq!(urgent.priority, 0);
        assert_eq!(urgent.arrival_time, 3);
        assert_eq!(DemoSet::PriorityTest.name(), "Priority Test");
    }

    #[test]
    fn test_demo_sets_are_valid() {
        for set in DemoSet::ALL {
            let request = SimulationRequest::new(Algorithm::Fcfs, set.processes());
            assert!(validate_request(&request, &SimulatorConfig::default()).is_ok());
        }
    }

    #[test]
    fn test_generator_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(50)
            .with_max_arrival(20)
            .with_burst_range(2, 6)
            .with_priority_range(1, 3);
        let workload = generator.generate(&mut rng);

        assert_eq!(workload.len(), 50);
        assert_eq!(workload[0].pid, "P1");
        assert_eq!(workload[49].pid, "P50");
        for p in &workload {
            assert!((0..=20).contains(&p.arrival_time));
            assert!((2..=6).contains(&p.burst_time));
            assert!((1..=3).contains(&p.priority));
        }
    }

    #[test]
    fn test_generator_deterministic_for_seed() {
        let generator = WorkloadGenerator::default();
        let a = generator.generate(&mut SmallRng::seed_from_u64(7));
        let b = generator.generate(&mut SmallRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generator_repairs_bad_ranges() {
        let mut rng = SmallRng::seed_from_u64(1);
        let generator = WorkloadGenerator::new(20)
            .with_max_arrival(-5)
            .with_burst_range(0, -3)
            .with_priority_range(4, 2);
        let workload = generator.generate(&mut rng);

        let request = SimulationRequest::round_robin(workload.clone(), 2);
        assert!(validate_request(&request, &SimulatorConfig::default()).is_ok());
        assert!(workload.iter().all(|p| p.arrival_time == 0 && p.burst_time == 1));
        assert!(workload.iter().all(|p| (2..=4).contains(&p.priority)));
    }
}
