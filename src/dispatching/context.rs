//! Scheduling context for dispatching rule evaluation.

/// Runtime simulation state passed to dispatching rules and ready queues.
///
/// All times are clock ticks relative to the simulation start (t=0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: i64,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: i64) -> Self {
        Self { current_time }
    }

    /// Moves the clock forward.
    ///
    /// The clock never moves backwards; earlier times are ignored.
    pub fn advance_to(&mut self, time: i64) {
        self.current_time = self.current_time.max(time);
    }
}
