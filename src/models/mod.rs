//! Simulation domain models.
//!
//! Provides the data types exchanged with the simulator: the submitted
//! processes and request, the produced execution trace, and the
//! per-process and aggregate results.
//!
//! # Wire Mapping
//!
//! | Model | Wire shape |
//! |-------|-----------|
//! | `ProcessDescriptor` | `{pid, arrivalTime, burstTime, priority}` |
//! | `ProcessResult` | descriptor + `completionTime, turnaroundTime, waitingTime` |
//! | `ExecutionTrace` | `[{pid, start, end}, ...]` |
//! | `Algorithm` | `"fcfs" \| "sjf" \| "priority" \| "rr"` |

mod process;
mod request;
mod result;
mod trace;

pub use process::ProcessDescriptor;
pub use request::{Algorithm, ParseAlgorithmError, SimulationRequest};
pub use result::{ProcessResult, SimulationResult};
pub use trace::{ExecutionSegment, ExecutionTrace, TimelineBlock};
