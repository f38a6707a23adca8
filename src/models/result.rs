//! Simulation result metrics.
//!
//! Every policy accumulates total waiting time, total turnaround time, and
//! the final clock value, then normalizes by process count. This record is
//! what a front end prints or a comparison harness tabulates.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average waiting time | mean(first_dispatch - arrival) |
//! | Average turnaround time | mean(completion - arrival) |
//! | Total run time | clock value when the last process completes |

use serde::{Deserialize, Serialize};

/// Aggregate performance metrics of one simulation run.
///
/// Produced whole by a successful policy call; a failed call returns an
/// error and constructs no result at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Mean ticks between arrival and first dispatch.
    pub average_waiting_time: f64,
    /// Mean ticks between arrival and completion.
    pub average_turnaround_time: f64,
    /// Simulated clock value at the moment the last process completed.
    pub total_run_time: u64,
}
