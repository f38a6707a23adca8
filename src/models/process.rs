//! Process descriptor (PCB) model.
//!
//! A descriptor represents one process known at simulation start. Descriptors
//! are created by the loader, mutated by exactly one policy call, and
//! discarded once the metrics record is produced.

use serde::{Deserialize, Serialize};

/// One schedulable unit of work.
///
/// # Invariants
/// - `0 <= remaining_burst <= total_burst` at all times.
/// - `arrival` and `total_burst` are immutable after creation.
/// - `started` flips to `true` exactly once, at first dispatch; preemptive
///   policies use it to capture waiting time without double-counting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Simulated-time unit at which the process becomes eligible to run.
    pub arrival: u32,
    /// Total CPU ticks the process requires to finish.
    pub total_burst: u32,
    /// Ticks still owed; decremented only by [`SimClock::run_tick`].
    ///
    /// [`SimClock::run_tick`]: super::SimClock::run_tick
    pub remaining_burst: u32,
    /// Scheduling priority; lower value = runs earlier (Priority policy only).
    pub priority: u32,
    /// Whether the process has received its first tick of service.
    pub started: bool,
}

impl ProcessDescriptor {
    /// Creates a fresh descriptor with `remaining_burst == burst` and
    /// `started == false`.
    pub fn new(burst: u32, priority: u32, arrival: u32) -> Self {
        Self {
            arrival,
            total_burst: burst,
            remaining_burst: burst,
            priority,
            started: false,
        }
    }

    /// Whether the process has no work left.
    pub fn is_finished(&self) -> bool {
        self.remaining_burst == 0
    }

    /// Whether the process is eligible to run at the given clock value.
    pub fn has_arrived(&self, clock: u64) -> bool {
        u64::from(self.arrival) <= clock
    }
}
