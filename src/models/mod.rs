//! Simulation domain models.
//!
//! Core data types shared by every dispatch policy:
//!
//! | Type | Role |
//! |------|------|
//! | [`ProcessDescriptor`] | One schedulable unit of work (PCB) |
//! | [`SimClock`] | Monotonic virtual clock + the tick primitive |
//! | [`ScheduleResult`] | Aggregate metrics of one simulation run |

mod clock;
mod process;
mod result;

pub use clock::SimClock;
pub use process::ProcessDescriptor;
pub use result::ScheduleResult;
