//! Non-preemptive sorted policies: shortest-job-first and priority.
//!
//! Both drain the queue to file order, stable-sort the working set by an
//! explicit composite key, and then run the same non-preemptive loop as
//! FCFS. Ties on the primary key fall to earlier arrival, then to load
//! order (stable sort).

use std::collections::VecDeque;

use super::{drain_in_file_order, run_to_completion};
use crate::error::SimError;
use crate::models::{ProcessDescriptor, ScheduleResult};

/// Runs the queue under non-preemptive shortest-job-first.
///
/// Orders by `(total_burst, arrival)` ascending; the shortest declared
/// burst runs first regardless of submission order.
///
/// # Errors
/// [`SimError::InvalidArgument`] if the queue is empty.
pub fn shortest_job_first(
    queue: &mut VecDeque<ProcessDescriptor>,
) -> Result<ScheduleResult, SimError> {
    let mut working_set = drain_in_file_order(queue)?;
    working_set.sort_by_key(|p| (p.total_burst, p.arrival));
    Ok(run_to_completion(&mut working_set))
}

/// Runs the queue under non-preemptive priority scheduling.
///
/// Orders by `(priority, arrival)` ascending; a lower priority value runs
/// earlier.
///
/// # Errors
/// [`SimError::InvalidArgument`] if the queue is empty.
pub fn priority(queue: &mut VecDeque<ProcessDescriptor>) -> Result<ScheduleResult, SimError> {
    let mut working_set = drain_in_file_order(queue)?;
    working_set.sort_by_key(|p| (p.priority, p.arrival));
    Ok(run_to_completion(&mut working_set))
}
