//! First-come-first-served.
//!
//! Strict arrival order with no preemption: each process runs to completion
//! before the next is considered. The CPU idles (clock jump) when the next
//! process has not arrived yet.

use std::collections::VecDeque;

use super::{drain_in_file_order, run_to_completion};
use crate::error::SimError;
use crate::models::{ProcessDescriptor, ScheduleResult};

/// Runs the queue under first-come-first-served, draining it on success.
///
/// # Errors
/// [`SimError::InvalidArgument`] if the queue is empty.
pub fn first_come_first_serve(
    queue: &mut VecDeque<ProcessDescriptor>,
) -> Result<ScheduleResult, SimError> {
    let mut working_set = drain_in_file_order(queue)?;
    Ok(run_to_completion(&mut working_set))
}
