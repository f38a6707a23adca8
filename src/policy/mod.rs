//! Dispatch policies and shared engine plumbing.
//!
//! Five independent policy functions, each consuming the descriptor queue
//! destructively and producing a fresh [`ScheduleResult`]:
//!
//! | Policy | Kind | Order |
//! |--------|------|-------|
//! | [`first_come_first_serve`] | non-preemptive | arrival (file) order |
//! | [`shortest_job_first`] | non-preemptive | ascending total burst |
//! | [`priority`] | non-preemptive | ascending priority value |
//! | [`round_robin`] | preemptive | fixed-slot cyclic sweeps |
//! | [`shortest_remaining_time_first`] | preemptive | per-tick re-selection |
//!
//! # Queue convention
//!
//! The loader front-inserts records, so the file's first record sits at the
//! BACK of the queue. Every policy drains back-to-front and therefore works
//! on records in file order. Callers building queues by hand should
//! `push_back` in the order processes should be considered to have been
//! submitted last-to-first (or `push_front` first-to-last).
//!
//! # Tie-breaking
//!
//! Sorted policies use explicit composite keys rather than relying on sort
//! stability alone: SJF orders by `(total_burst, arrival)`, Priority by
//! `(priority, arrival)`, and SRT selects the minimum `(remaining_burst,
//! arrival)` among eligible processes. Full ties fall back to load order.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

mod fcfs;
mod round_robin;
mod sjf;
mod srt;

pub use fcfs::first_come_first_serve;
pub use round_robin::round_robin;
pub use sjf::{priority, shortest_job_first};
pub use srt::shortest_remaining_time_first;

use std::collections::VecDeque;

use crate::error::SimError;
use crate::models::{ProcessDescriptor, ScheduleResult, SimClock};

/// A dispatch policy selected by name, as a front end would.
///
/// Maps the textual algorithm names (`FCFS`, `SJF`, `P`, `RR`, `SRT`) onto
/// the policy functions; `RR` additionally carries its quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// First-come-first-served.
    Fcfs,
    /// Non-preemptive shortest-job-first.
    Sjf,
    /// Non-preemptive priority (lower value runs earlier).
    Priority,
    /// Preemptive round-robin with a fixed quantum.
    RoundRobin {
        /// Maximum consecutive ticks per dispatch.
        quantum: u32,
    },
    /// Preemptive shortest-remaining-time-first.
    Srt,
}

impl Policy {
    /// Resolves a textual algorithm name, attaching the quantum for `RR`.
    ///
    /// # Errors
    /// [`SimError::InvalidArgument`] for an unknown name, a missing or zero
    /// quantum with `RR`, or a quantum supplied to any other policy.
    pub fn from_args(name: &str, quantum: Option<u32>) -> Result<Self, SimError> {
        let policy = match name {
            "FCFS" => Policy::Fcfs,
            "SJF" => Policy::Sjf,
            "P" => Policy::Priority,
            "RR" => {
                let quantum = quantum
                    .ok_or(SimError::InvalidArgument("round-robin requires a quantum"))?;
                return Ok(Policy::RoundRobin { quantum });
            }
            "SRT" => Policy::Srt,
            _ => return Err(SimError::InvalidArgument("unknown algorithm name")),
        };
        if quantum.is_some() {
            return Err(SimError::InvalidArgument(
                "quantum is only meaningful for round-robin",
            ));
        }
        Ok(policy)
    }

    /// The policy's textual name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Priority => "P",
            Policy::RoundRobin { .. } => "RR",
            Policy::Srt => "SRT",
        }
    }

    /// Runs this policy over the queue, draining it on success.
    pub fn run(
        &self,
        queue: &mut VecDeque<ProcessDescriptor>,
    ) -> Result<ScheduleResult, SimError> {
        match *self {
            Policy::Fcfs => first_come_first_serve(queue),
            Policy::Sjf => shortest_job_first(queue),
            Policy::Priority => priority(queue),
            Policy::RoundRobin { quantum } => round_robin(queue, quantum),
            Policy::Srt => shortest_remaining_time_first(queue),
        }
    }
}

/// Running totals for one simulation, normalized on finish.
#[derive(Debug, Default)]
pub(crate) struct MetricsAccumulator {
    total_waiting: u64,
    total_turnaround: u64,
}

impl MetricsAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds `clock - arrival` to total waiting time. Call exactly once per
    /// process, at first dispatch.
    pub(crate) fn record_first_dispatch(&mut self, clock: SimClock, arrival: u32) {
        self.total_waiting += clock.now() - u64::from(arrival);
    }

    /// Adds `clock - arrival` to total turnaround time. Call exactly once
    /// per process, at completion.
    pub(crate) fn record_completion(&mut self, clock: SimClock, arrival: u32) {
        self.total_turnaround += clock.now() - u64::from(arrival);
    }

    /// Normalizes totals into the result record.
    pub(crate) fn finish(self, process_count: usize, clock: SimClock) -> ScheduleResult {
        ScheduleResult {
            average_waiting_time: self.total_waiting as f64 / process_count as f64,
            average_turnaround_time: self.total_turnaround as f64 / process_count as f64,
            total_run_time: clock.now(),
        }
    }
}

/// Drains the queue back-to-front into a `Vec` in file (submission) order.
///
/// # Errors
/// [`SimError::InvalidArgument`] if the queue is empty.
pub(crate) fn drain_in_file_order(
    queue: &mut VecDeque<ProcessDescriptor>,
) -> Result<Vec<ProcessDescriptor>, SimError> {
    if queue.is_empty() {
        return Err(SimError::InvalidArgument("empty process set"));
    }
    let mut working_set: Vec<ProcessDescriptor> = Vec::with_capacity(queue.len());
    while let Some(descriptor) = queue.pop_back() {
        working_set.push(descriptor);
    }
    Ok(working_set)
}

/// Shared non-preemptive loop: runs each process to completion in slice
/// order, jumping the clock over idle gaps before a late arrival.
pub(crate) fn run_to_completion(processes: &mut [ProcessDescriptor]) -> ScheduleResult {
    let mut clock = SimClock::new();
    let mut metrics = MetricsAccumulator::new();

    for process in processes.iter_mut() {
        let arrival = u64::from(process.arrival);
        if clock.now() < arrival {
            log::trace!("idle from t={} to t={}", clock.now(), arrival);
            clock.jump_to(arrival);
        }

        metrics.record_first_dispatch(clock, process.arrival);
        process.started = true;
        log::debug!(
            "dispatch burst={} arrival={} at t={}",
            process.total_burst,
            process.arrival,
            clock.now()
        );

        while !process.is_finished() {
            clock.run_tick(process);
        }
        metrics.record_completion(clock, process.arrival);
    }

    metrics.finish(processes.len(), clock)
}
