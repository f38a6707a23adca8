//! Preemptive shortest-remaining-time-first.
//!
//! Re-selects the running process before every tick: among arrived,
//! unfinished processes, the one with the least remaining work runs for
//! exactly one tick. Preemption falls out of the re-selection — a newly
//! arrived shorter process wins the next tick over an already-running
//! longer one. Ties go to the earlier arrival, then to load order.

use std::collections::VecDeque;

use super::{drain_in_file_order, MetricsAccumulator};
use crate::error::SimError;
use crate::models::{ProcessDescriptor, ScheduleResult, SimClock};

/// Runs the queue under shortest-remaining-time-first, draining it on
/// success.
///
/// # Errors
/// [`SimError::InvalidArgument`] if the queue is empty.
pub fn shortest_remaining_time_first(
    queue: &mut VecDeque<ProcessDescriptor>,
) -> Result<ScheduleResult, SimError> {
    let mut working_set = drain_in_file_order(queue)?;
    let process_count = working_set.len();
    for process in working_set.iter_mut() {
        process.started = false;
    }

    let mut clock = SimClock::new();
    let mut metrics = MetricsAccumulator::new();
    let mut unfinished = process_count;

    while unfinished > 0 {
        let selected = working_set
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_finished() && p.has_arrived(clock.now()))
            .min_by_key(|(_, p)| (p.remaining_burst, p.arrival))
            .map(|(index, _)| index);

        let Some(index) = selected else {
            // Nothing eligible: jump over the idle gap.
            if let Some(next_arrival) = working_set
                .iter()
                .filter(|p| !p.is_finished())
                .map(|p| u64::from(p.arrival))
                .min()
            {
                log::trace!("idle from t={} to t={}", clock.now(), next_arrival);
                clock.jump_to(next_arrival);
            }
            continue;
        };

        let process = &mut working_set[index];
        if !process.started {
            process.started = true;
            metrics.record_first_dispatch(clock, process.arrival);
            log::debug!(
                "first dispatch burst={} arrival={} at t={}",
                process.total_burst,
                process.arrival,
                clock.now()
            );
        }

        clock.run_tick(process);
        if process.is_finished() {
            metrics.record_completion(clock, process.arrival);
            unfinished -= 1;
        }
    }

    Ok(metrics.finish(process_count, clock))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pcb(arrival: u32, burst: u32) -> ProcessDescriptor {
        ProcessDescriptor::new(burst, 0, arrival)
    }

    #[test]
    fn test_preempts_on_shorter_arrival() {
        let mut queue = VecDeque::new();
        // File order: A (burst 6, t=0), B (burst 2, t=2).
        queue.push_front(make_pcb(0, 6));
        queue.push_front(make_pcb(2, 2));

        let result = shortest_remaining_time_first(&mut queue).unwrap();

        // A runs t=0..2 (remaining 4). B arrives with 2 < 4 and preempts,
        // completes at t=4. A resumes and completes at t=8.
        assert!((result.average_waiting_time - 0.0).abs() < 1e-5);
        assert!((result.average_turnaround_time - 5.0).abs() < 1e-5);
        assert_eq!(result.total_run_time, 8);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_no_preemption_when_arrival_is_longer() {
        let mut queue = VecDeque::new();
        queue.push_front(make_pcb(0, 3));
        queue.push_front(make_pcb(1, 5)); // longer than A's remaining 2

        let result = shortest_remaining_time_first(&mut queue).unwrap();

        // A runs t=0..3 uninterrupted; B waits 2, runs t=3..8.
        assert!((result.average_waiting_time - 1.0).abs() < 1e-5);
        assert!((result.average_turnaround_time - 5.0).abs() < 1e-5);
        assert_eq!(result.total_run_time, 8);
    }

    #[test]
    fn test_remaining_tie_goes_to_earlier_arrival() {
        let mut queue = VecDeque::new();
        queue.push_front(make_pcb(0, 2));
        queue.push_front(make_pcb(1, 1)); // ties A's remaining 1 at t=1

        let result = shortest_remaining_time_first(&mut queue).unwrap();

        // At t=1 both have remaining 1; A (earlier arrival) keeps the CPU
        // and completes at t=2, B runs t=2..3.
        assert!((result.average_waiting_time - 0.5).abs() < 1e-5);
        assert!((result.average_turnaround_time - 2.0).abs() < 1e-5);
        assert_eq!(result.total_run_time, 3);
    }

    #[test]
    fn test_idle_gap_before_first_arrival() {
        let mut queue = VecDeque::new();
        queue.push_back(make_pcb(4, 2));

        let result = shortest_remaining_time_first(&mut queue).unwrap();

        assert!((result.average_waiting_time - 0.0).abs() < 1e-5);
        assert!((result.average_turnaround_time - 2.0).abs() < 1e-5);
        assert_eq!(result.total_run_time, 6);
    }

    #[test]
    fn test_empty_queue_fails() {
        let mut queue: VecDeque<ProcessDescriptor> = VecDeque::new();
        assert!(matches!(
            shortest_remaining_time_first(&mut queue),
            Err(SimError::InvalidArgument(_))
        ));
    }
}
