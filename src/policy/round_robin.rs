//! Preemptive round-robin with a fixed quantum.
//!
//! # Requeue model
//!
//! This is a fixed-slot revisit scheme: the working set keeps its file
//! (submission) order and every sweep scans the same index order, granting
//! each arrived, unfinished process up to `quantum` ticks. It is not the
//! tail-requeue FIFO variant; the two produce different interleavings when
//! arrivals overlap a running quantum, though aggregate metrics agree in
//! the common non-overlapping case.
//!
//! # Waiting time
//!
//! Captured exactly once per process, at first dispatch. Later re-dispatch
//! delays are intentionally not counted: waiting time here measures only
//! arrival to first service.

use std::collections::VecDeque;

use super::{drain_in_file_order, MetricsAccumulator};
use crate::error::SimError;
use crate::models::{ProcessDescriptor, ScheduleResult, SimClock};

/// Runs the queue under round-robin with the given quantum, draining it on
/// success.
///
/// # Errors
/// [`SimError::InvalidArgument`] if the queue is empty or `quantum == 0`.
pub fn round_robin(
    queue: &mut VecDeque<ProcessDescriptor>,
    quantum: u32,
) -> Result<ScheduleResult, SimError> {
    if quantum == 0 {
        return Err(SimError::InvalidArgument("round-robin quantum is zero"));
    }
    let mut working_set = drain_in_file_order(queue)?;
    let process_count = working_set.len();

    let mut clock = SimClock::new();
    let mut metrics = MetricsAccumulator::new();
    let mut unfinished = process_count;

    while unfinished > 0 {
        let mut dispatched_any = false;

        for process in working_set.iter_mut() {
            if process.is_finished() || !process.has_arrived(clock.now()) {
                continue;
            }
            dispatched_any = true;

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

            for _ in 0..quantum {
                clock.run_tick(process);
                if process.is_finished() {
                    metrics.record_completion(clock, process.arrival);
                    unfinished -= 1;
                    break;
                }
            }
        }

        // Whole sweep found nothing arrived: jump over the idle gap to the
        // earliest arrival among unfinished processes.
        if !dispatched_any {
            if let Some(next_arrival) = working_set
                .iter()
                .filter(|p| !p.is_finished())
                .map(|p| u64::from(p.arrival))
                .min()
            {
                log::trace!("idle from t={} to t={}", clock.now(), next_arrival);
                clock.jump_to(next_arrival);
            }
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
    fn test_single_process() {
        let mut queue = VecDeque::new();
        queue.push_back(make_pcb(0, 4));

        let result = round_robin(&mut queue, 2).unwrap();

        assert!((result.average_waiting_time - 0.0).abs() < 1e-5);
        assert!((result.average_turnaround_time - 4.0).abs() < 1e-5);
        assert_eq!(result.total_run_time, 4);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_quantum_interleaving() {
        let mut queue = VecDeque::new();
        // File order: A (burst 3), B (burst 2), both at t=0.
        queue.push_front(make_pcb(0, 3));
        queue.push_front(make_pcb(0, 2));

        let result = round_robin(&mut queue, 2).unwrap();

        // Sweep 1: A runs t=0..2, B runs t=2..4 (done, turn 4).
        // Sweep 2: A runs t=4..5 (done, turn 5).
        // Waiting: A 0, B 2.
        assert!((result.average_waiting_time - 1.0).abs() < 1e-5);
        assert!((result.average_turnaround_time - 4.5).abs() < 1e-5);
        assert_eq!(result.total_run_time, 5);
    }

    #[test]
    fn test_large_quantum_degenerates_to_fcfs() {
        let build = || {
            let mut queue = VecDeque::new();
            queue.push_front(make_pcb(0, 4));
            queue.push_front(make_pcb(0, 3));
            queue
        };

        let rr = round_robin(&mut build(), 100).unwrap();
        let fcfs = crate::policy::first_come_first_serve(&mut build()).unwrap();

        assert!((rr.average_waiting_time - fcfs.average_waiting_time).abs() < 1e-5);
        assert!((rr.average_turnaround_time - fcfs.average_turnaround_time).abs() < 1e-5);
        assert_eq!(rr.total_run_time, fcfs.total_run_time);
    }

    #[test]
    fn test_idle_jump_before_any_arrival() {
        let mut queue = VecDeque::new();
        queue.push_back(make_pcb(6, 2));

        let result = round_robin(&mut queue, 3).unwrap();

        assert!((result.average_waiting_time - 0.0).abs() < 1e-5);
        assert!((result.average_turnaround_time - 2.0).abs() < 1e-5);
        assert_eq!(result.total_run_time, 8);
    }

    #[test]
    fn test_null_or_zero_inputs() {
        let mut empty: VecDeque<ProcessDescriptor> = VecDeque::new();
        assert!(matches!(
            round_robin(&mut empty, 5),
            Err(SimError::InvalidArgument(_))
        ));

        let mut queue = VecDeque::new();
        queue.push_back(make_pcb(0, 4));
        assert!(matches!(
            round_robin(&mut queue, 0),
            Err(SimError::InvalidArgument(_))
        ));
        // A rejected call must leave the queue intact.
        assert_eq!(queue.len(), 1);
    }
}
