//! Virtual clock and the tick primitive.
//!
//! All five policies advance simulated time through the same one-tick
//! operation, which gives every preemptive policy an identical preemption
//! granularity of one time unit. [`SimClock::run_tick`] is the only place
//! execution "happens": it is the sole site that decrements a descriptor's
//! `remaining_burst`, and each invocation advances the clock by exactly one.

use super::ProcessDescriptor;

/// Monotonically non-decreasing counter of simulated time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimClock(u64);

impl SimClock {
    /// Creates a clock at time zero.
    pub fn new() -> Self {
        SimClock(0)
    }

    /// Current simulated time.
    pub fn now(&self) -> u64 {
        self.0
    }

    /// Jumps the clock forward to `time`, modeling an idle gap.
    ///
    /// Forward-only: a target in the past leaves the clock untouched, so
    /// monotonicity holds by construction.
    pub fn jump_to(&mut self, time: u64) {
        if time > self.0 {
            self.0 = time;
        }
    }

    /// Executes one tick of the given process: decrements its remaining
    /// burst and advances the clock by one unit.
    pub fn run_tick(&mut self, process: &mut ProcessDescriptor) {
        debug_assert!(process.remaining_burst > 0);
        process.remaining_burst -= 1;
        self.0 += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_clock_and_burns_burst() {
        let mut clock = SimClock::new();
        let mut p = ProcessDescriptor::new(2, 0, 0);

        clock.run_tick(&mut p);
        assert_eq!(clock.now(), 1);
        assert_eq!(p.remaining_burst, 1);

        clock.run_tick(&mut p);
        assert_eq!(clock.now(), 2);
        assert!(p.is_finished());
    }

    #[test]
    fn test_jump_is_forward_only() {
        let mut clock = SimClock::new();
        clock.jump_to(5);
        assert_eq!(clock.now(), 5);
        clock.jump_to(3);
        assert_eq!(clock.now(), 5);
    }
}
