use core::fmt::Display;
use core::time::Duration;
use std::time::Instant;

use log::*;

/// Runs a poll step at a fixed interval, forever.
///
/// The wait always starts after a cycle has finished, whatever its outcome, so
/// a slow cycle pushes every later cycle back rather than being caught up.
pub struct Scheduler {
    interval: Duration,
    total_cycles: u64,
    failed_cycles: u64,
    worst_case: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Scheduler {
            interval,
            total_cycles: 0,
            failed_cycles: 0,
            worst_case: Duration::ZERO,
        }
    }

    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    pub fn failed_cycles(&self) -> u64 {
        self.failed_cycles
    }

    pub fn worst_case(&self) -> Duration {
        self.worst_case
    }

    /// Run a single cycle, logging rather than returning its failure.
    pub fn tick<F, E>(&mut self, step: &mut F) -> bool
    where
        F: FnMut() -> Result<(), E>,
        E: Display,
    {
        let start = Instant::now();
        self.total_cycles += 1;

        let succeeded = match step() {
            Ok(()) => true,
            Err(err) => {
                self.failed_cycles += 1;
                error!(
                    "Cycle {} failed ({} of {} so far): {}",
                    self.total_cycles(),
                    self.failed_cycles(),
                    self.total_cycles(),
                    err
                );
                false
            }
        };

        let elapsed = start.elapsed();
        if elapsed > self.worst_case() {
            self.worst_case = elapsed;
            debug!("New worst case cycle time {:?}", elapsed);
        }
        if elapsed > self.interval {
            warn!(
                "Cycle {} took {:?}, longer than the {:?} interval",
                self.total_cycles, elapsed, self.interval
            );
        }

        succeeded
    }

    pub fn run<F, E>(&mut self, mut step: F) -> !
    where
        F: FnMut() -> Result<(), E>,
        E: Display,
    {
        loop {
            self.tick(&mut step);
            std::thread::sleep(self.interval);
        }
    }
}
