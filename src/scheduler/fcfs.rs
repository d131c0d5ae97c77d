use super::{Algorithm, Schedule, Scheduler, run_to_completion};
use crate::core::{ProcessRecord, TimelineBuilder};

/// First-come-first-served: runs processes to completion in input order.
///
/// Input order is expected to be arrival order; a process listed ahead of an
/// earlier arrival still runs first, idling the CPU until it arrives.
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn schedule(&mut self, mut processes: Vec<ProcessRecord>) -> Schedule {
        let mut timeline = TimelineBuilder::new();
        let mut now = 0;
        for process in processes.iter_mut() {
            now = run_to_completion(&mut timeline, process, now);
        }

        Schedule::finish(processes, timeline)
    }
}
