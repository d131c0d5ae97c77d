use std::{collections::VecDeque, num::NonZeroU64};

use super::{Algorithm, Schedule, Scheduler, idle_until};
use crate::core::{ProcessRecord, TimelineBuilder};

/// Time-sliced round robin over a single FIFO ready queue.
///
/// The queue is loaded once, in input order, before the run starts. A
/// dequeued process that has not arrived yet makes the CPU idle until it
/// does. Each turn runs `min(quantum, remaining)` ticks; unfinished processes
/// go to the back of the queue.
pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
}

impl RoundRobinScheduler {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self { quantum }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RoundRobin
    }

    fn schedule(&mut self, processes: Vec<ProcessRecord>) -> Schedule {
        let mut ready: VecDeque<ProcessRecord> = processes.into();
        let mut completed = Vec::with_capacity(ready.len());
        let mut timeline = TimelineBuilder::new();
        let mut now = 0;

        while let Some(mut process) = ready.pop_front() {
            now = idle_until(&mut timeline, now, process.arrival_time);
            let slice = self.quantum.get().min(process.remaining);

            tracing::debug!(pid = process.pid, at = now, slice, "dispatch");
            process.dispatch(now);
            timeline.push(process.pid, now, slice);

            now += slice;
            let remaining = process.execute(slice);

            if remaining > 0 {
                process.preempt();
                timeline.preempt(process.pid, now, remaining);
                ready.push_back(process);
            } else {
                // Waiting time comes from the original burst, not this slice
                process.complete(now);
                timeline.complete(process.pid, now);
                completed.push(process);
            }
        }

        Schedule::finish(completed, timeline)
    }
}
