pub mod fcfs;
pub mod round_robin;
pub mod sjf;

use std::{fmt, num::NonZeroU64, str::FromStr};

use serde::Serialize;

use crate::{
    core::{ProcessRecord, SchedEvent, Ticks, TimelineBuilder, TimelineSegment},
    error::SimError,
};
pub use fcfs::FcfsScheduler;
pub use round_robin::RoundRobinScheduler;
pub use sjf::SjfScheduler;

pub const DEFAULT_QUANTUM: NonZeroU64 = NonZeroU64::new(2).unwrap();

/// Output of a single scheduler invocation.
#[derive(Debug, Clone)]
pub struct Schedule {
    /// Completed records, ordered by pid.
    pub records: Vec<ProcessRecord>,
    pub timeline: Vec<TimelineSegment>,
    pub events: Vec<SchedEvent>,
}

impl Schedule {
    fn finish(mut records: Vec<ProcessRecord>, timeline: TimelineBuilder) -> Self {
        records.sort_by_key(|p| p.pid);
        let (timeline, events) = timeline.into_parts();
        Self {
            records,
            timeline,
            events,
        }
    }
}

/// A scheduling discipline. Implementations take their own copy of the
/// process list and are total over validated input.
pub trait Scheduler {
    fn algorithm(&self) -> Algorithm;

    fn schedule(&mut self, processes: Vec<ProcessRecord>) -> Schedule;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    RoundRobin,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Fcfs, Algorithm::Sjf, Algorithm::RoundRobin];

    pub fn needs_quantum(self) -> bool {
        matches!(self, Algorithm::RoundRobin)
    }

    pub fn scheduler(self, quantum: NonZeroU64) -> Box<dyn Scheduler> {
        match self {
            Algorithm::Fcfs => Box::new(FcfsScheduler),
            Algorithm::Sjf => Box::new(SjfScheduler),
            Algorithm::RoundRobin => Box::new(RoundRobinScheduler::new(quantum)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::RoundRobin => "Round Robin",
        };
        f.write_str(name)
    }
}

// Menu numbering of the interactive prompt: 1. FCFS 2. SJF 3. Round Robin
impl TryFrom<u32> for Algorithm {
    type Error = SimError;

    fn try_from(choice: u32) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Algorithm::Fcfs),
            2 => Ok(Algorithm::Sjf),
            3 => Ok(Algorithm::RoundRobin),
            other => Err(SimError::InvalidSelection(other.to_string())),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(choice) = s.parse::<u32>() {
            return Algorithm::try_from(choice);
        }
        match s.to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "rr" | "round-robin" | "roundrobin" | "round_robin" => Ok(Algorithm::RoundRobin),
            _ => Err(SimError::InvalidSelection(s.to_owned())),
        }
    }
}

// Jumps the clock forward to `arrival` if the CPU would otherwise sit idle
fn idle_until(timeline: &mut TimelineBuilder, now: Ticks, arrival: Ticks) -> Ticks {
    if now < arrival {
        timeline.idle(now, arrival);
        arrival
    } else {
        now
    }
}

// Runs `process` to completion starting at `now` and returns the new clock
fn run_to_completion(
    timeline: &mut TimelineBuilder,
    process: &mut ProcessRecord,
    now: Ticks,
) -> Ticks {
    let now = idle_until(timeline, now, process.arrival_time);
    let burst = process.remaining;

    tracing::debug!(pid = process.pid, at = now, burst, "dispatch");
    process.dispatch(now);
    timeline.push(process.pid, now, burst);
    process.execute(burst);

    let now = now + burst;
    process.complete(now);
    timeline.complete(process.pid, now);
    now
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_names_and_menu_numbers() {
        assert_eq!("fcfs".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("SJF".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("rr".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!("3".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!(Algorithm::try_from(1).unwrap(), Algorithm::Fcfs);
    }

    #[test]
    fn test_rejects_unknown_selection() {
        assert_eq!(
            Algorithm::try_from(4),
            Err(SimError::InvalidSelection("4".into()))
        );
        assert_eq!(
            "lottery".parse::<Algorithm>(),
            Err(SimError::InvalidSelection("lottery".into()))
        );
    }
}
