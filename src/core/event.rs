use serde::Serialize;

use crate::core::{Pid, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SchedEvent {
    // CPU had nothing eligible between `from` and `to`
    Idle { from: Ticks, to: Ticks },
    Dispatch { pid: Pid, at: Ticks, slice: Ticks },
    Preempt { pid: Pid, at: Ticks, remaining: Ticks },
    Complete { pid: Pid, at: Ticks },
}

impl SchedEvent {
    pub fn time(&self) -> Ticks {
        match *self {
            Self::Idle { from, .. } => from,
            Self::Dispatch { at, .. } | Self::Preempt { at, .. } | Self::Complete { at, .. } => at,
        }
    }
}
