use serde::Serialize;

use super::{
    event::SchedEvent,
    state::{Pid, Ticks},
};

/// One contiguous execution run of a process on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineSegment {
    pub pid: Pid,
    pub start: Ticks,
    pub duration: Ticks,
}

impl TimelineSegment {
    pub fn end(&self) -> Ticks {
        self.start + self.duration
    }
}

/// Append-only record of what a scheduler did, in execution order.
///
/// Adjacent segments of the same pid are kept apart so that every Round
/// Robin slice stays visible.
#[derive(Debug, Default, Clone)]
pub struct TimelineBuilder {
    segments: Vec<TimelineSegment>,
    events: Vec<SchedEvent>,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pid: Pid, start: Ticks, duration: Ticks) {
        debug_assert!(
            self.segments.last().is_none_or(|last| last.end() <= start),
            "Segment for {pid} at {start} overlaps the previous segment"
        );
        self.segments.push(TimelineSegment {
            pid,
            start,
            duration,
        });
        self.events.push(SchedEvent::Dispatch {
            pid,
            at: start,
            slice: duration,
        });
    }

    // Records nothing when there is no gap
    pub fn idle(&mut self, from: Ticks, to: Ticks) {
        if from < to {
            self.events.push(SchedEvent::Idle { from, to });
        }
    }

    pub fn preempt(&mut self, pid: Pid, at: Ticks, remaining: Ticks) {
        self.events.push(SchedEvent::Preempt { pid, at, remaining });
    }

    pub fn complete(&mut self, pid: Pid, at: Ticks) {
        self.events.push(SchedEvent::Complete { pid, at });
    }

    pub fn into_parts(self) -> (Vec<TimelineSegment>, Vec<SchedEvent>) {
        (self.segments, self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_same_pid_slices_apart() {
        let mut timeline = TimelineBuilder::new();
        timeline.push(1, 0, 2);
        timeline.push(1, 2, 2);
        timeline.idle(4, 6);
        timeline.idle(6, 6);
        timeline.push(2, 6, 1);

        let (segments, events) = timeline.into_parts();
        let starts: Vec<_> = segments.iter().map(|s| (s.pid, s.start)).collect();
        assert_eq!(starts, vec![(1, 0), (1, 2), (2, 6)]);
        assert_eq!(segments[2].end(), 7);

        assert_eq!(events.len(), 4);
        assert_eq!(events[2], SchedEvent::Idle { from: 4, to: 6 });
    }
}
