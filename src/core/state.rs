use serde::Serialize;

pub type Pid = u64;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProcessState {
    Waiting,
    Running,
    Completed,
}

/// A process as seen by a single simulation run.
///
/// `pid`, `arrival_time` and `burst_time` are fixed at creation. Everything
/// else is written by the scheduler that owns this copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub remaining: Ticks,
    pub state: ProcessState,
    pub first_run: Option<Ticks>,
    pub completion: Option<Ticks>,
    pub waiting_time: Option<Ticks>,
    pub turnaround_time: Option<Ticks>,
}

impl ProcessRecord {
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            remaining: burst_time,
            state: ProcessState::Waiting,
            first_run: None,
            completion: None,
            waiting_time: None,
            turnaround_time: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }

    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival_time <= now
    }

    // Marks the start of a slice; the first one fixes the response time
    pub fn dispatch(&mut self, now: Ticks) {
        debug_assert!(
            self.state != ProcessState::Completed,
            "Completed process {} cannot be dispatched",
            self.pid
        );
        debug_assert!(
            self.arrival_time <= now,
            "Process {} dispatched at {now} before arrival {}",
            self.pid,
            self.arrival_time
        );
        self.state = ProcessState::Running;
        self.first_run.get_or_insert(now);
    }

    /// Runs the process for `slice` ticks and returns the unexecuted remainder.
    pub fn execute(&mut self, slice: Ticks) -> Ticks {
        debug_assert!(
            slice <= self.remaining,
            "Slice {slice} exceeds remaining burst {} of process {}",
            self.remaining,
            self.pid
        );
        self.remaining = self.remaining.saturating_sub(slice);
        self.remaining
    }

    pub fn preempt(&mut self) {
        debug_assert!(self.remaining > 0, "Preempting finished process {}", self.pid);
        self.state = ProcessState::Waiting;
    }

    /// Finalizes timing at `completion_time`.
    ///
    /// Both times derive from the original burst, never from the last slice:
    /// `turnaround = completion - arrival`, `waiting = turnaround - burst`.
    pub fn complete(&mut self, completion_time: Ticks) {
        debug_assert_eq!(
            self.remaining, 0,
            "Process {} completed with burst left",
            self.pid
        );
        debug_assert!(
            self.state == ProcessState::Running,
            "Process {} must have been running before marked complete",
            self.pid
        );

        let turnaround = completion_time - self.arrival_time;
        self.state = ProcessState::Completed;
        self.completion = Some(completion_time);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
    }

    pub fn response_time(&self) -> Option<Ticks> {
        self.first_run.map(|start| start - self.arrival_time)
    }
}
