use std::fmt;

use crate::core::Pid;

/// Everything that can stop a simulation before it starts.
///
/// The schedulers themselves never fail; all of these are raised while
/// validating input or assembling results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    EmptyInput,
    InvalidQuantum(i64),
    InvalidProcessValues { pid: Pid, arrival: i64, burst: i64 },
    InvalidSelection(String),
    MalformedWorkload { line: usize, reason: String },
    ClockOverflow,
    IncompleteProcess(Pid),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::EmptyInput => write!(f, "empty input: at least one process is required"),
            SimError::InvalidQuantum(q) => {
                write!(f, "invalid quantum {q}: round robin needs a positive time slice")
            }
            SimError::InvalidProcessValues {
                pid,
                arrival,
                burst,
            } => write!(
                f,
                "invalid values for process P{pid}: arrival {arrival} must be >= 0 and burst {burst} must be > 0"
            ),
            SimError::InvalidSelection(choice) => write!(
                f,
                "invalid choice '{choice}': expected one of fcfs (1), sjf (2), rr (3)"
            ),
            SimError::MalformedWorkload { line, reason } => {
                write!(f, "malformed workload at line {line}: {reason}")
            }
            SimError::ClockOverflow => write!(
                f,
                "workload too long: latest arrival plus total burst exceeds the simulation clock"
            ),
            SimError::IncompleteProcess(pid) => {
                write!(f, "process P{pid} has not completed")
            }
        }
    }
}

impl std::error::Error for SimError {}
