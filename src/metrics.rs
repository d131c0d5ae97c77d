use average::{Estimate, Mean};
use serde::Serialize;

use crate::{
    core::{ProcessRecord, Ticks},
    error::SimError,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsResult {
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
    pub average_response_time: f64,
    /// Busy ticks over makespan; 1.0 for a zero-length run.
    pub cpu_utilisation: f64,
    pub makespan: Ticks,
    pub process_count: usize,
}

pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Reduces a completed run to its averages.
    ///
    /// Fails with [`SimError::EmptyInput`] rather than dividing by zero, and
    /// with [`SimError::IncompleteProcess`] if any record was never finished.
    pub fn compute(records: &[ProcessRecord]) -> Result<MetricsResult, SimError> {
        if records.is_empty() {
            return Err(SimError::EmptyInput);
        }

        let mut waiting = Mean::new();
        let mut turnaround = Mean::new();
        let mut response = Mean::new();
        let mut busy: Ticks = 0;
        let mut makespan: Ticks = 0;

        for record in records {
            let incomplete = || SimError::IncompleteProcess(record.pid);
            waiting.add(record.waiting_time.ok_or_else(incomplete)? as f64);
            turnaround.add(record.turnaround_time.ok_or_else(incomplete)? as f64);
            response.add(record.response_time().ok_or_else(incomplete)? as f64);
            makespan = makespan.max(record.completion.ok_or_else(incomplete)?);
            busy += record.burst_time;
        }

        let cpu_utilisation = if makespan == 0 {
            1.0
        } else {
            busy as f64 / makespan as f64
        };

        Ok(MetricsResult {
            average_waiting_time: waiting.mean(),
            average_turnaround_time: turnaround.mean(),
            average_response_time: response.mean(),
            cpu_utilisation,
            makespan,
            process_count: records.len(),
        })
    }
}
