use std::num::NonZeroU64;

use serde::Serialize;

use super::job::{ProcessSpec, into_records};
use crate::{
    core::{Observer, ProcessRecord, SchedEvent, TimelineSegment},
    error::SimError,
    metrics::{MetricsCalculator, MetricsResult},
    scheduler::{Algorithm, DEFAULT_QUANTUM, Scheduler},
};

/// Everything one algorithm produced for one workload.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub algorithm: Algorithm,
    pub quantum: Option<u64>,
    pub records: Vec<ProcessRecord>,
    pub timeline: Vec<TimelineSegment>,
    #[serde(skip)]
    pub events: Vec<SchedEvent>,
    pub metrics: MetricsResult,
}

/// Validates a workload once and runs any number of schedulers over
/// independent copies of it.
#[derive(Debug)]
pub struct SimulationRunner {
    processes: Vec<ProcessRecord>,
}

impl SimulationRunner {
    pub fn new(specs: &[ProcessSpec]) -> Result<Self, SimError> {
        let processes = into_records(specs)?;
        Ok(Self { processes })
    }

    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    /// Runs `algorithm`. `quantum` is only checked (and only used) for
    /// round robin.
    pub fn run(&self, algorithm: Algorithm, quantum: i64) -> Result<SimulationReport, SimError> {
        let quantum = algorithm
            .needs_quantum()
            .then(|| Self::validate_quantum(quantum))
            .transpose()?;
        let mut scheduler = algorithm.scheduler(quantum.unwrap_or(DEFAULT_QUANTUM));
        self.run_with(scheduler.as_mut(), quantum)
    }

    /// Runs all three algorithms, each on its own copy of the workload.
    pub fn run_all(&self, quantum: i64) -> Result<Vec<SimulationReport>, SimError> {
        let quantum = Self::validate_quantum(quantum)?;
        Algorithm::ALL
            .into_iter()
            .map(|algorithm| {
                let mut scheduler = algorithm.scheduler(quantum);
                let quantum = algorithm.needs_quantum().then_some(quantum);
                self.run_with(scheduler.as_mut(), quantum)
            })
            .collect()
    }

    fn run_with(
        &self,
        scheduler: &mut dyn Scheduler,
        quantum: Option<NonZeroU64>,
    ) -> Result<SimulationReport, SimError> {
        let algorithm = scheduler.algorithm();
        let schedule = scheduler.schedule(self.processes.clone());

        Observer::observe(&schedule.records, &schedule.timeline);

        let metrics = MetricsCalculator::compute(&schedule.records)?;
        tracing::info!(
            %algorithm,
            processes = metrics.process_count,
            segments = schedule.timeline.len(),
            makespan = metrics.makespan,
            avg_waiting = metrics.average_waiting_time,
            avg_turnaround = metrics.average_turnaround_time,
            "simulation finished"
        );

        Ok(SimulationReport {
            algorithm,
            quantum: quantum.map(NonZeroU64::get),
            records: schedule.records,
            timeline: schedule.timeline,
            events: schedule.events,
            metrics,
        })
    }

    fn validate_quantum(quantum: i64) -> Result<NonZeroU64, SimError> {
        u64::try_from(quantum)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or(SimError::InvalidQuantum(quantum))
    }
}
