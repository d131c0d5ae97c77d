use super::{Algorithm, Schedule, Scheduler, idle_until, run_to_completion};
use crate::core::{ProcessRecord, Ticks, TimelineBuilder};

/// Non-preemptive shortest-job-first.
///
/// At every decision point the arrived process with the smallest burst runs
/// to completion. Ties go to the earlier arrival, then to the lower pid.
pub struct SjfScheduler;

impl SjfScheduler {
    // Linear scan keeps the tie-break easy to audit
    fn pick(pending: &[ProcessRecord], now: Ticks) -> Option<usize> {
        pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_arrived(now))
            .min_by_key(|(_, p)| (p.burst_time, p.arrival_time, p.pid))
            .map(|(index, _)| index)
    }
}

impl Scheduler for SjfScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn schedule(&mut self, mut pending: Vec<ProcessRecord>) -> Schedule {
        let mut timeline = TimelineBuilder::new();
        let mut completed = Vec::with_capacity(pending.len());
        let mut now = 0;

        while !pending.is_empty() {
            let Some(index) = Self::pick(&pending, now) else {
                // Nothing has arrived yet: skip straight to the next arrival
                let next_arrival = pending
                    .iter()
                    .map(|p| p.arrival_time)
                    .min()
                    .unwrap_or(now);
                now = idle_until(&mut timeline, now, next_arrival);
                continue;
            };

            let mut process = pending.remove(index);
            now = run_to_completion(&mut timeline, &mut process, now);
            completed.push(process);
        }

        Schedule::finish(completed, timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(input: &[(u64, u64)]) -> Vec<ProcessRecord> {
        input
            .iter()
            .enumerate()
            .map(|(i, &(arrival, burst))| ProcessRecord::new(i as u64 + 1, arrival, burst))
            .collect()
    }

    fn run_order(schedule: &Schedule) -> Vec<(u64, u64, u64)> {
        schedule
            .timeline
            .iter()
            .map(|s| (s.pid, s.start, s.end()))
            .collect()
    }

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        let schedule = SjfScheduler.schedule(records(&[(0, 7), (2, 4), (4, 1), (5, 4)]));

        assert_eq!(
            run_order(&schedule),
            vec![(1, 0, 7), (3, 7, 8), (2, 8, 12), (4, 12, 16)]
        );
        let waiting: Vec<_> = schedule.records.iter().map(|p| p.waiting_time.unwrap()).collect();
        assert_eq!(waiting, vec![0, 6, 3, 7]);
    }

    #[test]
    fn test_sjf_tie_breaks_on_arrival_then_pid() {
        // pid 2 and 3 share burst 3; pid 3 arrived first. pid 4 ties pid 3 fully but has a higher pid.
        let schedule = SjfScheduler.schedule(records(&[(0, 4), (2, 3), (1, 3), (1, 3)]));

        let order: Vec<_> = schedule.timeline.iter().map(|s| s.pid).collect();
        assert_eq!(order, vec![1, 3, 4, 2]);
    }

    #[test]
    fn test_sjf_jumps_over_idle_gap() {
        let schedule = SjfScheduler.schedule(records(&[(10, 2), (3, 5)]));

        assert_eq!(run_order(&schedule), vec![(2, 3, 8), (1, 10, 12)]);
        assert_eq!(schedule.records[0].waiting_time, Some(0));
        assert_eq!(schedule.records[1].waiting_time, Some(0));
    }

    #[test]
    fn test_sjf_does_not_preempt() {
        let schedule = SjfScheduler.schedule(records(&[(0, 10), (1, 1)]));

        assert_eq!(run_order(&schedule), vec![(1, 0, 10), (2, 10, 11)]);
        assert_eq!(schedule.records[1].waiting_time, Some(9));
    }
}
