use rustc_hash::FxHashMap;

use super::{
    state::{Pid, ProcessRecord, Ticks},
    timeline::TimelineSegment,
};

/// Cross-checks a finished run. Every check is a `debug_assert!`.
pub struct Observer;

impl Observer {
    pub fn observe(records: &[ProcessRecord], segments: &[TimelineSegment]) {
        let mut executed: FxHashMap<Pid, Ticks> = FxHashMap::default();
        let mut cpu_free_at = 0;
        for segment in segments {
            debug_assert!(
                segment.start >= cpu_free_at,
                "Segment of {} starts at {} while CPU busy until {cpu_free_at}",
                segment.pid,
                segment.start
            );
            debug_assert!(segment.duration > 0, "Empty segment for {}", segment.pid);
            cpu_free_at = segment.end();
            *executed.entry(segment.pid).or_default() += segment.duration;
        }

        for record in records {
            let pid = record.pid;
            debug_assert!(record.is_completed(), "Process {pid} never completed");
            debug_assert_eq!(record.remaining, 0, "Process {pid} has burst left");
            debug_assert_eq!(
                executed.get(&pid).copied(),
                Some(record.burst_time),
                "Slices of {pid} must sum to its burst"
            );

            let (Some(waiting), Some(turnaround)) = (record.waiting_time, record.turnaround_time)
            else {
                debug_assert!(false, "Process {pid} missing timing");
                continue;
            };
            debug_assert_eq!(
                turnaround,
                waiting + record.burst_time,
                "Process {pid} turnaround must equal waiting + burst"
            );
            debug_assert!(
                record.first_run.is_some_and(|t| t >= record.arrival_time),
                "Process {pid} ran before it arrived"
            );
        }

        debug_assert_eq!(
            executed.len(),
            records.len(),
            "Timeline mentions unknown pids"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(pid: Pid, arrival: Ticks, burst: Ticks, start: Ticks) -> ProcessRecord {
        let mut p = ProcessRecord::new(pid, arrival, burst);
        p.dispatch(start);
        p.execute(burst);
        p.complete(start + burst);
        p
    }

    fn seg(pid: Pid, start: Ticks, duration: Ticks) -> TimelineSegment {
        TimelineSegment {
            pid,
            start,
            duration,
        }
    }

    #[test]
    fn test_accepts_consistent_run() {
        let records = [finished(1, 0, 3, 0), finished(2, 1, 2, 3)];
        Observer::observe(&records, &[seg(1, 0, 3), seg(2, 3, 2)]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "must sum to its burst")]
    fn test_flags_missing_slice() {
        let records = [finished(1, 0, 3, 0), finished(2, 1, 2, 3)];
        Observer::observe(&records, &[seg(1, 0, 3), seg(2, 3, 1)]);
    }
}
