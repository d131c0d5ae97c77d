//! Text rendering of simulation results.

use crate::{
    core::{ProcessRecord, SchedEvent, TimelineSegment},
    metrics::MetricsResult,
    sim::SimulationReport,
};

const IDLE_LABEL: &str = "--";

/// Draws a Gantt chart: a bar row with one cell per segment (idle gaps get
/// their own cell) and a time axis whose last mark is the end of the final
/// segment.
pub fn render_gantt(segments: &[TimelineSegment]) -> String {
    let Some(last) = segments.last() else {
        return String::new();
    };

    let mut cells: Vec<(String, u64)> = Vec::with_capacity(segments.len());
    let mut cursor = 0;
    for segment in segments {
        if segment.start > cursor {
            cells.push((IDLE_LABEL.to_owned(), cursor));
        }
        cells.push((format!("P{}", segment.pid), segment.start));
        cursor = segment.end();
    }
    let end = last.end();

    let width = cells
        .iter()
        .map(|(label, start)| label.len().max(start.to_string().len()))
        .chain(std::iter::once(end.to_string().len()))
        .max()
        .unwrap_or(0)
        + 2;

    let bar: String = cells
        .iter()
        .map(|(label, _)| format!("|{label:^width$}"))
        .collect();
    let axis: String = cells
        .iter()
        .map(|(_, start)| format!("{start:<w$}", w = width + 1))
        .collect();

    format!("{bar}|\n{axis}{end}\n")
}

pub fn render_table(records: &[ProcessRecord]) -> String {
    let mut out = format!(
        "{:<5} {:>8} {:>6} {:>10} {:>8} {:>10} {:>8}\n",
        "PID", "Arrival", "Burst", "Completion", "Waiting", "Turnaround", "Response"
    );
    let opt = |v: Option<u64>| v.map_or_else(|| "-".to_owned(), |v| v.to_string());
    for p in records {
        out.push_str(&format!(
            "{:<5} {:>8} {:>6} {:>10} {:>8} {:>10} {:>8}\n",
            format!("P{}", p.pid),
            p.arrival_time,
            p.burst_time,
            opt(p.completion),
            opt(p.waiting_time),
            opt(p.turnaround_time),
            opt(p.response_time()),
        ));
    }
    out
}

pub fn render_metrics(metrics: &MetricsResult) -> String {
    format!(
        "Average Waiting Time: {:.2}\n\
         Average Turnaround Time: {:.2}\n\
         Average Response Time: {:.2}\n\
         CPU Utilisation: {:.1}%\n\
         Makespan: {}\n",
        metrics.average_waiting_time,
        metrics.average_turnaround_time,
        metrics.average_response_time,
        metrics.cpu_utilisation * 100.0,
        metrics.makespan,
    )
}

pub fn render_events(events: &[SchedEvent]) -> String {
    events
        .iter()
        .map(|event| format!("t={} {:?}\n", event.time(), event))
        .collect()
}

/// Full report for one run: Gantt chart, per-process table and metrics.
pub fn render_report(report: &SimulationReport) -> String {
    let title = match report.quantum {
        Some(q) => format!("{} (quantum = {q})", report.algorithm),
        None => report.algorithm.to_string(),
    };
    format!(
        "Simulating {title}...\n\nGantt Chart:\n{}\n{}\nPerformance Metrics:\n{}",
        render_gantt(&report.timeline),
        render_table(&report.records),
        render_metrics(&report.metrics),
    )
}

pub fn render_comparison(reports: &[SimulationReport]) -> String {
    let mut out = format!(
        "{:<12} {:>12} {:>15} {:>13} {:>9}\n",
        "Algorithm", "Avg Waiting", "Avg Turnaround", "Avg Response", "Makespan"
    );
    for report in reports {
        let m = &report.metrics;
        out.push_str(&format!(
            "{:<12} {:>12.2} {:>15.2} {:>13.2} {:>9}\n",
            report.algorithm.to_string(),
            m.average_waiting_time,
            m.average_turnaround_time,
            m.average_response_time,
            m.makespan,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(pid: u64, start: u64, duration: u64) -> TimelineSegment {
        TimelineSegment {
            pid,
            start,
            duration,
        }
    }

    #[test]
    fn test_gantt_axis_ends_at_makespan() {
        let chart = render_gantt(&[seg(1, 0, 5), seg(2, 5, 3), seg(3, 8, 8)]);
        let lines: Vec<_> = chart.lines().collect();

        assert_eq!(lines[0], "| P1 | P2 | P3 |");
        assert_eq!(lines[1], "0    5    8    16");
    }

    #[test]
    fn test_gantt_draws_idle_gaps() {
        let chart = render_gantt(&[seg(1, 0, 2), seg(2, 6, 2)]);
        let lines: Vec<_> = chart.lines().collect();

        assert_eq!(lines[0], "| P1 | -- | P2 |");
        assert_eq!(lines[1], "0    2    6    8");
    }

    #[test]
    fn test_gantt_empty_timeline() {
        assert_eq!(render_gantt(&[]), "");
    }

    #[test]
    fn test_metrics_use_two_decimals() {
        let metrics = MetricsResult {
            average_waiting_time: 10.0 / 3.0,
            average_turnaround_time: 26.0 / 3.0,
            average_response_time: 10.0 / 3.0,
            cpu_utilisation: 1.0,
            makespan: 16,
            process_count: 3,
        };
        let text = render_metrics(&metrics);

        assert!(text.contains("Average Waiting Time: 3.33"));
        assert!(text.contains("Average Turnaround Time: 8.67"));
        assert!(text.contains("CPU Utilisation: 100.0%"));
    }

    #[test]
    fn test_events_are_prefixed_with_time() {
        let text = render_events(&[SchedEvent::Idle { from: 2, to: 5 }]);
        assert_eq!(text, "t=2 Idle { from: 2, to: 5 }\n");
    }
}
