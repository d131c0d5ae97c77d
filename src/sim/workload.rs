//! Input providers: text workloads, `A:B` command-line pairs and a seeded
//! random generator.

use rand::prelude::*;

use super::job::ProcessSpec;
use crate::error::SimError;

/// Parses one `arrival burst` pair per line.
///
/// Blank lines and anything after `#` are ignored. Line numbers in errors
/// are 1-based.
pub fn parse_workload(text: &str) -> Result<Vec<ProcessSpec>, SimError> {
    let mut specs = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let malformed = |reason: String| SimError::MalformedWorkload { line, reason };
        let fields: Vec<&str> = content.split_whitespace().collect();
        let [arrival, burst] = fields.as_slice() else {
            return Err(malformed(format!(
                "expected 2 fields (arrival burst), found {}",
                fields.len()
            )));
        };

        specs.push(ProcessSpec::new(
            parse_field(arrival, "arrival").map_err(malformed)?,
            parse_field(burst, "burst").map_err(malformed)?,
        ));
    }

    Ok(specs)
}

/// Parses the `arrival:burst` form used on the command line.
pub fn parse_process_arg(arg: &str) -> Result<ProcessSpec, String> {
    let (arrival, burst) = arg
        .split_once(':')
        .ok_or_else(|| format!("'{arg}' is not of the form ARRIVAL:BURST"))?;
    Ok(ProcessSpec::new(
        parse_field(arrival.trim(), "arrival")?,
        parse_field(burst.trim(), "burst")?,
    ))
}

fn parse_field(value: &str, name: &str) -> Result<i64, String> {
    value
        .parse()
        .map_err(|_| format!("{name} '{value}' is not an integer"))
}

/// Random workload over `ticks` time units.
///
/// Each tick a process arrives with probability `p_arrival`; it is short
/// with probability `p_short`. Same seed, same workload.
pub fn bernoulli_workload(
    ticks: u64,
    p_arrival: f64,
    p_short: f64,
    short_ticks: u64,
    long_ticks: u64,
    seed: u64,
) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut specs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };
            specs.push(ProcessSpec::new(t as i64, burst as i64));
        }
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_pairs_comments_and_blanks() {
        let text = "# arrival burst\n0 5\n\n1 3   # late\n  2\t8\n";
        let specs = parse_workload(text).unwrap();
        assert_eq!(
            specs,
            vec![
                ProcessSpec::new(0, 5),
                ProcessSpec::new(1, 3),
                ProcessSpec::new(2, 8)
            ]
        );
    }

    #[test]
    fn test_reports_malformed_line_number() {
        let err = parse_workload("0 5\n1\n").unwrap_err();
        assert!(matches!(err, SimError::MalformedWorkload { line: 2, .. }));

        let err = parse_workload("0 5\n\n1 x\n").unwrap_err();
        assert!(matches!(err, SimError::MalformedWorkload { line: 3, .. }));
    }

    #[test]
    fn test_negative_values_survive_parsing() {
        // rejected later, by validation, with the pid attached
        assert_eq!(parse_workload("-1 4").unwrap(), vec![ProcessSpec::new(-1, 4)]);
    }

    #[test]
    fn test_parses_process_arg() {
        assert_eq!(parse_process_arg("3:5"), Ok(ProcessSpec::new(3, 5)));
        assert!(parse_process_arg("35").is_err());
        assert!(parse_process_arg("a:5").is_err());
    }

    #[test]
    fn test_bernoulli_is_deterministic_per_seed() {
        let a = bernoulli_workload(200, 0.3, 0.3, 2, 6, 7);
        let b = bernoulli_workload(200, 0.3, 0.3, 2, 6, 7);
        assert_eq!(a, b);
        assert!(!a.is_empty());
        assert!(a.windows(2).all(|w| w[0].arrival < w[1].arrival));
        assert!(a.iter().all(|s| s.burst == 2 || s.burst == 6));
    }
}
