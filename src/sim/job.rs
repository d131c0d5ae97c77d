use crate::{
    core::{Pid, ProcessRecord, Ticks},
    error::SimError,
};

/// Unvalidated `(arrival, burst)` pair as supplied by an input provider.
///
/// Signed so that negative values read from a user can be reported instead
/// of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub arrival: i64,
    pub burst: i64,
}

impl ProcessSpec {
    pub fn new(arrival: i64, burst: i64) -> Self {
        Self { arrival, burst }
    }

    fn validate(self, pid: Pid) -> Result<ProcessRecord, SimError> {
        let invalid = || SimError::InvalidProcessValues {
            pid,
            arrival: self.arrival,
            burst: self.burst,
        };
        let arrival = Ticks::try_from(self.arrival).map_err(|_| invalid())?;
        let burst = Ticks::try_from(self.burst).map_err(|_| invalid())?;
        if burst == 0 {
            return Err(invalid());
        }
        Ok(ProcessRecord::new(pid, arrival, burst))
    }
}

impl From<(i64, i64)> for ProcessSpec {
    fn from((arrival, burst): (i64, i64)) -> Self {
        Self::new(arrival, burst)
    }
}

/// Turns raw specs into records, assigning pids 1.. in input order.
///
/// No clock value in any run can exceed the latest arrival plus the total
/// burst, so bounding that sum keeps every scheduler's arithmetic in range.
pub fn into_records(specs: &[ProcessSpec]) -> Result<Vec<ProcessRecord>, SimError> {
    if specs.is_empty() {
        return Err(SimError::EmptyInput);
    }
    let records = specs
        .iter()
        .zip(1..)
        .map(|(spec, pid)| spec.validate(pid))
        .collect::<Result<Vec<_>, _>>()?;

    let latest_arrival = records.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    records
        .iter()
        .try_fold(latest_arrival, |end, p| end.checked_add(p.burst_time))
        .ok_or(SimError::ClockOverflow)?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assigns_pids_in_input_order() {
        let records = into_records(&[ProcessSpec::new(4, 1), ProcessSpec::new(0, 2)]).unwrap();
        assert_eq!(records[0].pid, 1);
        assert_eq!(records[0].arrival_time, 4);
        assert_eq!(records[1].pid, 2);
        assert_eq!(records[1].remaining, 2);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(into_records(&[]), Err(SimError::EmptyInput));
        assert_eq!(
            into_records(&[(0, 1).into(), (-1, 3).into()]),
            Err(SimError::InvalidProcessValues {
                pid: 2,
                arrival: -1,
                burst: 3
            })
        );
        assert_eq!(
            into_records(&[(0, 0).into()]),
            Err(SimError::InvalidProcessValues {
                pid: 1,
                arrival: 0,
                burst: 0
            })
        );
    }

    #[test]
    fn test_rejects_workload_past_clock_range() {
        let max = i64::MAX;
        assert_eq!(
            into_records(&[(0, max).into(), (0, max).into(), (0, 2).into()]),
            Err(SimError::ClockOverflow)
        );
        assert_eq!(
            into_records(&[(max, 1).into(), (0, max).into(), (0, 2).into()]),
            Err(SimError::ClockOverflow)
        );
        // exactly at the top of the range is still fine
        assert!(into_records(&[(0, max).into(), (0, max).into(), (0, 1).into()]).is_ok());
    }
}
