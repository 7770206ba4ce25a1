use crate::counters::EventCounters;
use crate::error::VerifyError;

/// Assert that every launched workflow produced exactly one start/end pair.
///
/// Succeeds only when the expected count equals the observed start count and
/// the start count equals the end count; the error identifies which equality
/// failed.
pub fn verify(expected: u32, counters: &EventCounters) -> Result<(), VerifyError> {
    if u64::from(expected) != counters.started {
        return Err(VerifyError::StartMismatch {
            expected,
            started: counters.started,
        });
    }
    if counters.started != counters.ended {
        return Err(VerifyError::StartEndMismatch {
            started: counters.started,
            ended: counters.ended,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(started: u64, ended: u64) -> EventCounters {
        EventCounters { started, ended }
    }

    #[test]
    fn equal_counts_pass() {
        assert!(verify(3, &counters(3, 3)).is_ok());
        assert!(verify(0, &counters(0, 0)).is_ok());
    }

    #[test]
    fn start_count_mismatch_is_identified() {
        let err = verify(5, &counters(0, 0)).unwrap_err();
        assert_eq!(
            err,
            VerifyError::StartMismatch {
                expected: 5,
                started: 0
            }
        );
    }

    #[test]
    fn start_end_mismatch_is_identified() {
        let err = verify(3, &counters(3, 2)).unwrap_err();
        assert_eq!(
            err,
            VerifyError::StartEndMismatch {
                started: 3,
                ended: 2
            }
        );
    }

    #[test]
    fn failure_message_carries_observed_values() {
        let err = verify(5, &counters(4, 4)).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains('5') && msg.contains('4'));
    }
}
