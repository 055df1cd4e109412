//! Threshold evaluation of a predicted pollutant vector.

use crate::pollutant::{LimitKind, Pollutant, POLLUTANTS};

/// Outcome of one pollutant's threshold check.
#[derive(Debug, PartialEq, Clone)]
pub enum VerdictStatus {
    Ok,
    /// The reason string, e.g. "Low O2 – Not Safe" or "High NO3 – Not Safe".
    Violation(String),
}

impl VerdictStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, VerdictStatus::Ok)
    }
}

/// One row of a safety-check result: a pollutant, its predicted value
/// rounded to 4 decimals, the limit rule it was checked against, and the
/// pass/fail status.
#[derive(Debug, PartialEq, Clone)]
pub struct Verdict {
    pub pollutant: Pollutant,
    pub predicted: f64,
    pub limit: String,
    pub status: VerdictStatus,
}

/// Round a predicted value to 4 decimal places. Rounding happens before
/// the threshold comparison, so e.g. a raw 0.123456 is judged as 0.1235.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn check(pollutant: Pollutant, rounded: f64) -> VerdictStatus {
    let limit = pollutant.limit();
    if limit.permits(rounded) {
        VerdictStatus::Ok
    } else {
        match limit.kind {
            LimitKind::Minimum => {
                VerdictStatus::Violation(format!("Low {} – Not Safe", pollutant.name()))
            }
            LimitKind::Maximum => {
                VerdictStatus::Violation(format!("High {} – Not Safe", pollutant.name()))
            }
        }
    }
}

/// Evaluate a full predicted vector against the limit table.
///
/// Returns one verdict per pollutant in fixed pollutant order, plus the
/// overall result: true iff every pollutant passed. Pure function of its
/// input.
pub fn evaluate(predicted: &[f64]) -> (Vec<Verdict>, bool) {
    let mut verdicts = Vec::with_capacity(POLLUTANTS.len());
    let mut all_ok = true;
    for (pollutant, value) in POLLUTANTS.iter().zip(predicted) {
        let rounded = round4(*value);
        let status = check(*pollutant, rounded);
        all_ok &= status.is_ok();
        verdicts.push(Verdict {
            pollutant: *pollutant,
            predicted: rounded,
            limit: pollutant.limit().describe(),
            status,
        });
    }
    (verdicts, all_ok)
}

/// Short-circuit variant used by the batch sweep: stops at the first
/// violation. Equivalent to `evaluate(...).1` but never builds the
/// per-pollutant breakdown.
pub fn is_safe(predicted: &[f64]) -> bool {
    POLLUTANTS
        .iter()
        .zip(predicted)
        .all(|(pollutant, value)| check(*pollutant, round4(*value)).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A vector that passes every rule, with O2 and NO3 exactly at their
    /// thresholds.
    const SAFE: [f64; 6] = [6.0, 5.0, 0.05, 100.0, 0.08, 200.0];

    #[test]
    fn test_all_ok_vector() {
        let (verdicts, all_ok) = evaluate(&SAFE);
        assert!(all_ok);
        assert_eq!(verdicts.len(), 6);
        assert!(verdicts.iter().all(|v| v.status.is_ok()));
        assert!(is_safe(&SAFE));
    }

    #[test]
    fn test_low_o2_is_sole_violation() {
        let predicted = [4.0, 5.0, 0.05, 100.0, 0.08, 200.0];
        let (verdicts, all_ok) = evaluate(&predicted);
        assert!(!all_ok);
        let violations: Vec<&Verdict> =
            verdicts.iter().filter(|v| !v.status.is_ok()).collect();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].pollutant, Pollutant::O2);
        assert_eq!(
            violations[0].status,
            VerdictStatus::Violation("Low O2 – Not Safe".to_string())
        );
        assert!(!is_safe(&predicted));
    }

    #[test]
    fn test_o2_boundary_inclusive() {
        // Exactly at the minimum passes; just below fails.
        let mut predicted = SAFE;
        predicted[0] = 5.0;
        assert!(evaluate(&predicted).1);
        predicted[0] = 4.9999;
        assert!(!evaluate(&predicted).1);
    }

    #[test]
    fn test_maximum_limits_inclusive() {
        // Every non-O2 pollutant exactly at its limit passes; one unit
        // above fails.
        for (i, pollutant) in POLLUTANTS.iter().enumerate().skip(1) {
            let threshold = pollutant.limit().threshold;
            let mut predicted = SAFE;
            predicted[i] = threshold;
            assert!(evaluate(&predicted).1, "{} at limit", pollutant.name());
            predicted[i] = threshold + 1.0;
            let (verdicts, all_ok) = evaluate(&predicted);
            assert!(!all_ok, "{} above limit", pollutant.name());
            assert_eq!(
                verdicts[i].status,
                VerdictStatus::Violation(format!("High {} – Not Safe", pollutant.name()))
            );
        }
    }

    #[test]
    fn test_overall_is_and_of_per_pollutant() {
        let vectors = [
            SAFE,
            [4.0, 5.0, 0.05, 100.0, 0.08, 200.0],
            [6.0, 11.0, 0.2, 300.0, 0.2, 300.0],
        ];
        for predicted in &vectors {
            let (verdicts, all_ok) = evaluate(predicted);
            assert_eq!(all_ok, verdicts.iter().all(|v| v.status.is_ok()));
            assert_eq!(all_ok, is_safe(predicted));
        }
    }

    #[test]
    fn test_rounding_before_comparison() {
        assert_eq!(round4(0.123456), 0.1235);
        // 0.10004 rounds down to the NO2 limit and passes; 0.10005 rounds
        // up and fails.
        let mut predicted = SAFE;
        predicted[2] = 0.10004;
        assert!(evaluate(&predicted).1);
        predicted[2] = 0.10006;
        let (verdicts, all_ok) = evaluate(&predicted);
        assert!(!all_ok);
        assert_eq!(verdicts[2].predicted, 0.1001);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let predicted = [5.1, 9.9, 0.09, 249.0, 0.09, 249.0];
        let first = evaluate(&predicted);
        let second = evaluate(&predicted);
        assert_eq!(first, second);
    }

    #[test]
    fn test_verdict_rows_report_rounded_values_and_limits() {
        let predicted = [6.123456, 5.0, 0.05, 100.0, 0.08, 200.0];
        let (verdicts, _) = evaluate(&predicted);
        assert_eq!(verdicts[0].predicted, 6.1235);
        assert_eq!(verdicts[0].limit, ">= 5");
        assert_eq!(verdicts[1].limit, "<= 10");
    }
}
