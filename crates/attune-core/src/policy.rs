//! Threshold policy mapping scores to outcomes.

use crate::types::Outcome;

/// Map a score onto the three-way outcome.
///
/// Evaluated in order: accept wins at or above `accept_threshold`, defer at
/// or above `defer_threshold`, reject otherwise. Total; no failure modes.
pub fn decide(score: f64, accept_threshold: f64, defer_threshold: f64) -> Outcome {
    if score >= accept_threshold {
        Outcome::Accept
    } else if score >= defer_threshold {
        Outcome::Defer
    } else {
        Outcome::Reject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(decide(0.6, 0.6, 0.4), Outcome::Accept);
        assert_eq!(decide(0.4, 0.6, 0.4), Outcome::Defer);
        assert_eq!(decide(0.39, 0.6, 0.4), Outcome::Reject);
    }

    #[test]
    fn test_monotonic_in_score() {
        let rank = |outcome: Outcome| match outcome {
            Outcome::Reject => 0,
            Outcome::Defer => 1,
            Outcome::Accept => 2,
        };
        let mut previous = 0;
        for step in 0..=100 {
            let score = step as f64 / 100.0;
            let current = rank(decide(score, 0.6, 0.4));
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_inverted_thresholds_degrade_gracefully() {
        // accept below defer leaves no defer band; still total.
        assert_eq!(decide(0.5, 0.3, 0.6), Outcome::Accept);
        assert_eq!(decide(0.2, 0.3, 0.6), Outcome::Reject);
    }
}
