//! Decision outcomes and per-call result types.

use serde::{Deserialize, Serialize};

use super::{RelationalSnapshot, StanceBand};

/// The three-way gating outcome for a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Learn from the utterance now.
    Accept,
    /// Hold for later reconsideration.
    Defer,
    /// Discard.
    Reject,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Accept => write!(f, "accept"),
            Outcome::Defer => write!(f, "defer"),
            Outcome::Reject => write!(f, "reject"),
        }
    }
}

/// Per-decision novelty readout for an ordered (speaker, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NoveltyInfo {
    /// True on the first observation of this text for this pair.
    pub is_new_for_pair: bool,
    /// Considerations recorded for this pair, including this one.
    pub total_for_pair: u64,
}

/// Process-lifetime decision counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AcquisitionStats {
    pub accepted: u64,
    pub rejected: u64,
    pub deferred: u64,
}

/// Read-only view of one pair's novelty memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PairStats {
    /// Total considerations for the pair, repeats included.
    pub seen_count: u64,
    /// Distinct normalized texts seen for the pair.
    pub unique_texts: usize,
}

/// Result of one `consider` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// Gating outcome.
    pub outcome: Outcome,
    /// Final score, clamped to [0, 1].
    pub score: f64,
    /// Stance band in effect when the decision was reported. Refreshed
    /// after an accepted merge when the store yields a new reading.
    pub stance_band: StanceBand,
    /// Opaque merger result; present only for accepted candidates when a
    /// merger is configured.
    pub merger_result: Option<serde_json::Value>,
    /// Pre-merge relational snapshot, when one could be read.
    pub snapshot: Option<RelationalSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Accept.to_string(), "accept");
        assert_eq!(Outcome::Defer.to_string(), "defer");
        assert_eq!(Outcome::Reject.to_string(), "reject");
    }

    #[test]
    fn test_outcome_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Outcome::Defer).unwrap(),
            "\"defer\""
        );
        let parsed: Outcome = serde_json::from_str("\"accept\"").unwrap();
        assert_eq!(parsed, Outcome::Accept);
    }
}
