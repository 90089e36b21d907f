//! Relational snapshots read from the external relational store.

use serde::{Deserialize, Serialize};

use crate::traits::RelationalState;

/// Coarse three-way classification of a relational stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StanceBand {
    /// Guarded; learning is discounted.
    Defensive,
    /// Unknown or middle-ground stance.
    #[default]
    Neutral,
    /// Open; learning is favored.
    Supportive,
}

impl StanceBand {
    /// Classify a free-form stance label into a band.
    ///
    /// Matching is case-insensitive; unrecognized stances are neutral.
    pub fn from_stance(stance: &str) -> Self {
        match stance.to_lowercase().as_str() {
            "defensive" => StanceBand::Defensive,
            "cautious" => StanceBand::Neutral,
            "collaborative" | "intimate" => StanceBand::Supportive,
            _ => StanceBand::Neutral,
        }
    }
}

impl std::fmt::Display for StanceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StanceBand::Defensive => write!(f, "defensive"),
            StanceBand::Neutral => write!(f, "neutral"),
            StanceBand::Supportive => write!(f, "supportive"),
        }
    }
}

/// Read-only projection of relational state at decision time.
///
/// Numeric levels are nominally in 0-1 but are taken as the store reports
/// them; this component never clamps them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationalSnapshot {
    pub trust: f64,
    pub comfort: f64,
    pub alignment: f64,
    pub energy: f64,
    /// Finer-grained stance label as reported by the store.
    pub stance: String,
    /// Band derived from `stance`.
    pub stance_band: StanceBand,
}

impl RelationalSnapshot {
    /// Normalize raw relational state into a snapshot.
    ///
    /// Missing numeric levels default to a neutral 0.5; a missing stance
    /// defaults to `cautious`.
    pub fn from_state(state: RelationalState) -> Self {
        let stance = state.stance.unwrap_or_else(|| "cautious".to_string());
        let stance_band = StanceBand::from_stance(&stance);
        Self {
            trust: state.trust.unwrap_or(0.5),
            comfort: state.comfort.unwrap_or(0.5),
            alignment: state.alignment.unwrap_or(0.5),
            energy: state.energy.unwrap_or(0.5),
            stance,
            stance_band,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stance_band_mapping() {
        assert_eq!(StanceBand::from_stance("defensive"), StanceBand::Defensive);
        assert_eq!(StanceBand::from_stance("cautious"), StanceBand::Neutral);
        assert_eq!(
            StanceBand::from_stance("collaborative"),
            StanceBand::Supportive
        );
        assert_eq!(StanceBand::from_stance("intimate"), StanceBand::Supportive);
        assert_eq!(StanceBand::from_stance("wary"), StanceBand::Neutral);
        assert_eq!(StanceBand::from_stance(""), StanceBand::Neutral);
    }

    #[test]
    fn test_stance_band_case_insensitive() {
        assert_eq!(StanceBand::from_stance("Defensive"), StanceBand::Defensive);
        assert_eq!(StanceBand::from_stance("INTIMATE"), StanceBand::Supportive);
    }

    #[test]
    fn test_snapshot_defaults() {
        let snapshot = RelationalSnapshot::from_state(RelationalState::default());
        assert_eq!(snapshot.trust, 0.5);
        assert_eq!(snapshot.comfort, 0.5);
        assert_eq!(snapshot.alignment, 0.5);
        assert_eq!(snapshot.energy, 0.5);
        assert_eq!(snapshot.stance, "cautious");
        assert_eq!(snapshot.stance_band, StanceBand::Neutral);
    }

    #[test]
    fn test_snapshot_passes_levels_through_unclamped() {
        let state = RelationalState {
            stance: Some("collaborative".to_string()),
            trust: Some(1.4),
            comfort: Some(-0.2),
            alignment: None,
            energy: Some(0.9),
        };
        let snapshot = RelationalSnapshot::from_state(state);
        assert_eq!(snapshot.trust, 1.4);
        assert_eq!(snapshot.comfort, -0.2);
        assert_eq!(snapshot.alignment, 0.5);
        assert_eq!(snapshot.stance_band, StanceBand::Supportive);
    }
}
