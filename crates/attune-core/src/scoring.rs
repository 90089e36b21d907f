//! Candidate scoring.
//!
//! A pure additive model over text shape, source, relational context,
//! novelty and channel tags. All thresholds come from the configuration;
//! the result is clamped to [0, 1].

use crate::config::AcquisitionConfig;
use crate::types::{NoveltyInfo, RelationalSnapshot, StanceBand};

const BASE_SCORE: f64 = 0.4;

/// Score one candidate. Referentially transparent; no side effects.
pub fn score_candidate(
    text: &str,
    source_type: &str,
    channels: &[String],
    snapshot: Option<&RelationalSnapshot>,
    novelty: NoveltyInfo,
    config: &AcquisitionConfig,
) -> f64 {
    let mut score = BASE_SCORE;

    // Length shaping. Word counts between ideal_max and long_warn sit in a
    // deliberate neutral band and get no adjustment.
    let length = text.split_whitespace().count();
    let ideal_max = config.max_text_length / 5;
    let long_warn = config.max_text_length / 2;
    if length >= config.min_text_length && length <= ideal_max {
        score += 0.1;
    } else if length > long_warn {
        score -= 0.1;
    } else if length < config.min_text_length {
        score -= 0.1;
    }

    match source_type {
        "user" => score += 0.05,
        "system" => score -= 0.05,
        _ => {}
    }

    if let Some(snapshot) = snapshot {
        if snapshot.trust > 0.7 {
            score += 0.15;
        } else if snapshot.trust < 0.3 {
            score -= 0.15;
        }
        if snapshot.comfort > 0.7 {
            score += 0.1;
        } else if snapshot.comfort < 0.3 {
            score -= 0.1;
        }
        match snapshot.stance_band {
            StanceBand::Supportive => score += 0.05,
            StanceBand::Defensive => score -= 0.05,
            StanceBand::Neutral => {}
        }
    }

    if novelty.is_new_for_pair {
        score += 0.1;
    } else {
        score -= 0.02;
    }

    // Channel checks are independent; a candidate can carry both.
    if channels.iter().any(|c| c == "high-engagement") {
        score += 0.05;
    }
    if channels.iter().any(|c| c == "low-signal") {
        score -= 0.05;
    }

    score.clamp(0.0, 1.0)
}
