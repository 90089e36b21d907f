//! Utterance merger trait and payload types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AttuneResult;
use crate::types::Direction;

/// Scoring context handed to the merger alongside an accepted utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeContext {
    /// Source tag of the candidate.
    pub source_type: String,
    /// Channel tags of the candidate.
    pub channels: Vec<String>,
    /// Trust level at decision time (0.5 when no snapshot was available).
    pub trust_level: f64,
    /// Comfort level at decision time (0.5 when no snapshot was available).
    pub comfort_level: f64,
    /// The score that cleared the accept threshold.
    pub acquisition_score: f64,
}

/// Payload for one accepted utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergePayload {
    /// Trimmed utterance text.
    pub text: String,
    pub speaker_id: Option<String>,
    pub target_id: Option<String>,
    pub direction: Direction,
    pub context: MergeContext,
}

/// Absorbs accepted utterances into a lexicon or language model.
///
/// The return value is opaque to the engine and is passed through verbatim
/// as the decision's `merger_result`. Errors are not recovered; they
/// propagate to the caller of `consider`.
#[async_trait]
pub trait UtteranceMerger: Send + Sync {
    /// Observe one accepted utterance.
    async fn observe_utterance(&self, payload: MergePayload) -> AttuneResult<serde_json::Value>;
}
