//! The acquisition engine - orchestrates gating decisions.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AcquisitionConfig;
use crate::error::AttuneResult;
use crate::novelty::{NoveltyTracker, PairKey, PairMemory};
use crate::policy::decide;
use crate::scoring::score_candidate;
use crate::traits::{MergeContext, MergePayload, RelationalReader, UtteranceMerger};
use crate::types::{
    AcquisitionStats, Candidate, Decision, Outcome, PairStats, RelationalSnapshot, StanceBand,
};

/// Gates which utterances a conversational agent learns from.
///
/// Sequences the relational snapshot read, novelty update, scoring and
/// threshold policy, and hands accepted utterances to the merger. The
/// engine owns its novelty memory and counters exclusively; embedders that
/// run concurrently must serialize `consider` calls themselves (one engine
/// per conversation, or single-threaded dispatch).
pub struct AcquisitionEngine {
    config: AcquisitionConfig,
    relational: Option<Arc<dyn RelationalReader>>,
    merger: Option<Arc<dyn UtteranceMerger>>,
    novelty: NoveltyTracker,
    stats: AcquisitionStats,
}

impl Default for AcquisitionEngine {
    fn default() -> Self {
        Self::new(AcquisitionConfig::default())
    }
}

impl AcquisitionEngine {
    /// Create an engine with no collaborators wired.
    pub fn new(config: AcquisitionConfig) -> Self {
        let novelty = NoveltyTracker::new(config.track_by_pair);
        Self {
            config,
            relational: None,
            merger: None,
            novelty,
            stats: AcquisitionStats::default(),
        }
    }

    /// Wire a relational store for snapshot reads.
    pub fn with_relational(mut self, relational: Arc<dyn RelationalReader>) -> Self {
        self.relational = Some(relational);
        self
    }

    /// Wire a merger to absorb accepted utterances.
    pub fn with_merger(mut self, merger: Arc<dyn UtteranceMerger>) -> Self {
        self.merger = Some(merger);
        self
    }

    /// Decide whether to learn from one candidate utterance.
    ///
    /// Whitespace-only text is rejected immediately without touching stats,
    /// novelty memory or either collaborator. Otherwise the candidate is
    /// scored against the relational snapshot and novelty state, counted,
    /// and, on accept, handed to the merger; the snapshot is then re-read
    /// so the reported stance band reflects any shift the merge caused.
    ///
    /// A failed relational read is non-fatal; a failed merger call is
    /// returned to the caller.
    pub async fn consider(&mut self, candidate: &Candidate) -> AttuneResult<Decision> {
        let text = candidate.text.trim();
        if text.is_empty() {
            debug!("Empty candidate text; fast reject");
            return Ok(Decision {
                outcome: Outcome::Reject,
                score: 0.0,
                stance_band: StanceBand::Neutral,
                merger_result: None,
                snapshot: None,
            });
        }

        let speaker = candidate.speaker_id.as_deref();
        let target = candidate.target_id.as_deref();

        let snapshot = self.read_snapshot(speaker, target);
        let novelty = self.novelty.update(speaker, target, text);
        let score = score_candidate(
            text,
            &candidate.source_type,
            &candidate.channels,
            snapshot.as_ref(),
            novelty,
            &self.config,
        );
        let outcome = decide(score, self.config.accept_threshold, self.config.defer_threshold);

        match outcome {
            Outcome::Accept => self.stats.accepted += 1,
            Outcome::Defer => self.stats.deferred += 1,
            Outcome::Reject => self.stats.rejected += 1,
        }

        let mut stance_band = snapshot
            .as_ref()
            .map(|s| s.stance_band)
            .unwrap_or_default();

        let mut merger_result = None;
        if outcome == Outcome::Accept {
            if let Some(merger) = &self.merger {
                let payload = MergePayload {
                    text: text.to_string(),
                    speaker_id: candidate.speaker_id.clone(),
                    target_id: candidate.target_id.clone(),
                    direction: candidate.direction,
                    context: MergeContext {
                        source_type: candidate.source_type.clone(),
                        channels: candidate.channels.clone(),
                        trust_level: snapshot.as_ref().map(|s| s.trust).unwrap_or(0.5),
                        comfort_level: snapshot.as_ref().map(|s| s.comfort).unwrap_or(0.5),
                        acquisition_score: score,
                    },
                };
                merger_result = Some(merger.observe_utterance(payload).await?);

                // The merge may have shifted the pair's stance.
                if let Some(refreshed) = self.read_snapshot(speaker, target) {
                    stance_band = refreshed.stance_band;
                }
            }
        }

        debug!(%outcome, score, %stance_band, "Candidate considered");

        Ok(Decision {
            outcome,
            score,
            stance_band,
            merger_result,
            snapshot,
        })
    }

    /// Snapshot of the running decision counters.
    pub fn stats(&self) -> AcquisitionStats {
        self.stats
    }

    /// Read one pair's novelty counters.
    ///
    /// `None` when pair tracking is disabled; zeros for unseen pairs.
    pub fn pair_stats(&self, speaker_id: &str, target_id: &str) -> Option<PairStats> {
        self.novelty.pair_stats(speaker_id, target_id)
    }

    /// Number of pairs currently held in novelty memory.
    pub fn tracked_pairs(&self) -> usize {
        self.novelty.tracked_pairs()
    }

    /// Drop novelty memory for pairs `keep` rejects. Nothing evicts unless
    /// the embedder calls this.
    pub fn evict_pairs(&mut self, keep: impl FnMut(&PairKey, &PairMemory) -> bool) {
        self.novelty.evict_pairs(keep);
    }

    /// Fetch and normalize the relational snapshot for a pair.
    ///
    /// Absent collaborator, absent identities and lookup failures all yield
    /// `None`; failures are logged rather than surfaced.
    fn read_snapshot(
        &self,
        speaker_id: Option<&str>,
        target_id: Option<&str>,
    ) -> Option<RelationalSnapshot> {
        let relational = self.relational.as_deref()?;
        let speaker = speaker_id?;
        let target = target_id?;

        match relational.interaction(speaker, target) {
            Ok(interaction) => Some(RelationalSnapshot::from_state(interaction.state)),
            Err(error) => {
                warn!(%speaker, %target, %error, "Relational lookup failed; treating context as unknown");
                None
            }
        }
    }
}
