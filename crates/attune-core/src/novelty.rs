//! Per-pair novelty memory.
//!
//! Tracks which normalized texts each ordered (speaker, target) pair has
//! already produced. Memory grows for the engine's lifetime; nothing evicts
//! by default, but `evict_pairs` is exposed so an embedder can cap growth.

use std::collections::{HashMap, HashSet};

use crate::types::{NoveltyInfo, PairStats};

/// Ordered identity pair. Speaker→target and target→speaker are distinct
/// keys; using a composite key rather than a joined string keeps identities
/// containing separators unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub speaker: String,
    pub target: String,
}

impl PairKey {
    pub fn new(speaker: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            target: target.into(),
        }
    }
}

/// Accumulated novelty state for one pair.
#[derive(Debug, Clone, Default)]
pub struct PairMemory {
    /// Total considerations, repeats included.
    pub count: u64,
    /// Distinct lower-cased trimmed texts seen so far.
    pub seen_texts: HashSet<String>,
}

/// Tracks text novelty per ordered identity pair.
#[derive(Debug, Default)]
pub struct NoveltyTracker {
    enabled: bool,
    pairs: HashMap<PairKey, PairMemory>,
}

impl NoveltyTracker {
    /// Create a tracker; a disabled tracker never records anything and
    /// reports every candidate as a repeat.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            pairs: HashMap::new(),
        }
    }

    /// Record one consideration of `text` for the given pair.
    ///
    /// The count is incremented on every call, repeats included; novelty is
    /// judged against the seen set before the text is inserted, so the
    /// first observation of a pair/text combination reports new and every
    /// later identical text does not.
    pub fn update(
        &mut self,
        speaker_id: Option<&str>,
        target_id: Option<&str>,
        text: &str,
    ) -> NoveltyInfo {
        let (Some(speaker), Some(target)) = (speaker_id, target_id) else {
            return NoveltyInfo::default();
        };
        if !self.enabled {
            return NoveltyInfo::default();
        }

        let entry = self.pairs.entry(PairKey::new(speaker, target)).or_default();
        entry.count += 1;

        let normalized = text.trim().to_lowercase();
        let is_new = !entry.seen_texts.contains(&normalized);
        if is_new {
            entry.seen_texts.insert(normalized);
        }

        NoveltyInfo {
            is_new_for_pair: is_new,
            total_for_pair: entry.count,
        }
    }

    /// Read one pair's counters without mutating anything.
    ///
    /// Returns `None` when tracking is disabled and zeros for pairs that
    /// have never been considered.
    pub fn pair_stats(&self, speaker_id: &str, target_id: &str) -> Option<PairStats> {
        if !self.enabled {
            return None;
        }
        let stats = self
            .pairs
            .get(&PairKey::new(speaker_id, target_id))
            .map(|memory| PairStats {
                seen_count: memory.count,
                unique_texts: memory.seen_texts.len(),
            })
            .unwrap_or_default();
        Some(stats)
    }

    /// Number of pairs currently tracked.
    pub fn tracked_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Drop pairs for which `keep` returns false.
    ///
    /// Extension point for embedders that need to bound memory in
    /// long-lived processes; nothing in the engine calls this.
    pub fn evict_pairs(&mut self, mut keep: impl FnMut(&PairKey, &PairMemory) -> bool) {
        self.pairs.retain(|key, memory| keep(key, memory));
    }
}
