//! Candidate utterances presented to the acquisition engine.

use serde::{Deserialize, Serialize};

/// Direction of an utterance relative to the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Heard from the conversation partner.
    #[default]
    Incoming,
    /// Produced by the agent itself.
    Outgoing,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Incoming => write!(f, "incoming"),
            Direction::Outgoing => write!(f, "outgoing"),
        }
    }
}

/// One utterance being evaluated for learning.
///
/// Candidates are transient: the engine reads them, records the normalized
/// text in its novelty memory, and drops them. `source_type` and `channels`
/// are free-form tags; `"user"`, `"system"`, `"high-engagement"` and
/// `"low-signal"` carry scoring weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Raw utterance text.
    pub text: String,
    /// Identity of the speaker, when known.
    pub speaker_id: Option<String>,
    /// Identity of the target, when known.
    pub target_id: Option<String>,
    /// Direction of the utterance.
    pub direction: Direction,
    /// Free-form origin tag (`user`, `system`, `internal`, ...).
    pub source_type: String,
    /// Free-form channel tags.
    pub channels: Vec<String>,
}

impl Candidate {
    /// Create a candidate with the given text and neutral defaults.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker_id: None,
            target_id: None,
            direction: Direction::default(),
            source_type: "user".to_string(),
            channels: Vec::new(),
        }
    }

    /// Set the speaker identity.
    pub fn with_speaker(mut self, speaker_id: impl Into<String>) -> Self {
        self.speaker_id = Some(speaker_id.into());
        self
    }

    /// Set the target identity.
    pub fn with_target(mut self, target_id: impl Into<String>) -> Self {
        self.target_id = Some(target_id.into());
        self
    }

    /// Set the direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the source type tag.
    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = source_type.into();
        self
    }

    /// Append a channel tag.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channels.push(channel.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_builder() {
        let candidate = Candidate::new("hello there")
            .with_speaker("alpha")
            .with_target("beta")
            .with_direction(Direction::Outgoing)
            .with_source_type("internal")
            .with_channel("high-engagement")
            .with_channel("low-signal");

        assert_eq!(candidate.text, "hello there");
        assert_eq!(candidate.speaker_id, Some("alpha".to_string()));
        assert_eq!(candidate.target_id, Some("beta".to_string()));
        assert_eq!(candidate.direction, Direction::Outgoing);
        assert_eq!(candidate.source_type, "internal");
        assert_eq!(candidate.channels.len(), 2);
    }

    #[test]
    fn test_candidate_defaults() {
        let candidate = Candidate::new("hi");
        assert_eq!(candidate.direction, Direction::Incoming);
        assert_eq!(candidate.source_type, "user");
        assert!(candidate.speaker_id.is_none());
        assert!(candidate.channels.is_empty());
    }
}
