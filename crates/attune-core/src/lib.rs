//! attune-core - Core library for attune.
//!
//! This crate provides the acquisition gating engine for conversational
//! agents: given a candidate utterance and the relational history between a
//! speaker and a target, it decides whether to learn from the utterance now
//! (accept), hold it for later (defer), or discard it (reject).
//!
//! The engine consumes two optional collaborators: a [`RelationalReader`]
//! projecting trust/comfort/stance state for an identity pair, and an
//! [`UtteranceMerger`] that absorbs accepted utterances. Both are external;
//! this crate only defines their contracts.
//!
//! # Example
//!
//! ```ignore
//! use attune_core::{AcquisitionConfig, AcquisitionEngine, Candidate};
//!
//! let mut engine = AcquisitionEngine::new(AcquisitionConfig::default())
//!     .with_relational(relational)
//!     .with_merger(merger);
//!
//! let candidate = Candidate::new("I notice this pattern feels supportive")
//!     .with_speaker("alpha")
//!     .with_target("beta");
//!
//! let decision = engine.consider(&candidate).await?;
//! println!("{} at {:.2}", decision.outcome, decision.score);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod novelty;
pub mod policy;
pub mod scoring;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::AcquisitionConfig;
pub use engine::AcquisitionEngine;
pub use error::{AttuneError, AttuneResult};
pub use novelty::{NoveltyTracker, PairKey, PairMemory};
pub use policy::decide;
pub use scoring::score_candidate;
pub use traits::{
    Interaction, MergeContext, MergePayload, RelationalReader, RelationalState, UtteranceMerger,
};
pub use types::{
    AcquisitionStats, Candidate, Decision, Direction, NoveltyInfo, Outcome, PairStats,
    RelationalSnapshot, StanceBand,
};
