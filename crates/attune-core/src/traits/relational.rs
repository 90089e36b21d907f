//! Relational store trait and related types.

use serde::{Deserialize, Serialize};

use crate::error::AttuneResult;

/// Raw relational state as reported by the external store.
///
/// Every field is optional; the engine fills gaps with neutral defaults
/// when it normalizes this into a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RelationalState {
    /// Finer-grained stance label (`defensive`, `cautious`, ...).
    pub stance: Option<String>,
    pub trust: Option<f64>,
    pub comfort: Option<f64>,
    pub alignment: Option<f64>,
    pub energy: Option<f64>,
}

/// One interaction record between two identities.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Interaction {
    /// Current relational state for the pair.
    pub state: RelationalState,
}

/// Read access to an external relational store.
///
/// Implementations may fail; the engine treats any error as an unknown
/// relational context and proceeds with neutral defaults. How the store
/// updates trust, comfort or stance is its own business.
pub trait RelationalReader: Send + Sync {
    /// Look up the interaction between an ordered pair of identities.
    fn interaction(&self, speaker_id: &str, target_id: &str) -> AttuneResult<Interaction>;
}
