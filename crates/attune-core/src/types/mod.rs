//! Core types for attune.

mod candidate;
mod decision;
mod snapshot;

pub use candidate::*;
pub use decision::*;
pub use snapshot::*;
