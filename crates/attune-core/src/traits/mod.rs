//! Collaborator traits for attune.

mod merger;
mod relational;

pub use merger::*;
pub use relational::*;
