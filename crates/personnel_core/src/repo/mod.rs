//! Collaborator contracts consumed around the bridges.
//!
//! # Responsibility
//! - Define how foreign-key ids are resolved into references.
//! - Define how mutated aggregates are committed and loaded again.
//!
//! # Invariants
//! - Bridges only ever see the resolver; committing is done by callers.
//! - Identifiers are assigned by the store on first commit and never change.

pub mod reference;
pub mod store;
