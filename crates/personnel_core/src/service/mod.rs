//! Core use-case services.
//!
//! # Responsibility
//! - Compose bridges, the reference resolver, the clock and a store into
//!   load → import → commit → read-back flows.
//! - Keep callers decoupled from aggregate internals: they exchange datasets only.

pub mod dataset_service;
