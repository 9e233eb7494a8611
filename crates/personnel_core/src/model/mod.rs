//! Transfer objects ("datasets") for every personnel aggregate.
//!
//! # Responsibility
//! - Define the flat, storage-agnostic shapes exchanged with bridges.
//! - Keep per-language content in keyed translation nodes.
//!
//! # Invariants
//! - A dataset is importable only once it is marked complete.
//! - Every translation entry is keyed by its own node's language code.

pub mod action;
pub mod auth_log;
pub mod dataset;
pub mod employee;
pub mod entity;
pub mod language;
pub mod log_record;
pub mod position;
pub mod profile;

use serde_json::Value;
use std::collections::BTreeMap;

/// Identifier assigned by the persistence layer on first save.
///
/// Assigned values start at 1; `0` never names a stored record.
pub type RecordId = i64;

/// Unix epoch milliseconds.
pub type Timestamp = i64;

/// Opaque key/value options carried verbatim between dataset and aggregate.
pub type OptionMap = BTreeMap<String, Value>;
