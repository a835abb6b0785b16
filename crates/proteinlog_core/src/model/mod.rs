//! Domain model for protein-intake records.
//!
//! # Responsibility
//! - Define the canonical entry shape shared by store and presentation layers.
//! - Keep the single business rule (strictly positive amounts) in one place.
//!
//! # Invariants
//! - Every entry is identified by a stable `EntryId`.
//! - Removal is permanent; there is no tombstone state.

pub mod entry;
