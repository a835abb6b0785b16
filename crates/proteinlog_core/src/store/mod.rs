//! Entry store and its notification contract.
//!
//! # Responsibility
//! - Own all mutation logic for entries and the daily goal.
//! - Keep presentation layers decoupled from state internals via
//!   snapshots and observer callbacks.

pub mod observer;
pub mod tracker;
