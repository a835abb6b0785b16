//! Core domain logic for proteinlog.
//! This crate is the single source of truth for tracking invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{validate_amount, EntryId, EntryValidationError, ProteinEntry};
pub use store::observer::{ObserverId, TrackerEvent, TrackerObserver};
pub use store::tracker::{
    ProteinTracker, TrackerError, TrackerResult, TrackerSnapshot, DEFAULT_DAILY_GOAL_GRAMS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
