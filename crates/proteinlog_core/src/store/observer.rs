//! Change notification contract for the tracker.
//!
//! # Responsibility
//! - Define the event vocabulary emitted after each successful mutation.
//! - Define the callback interface render layers implement.
//!
//! # Invariants
//! - Observers fire exactly once per successful mutation, after derived
//!   values have been recomputed.
//! - Rejected operations emit nothing.

use crate::model::entry::EntryId;
use crate::store::tracker::TrackerSnapshot;

/// Handle identifying a registered observer.
///
/// Returned by `ProteinTracker::add_observer` and accepted by
/// `remove_observer`. Handles are never reused within a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// State change emitted by the tracker after a successful mutation.
///
/// Events carry the delta; the accompanying snapshot carries the resulting
/// state, so observers never need to reconstruct either.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerEvent {
    EntryAdded {
        id: EntryId,
        amount_grams: f64,
    },
    EntryRemoved {
        id: EntryId,
        amount_grams: f64,
    },
    EntryUpdated {
        id: EntryId,
        old_amount_grams: f64,
        new_amount_grams: f64,
    },
    GoalChanged {
        old_grams: f64,
        new_grams: f64,
    },
}

impl TrackerEvent {
    /// Stable snake_case kind name, used in diagnostics output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EntryAdded { .. } => "entry_added",
            Self::EntryRemoved { .. } => "entry_removed",
            Self::EntryUpdated { .. } => "entry_updated",
            Self::GoalChanged { .. } => "goal_changed",
        }
    }
}

/// Callback interface for layers that render tracker state.
///
/// Register an `Arc<dyn TrackerObserver>` with
/// `ProteinTracker::add_observer`. Callbacks run synchronously on the
/// mutating call; implementations should render and return.
pub trait TrackerObserver {
    fn on_change(&self, event: &TrackerEvent, snapshot: &TrackerSnapshot);
}
