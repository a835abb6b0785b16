//! Entry store: the state container for daily protein tracking.
//!
//! # Responsibility
//! - Own entries and the daily goal; expose derived reads over them.
//! - Validate every mutation before touching state.
//! - Notify registered observers after each successful mutation.
//!
//! # Invariants
//! - `total_consumed()` always equals the sum of current entries' amounts;
//!   the total is recomputed from `entries` on read, never cached.
//! - `remaining_goal()` is never negative.
//! - Mutating lookups are identifier-based; indices are not part of the API.

use crate::clock::{Clock, SystemClock};
use crate::model::entry::{validate_amount, EntryId, EntryValidationError, ProteinEntry};
use crate::store::observer::{ObserverId, TrackerEvent, TrackerObserver};
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Daily goal in grams for a freshly created tracker.
pub const DEFAULT_DAILY_GOAL_GRAMS: f64 = 100.0;

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Error for store mutations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerError {
    /// Input failed the amount rule; state is unchanged.
    Validation(EntryValidationError),
    /// The referenced entry does not exist (or was already removed).
    NotFound(EntryId),
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "entry not found: {id}"),
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<EntryValidationError> for TrackerError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Render-ready view of the tracker state.
///
/// Produced fresh for every observer notification and on demand via
/// [`ProteinTracker::snapshot`]; holds no references into the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerSnapshot {
    pub daily_goal_grams: f64,
    pub total_consumed_grams: f64,
    /// `max(0, goal - consumed)`; floored, never negative.
    pub remaining_goal_grams: f64,
    /// Today's entries in insertion order.
    pub today: Vec<ProteinEntry>,
}

/// In-memory entry store with a subscribe/notify contract.
///
/// Single-threaded by design: mutations take `&mut self` and observers run
/// synchronously on the mutating call, so a render pass always sees the
/// state its event describes.
pub struct ProteinTracker<C: Clock = SystemClock> {
    clock: C,
    daily_goal_grams: f64,
    entries: Vec<ProteinEntry>,
    observers: Vec<(ObserverId, Arc<dyn TrackerObserver>)>,
    next_observer_id: u64,
}

impl ProteinTracker<SystemClock> {
    /// Creates an empty tracker on the system clock with the default goal.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ProteinTracker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ProteinTracker<C> {
    /// Creates an empty tracker reading time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            daily_goal_grams: DEFAULT_DAILY_GOAL_GRAMS,
            entries: Vec::new(),
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    /// Appends a new entry stamped with the current time.
    ///
    /// # Errors
    /// - `Validation` for zero, negative, or non-finite amounts; entry count
    ///   and total are unchanged.
    pub fn add_entry(&mut self, amount_grams: f64) -> TrackerResult<EntryId> {
        let entry = ProteinEntry::new(amount_grams, self.clock.now())?;
        let id = entry.id;
        self.entries.push(entry);
        debug!("event=entry_added module=store status=ok id={id} amount_g={amount_grams}");
        self.notify(TrackerEvent::EntryAdded { id, amount_grams });
        Ok(id)
    }

    /// Removes the entry with the given id, returning the removed record.
    ///
    /// # Errors
    /// - `NotFound` when the id does not exist or was already removed.
    pub fn remove_entry(&mut self, id: EntryId) -> TrackerResult<ProteinEntry> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(TrackerError::NotFound(id))?;
        let entry = self.entries.remove(position);
        debug!(
            "event=entry_removed module=store status=ok id={id} amount_g={}",
            entry.amount_grams
        );
        self.notify(TrackerEvent::EntryRemoved {
            id,
            amount_grams: entry.amount_grams,
        });
        Ok(entry)
    }

    /// Replaces the amount of an existing entry, keeping id and timestamp.
    ///
    /// # Errors
    /// - `Validation` for zero, negative, or non-finite amounts.
    /// - `NotFound` when the id does not exist.
    pub fn update_entry(&mut self, id: EntryId, new_amount_grams: f64) -> TrackerResult<()> {
        validate_amount(new_amount_grams)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(TrackerError::NotFound(id))?;
        let old_amount_grams = entry.amount_grams;
        entry.amount_grams = new_amount_grams;
        debug!(
            "event=entry_updated module=store status=ok id={id} \
             old_amount_g={old_amount_grams} new_amount_g={new_amount_grams}"
        );
        self.notify(TrackerEvent::EntryUpdated {
            id,
            old_amount_grams,
            new_amount_grams,
        });
        Ok(())
    }

    /// Sets the daily goal. Zero is allowed; negative and non-finite are not.
    pub fn set_daily_goal(&mut self, grams: f64) -> TrackerResult<()> {
        if !grams.is_finite() {
            return Err(EntryValidationError::NonFiniteAmount.into());
        }
        if grams < 0.0 {
            return Err(EntryValidationError::NonPositiveAmount {
                amount_grams: grams,
            }
            .into());
        }
        let old_grams = self.daily_goal_grams;
        self.daily_goal_grams = grams;
        debug!("event=goal_changed module=store status=ok old_g={old_grams} new_g={grams}");
        self.notify(TrackerEvent::GoalChanged {
            old_grams,
            new_grams: grams,
        });
        Ok(())
    }

    /// Current daily goal in grams.
    pub fn daily_goal(&self) -> f64 {
        self.daily_goal_grams
    }

    /// Sum of all current entries' amounts, recomputed on every call.
    pub fn total_consumed(&self) -> f64 {
        self.entries.iter().map(|entry| entry.amount_grams).sum()
    }

    /// Grams left before the goal is met; floored at zero.
    pub fn remaining_goal(&self) -> f64 {
        (self.daily_goal_grams - self.total_consumed()).max(0.0)
    }

    /// All entries in insertion order, regardless of day.
    pub fn entries(&self) -> &[ProteinEntry] {
        &self.entries
    }

    /// Entries logged on the current local calendar day, in insertion order.
    ///
    /// Recomputed on every call against `clock.now()`; never cached, so the
    /// view stays correct across midnight without any invalidation hook.
    pub fn entries_for_today(&self) -> Vec<ProteinEntry> {
        let today = self.clock.now().date_naive();
        self.entries
            .iter()
            .filter(|entry| entry.logged_on(today))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a render-ready view of the current state.
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            daily_goal_grams: self.daily_goal_grams,
            total_consumed_grams: self.total_consumed(),
            remaining_goal_grams: self.remaining_goal(),
            today: self.entries_for_today(),
        }
    }

    /// Registers an observer; returns the handle for later removal.
    pub fn add_observer(&mut self, observer: Arc<dyn TrackerObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, observer));
        debug!(
            "event=observer_added module=store status=ok observer={} count={}",
            id.0,
            self.observers.len()
        );
        id
    }

    /// Unregisters an observer. Returns `false` for unknown handles.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn notify(&self, event: TrackerEvent) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, observer) in &self.observers {
            observer.on_change(&event, &snapshot);
        }
    }
}
