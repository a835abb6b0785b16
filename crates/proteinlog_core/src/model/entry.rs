//! Protein entry domain model.
//!
//! # Responsibility
//! - Define the canonical record for one protein-intake event.
//! - Validate amount input for both add and edit paths.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `logged_at` is fixed at creation; edits never rewrite it.
//! - `amount_grams` is finite and strictly positive in every stored entry.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a logged entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// Validation failure for entry construction or amount input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryValidationError {
    /// Amount was zero or negative. Intake is recorded in strictly
    /// positive grams; zero-gram entries are rejected rather than stored.
    NonPositiveAmount { amount_grams: f64 },
    /// Amount was NaN or infinite.
    NonFiniteAmount,
    /// The nil UUID is reserved and never a valid entry identity.
    NilId,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount { amount_grams } => {
                write!(f, "amount must be strictly positive, got {amount_grams}g")
            }
            Self::NonFiniteAmount => write!(f, "amount must be a finite number"),
            Self::NilId => write!(f, "entry id must not be the nil uuid"),
        }
    }
}

impl Error for EntryValidationError {}

/// One recorded protein-intake event.
///
/// Entries are value objects owned by the store; the store is the only
/// writer of `amount_grams` after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EntryWire")]
pub struct ProteinEntry {
    /// Stable ID used for all mutating lookups.
    pub id: EntryId,
    /// Grams of protein consumed. Strictly positive, finite.
    pub amount_grams: f64,
    /// Creation time in local time. Used for same-day filtering and display.
    pub logged_at: DateTime<Local>,
}

/// Raw wire shape, validated before it becomes a [`ProteinEntry`].
#[derive(Deserialize)]
struct EntryWire {
    id: EntryId,
    amount_grams: f64,
    logged_at: DateTime<Local>,
}

impl TryFrom<EntryWire> for ProteinEntry {
    type Error = EntryValidationError;

    fn try_from(wire: EntryWire) -> Result<Self, Self::Error> {
        let entry = ProteinEntry {
            id: wire.id,
            amount_grams: wire.amount_grams,
            logged_at: wire.logged_at,
        };
        entry.validate()?;
        Ok(entry)
    }
}

impl ProteinEntry {
    /// Creates a new entry with a generated stable ID.
    pub fn new(
        amount_grams: f64,
        logged_at: DateTime<Local>,
    ) -> Result<Self, EntryValidationError> {
        Self::with_id(Uuid::new_v4(), amount_grams, logged_at)
    }

    /// Creates an entry with a caller-provided stable ID.
    ///
    /// # Errors
    /// - [`EntryValidationError::NilId`] when `id` is the nil uuid.
    /// - Amount errors as for [`validate_amount`].
    pub fn with_id(
        id: EntryId,
        amount_grams: f64,
        logged_at: DateTime<Local>,
    ) -> Result<Self, EntryValidationError> {
        let entry = Self {
            id,
            amount_grams,
            logged_at,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Re-checks all record invariants.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.id.is_nil() {
            return Err(EntryValidationError::NilId);
        }
        validate_amount(self.amount_grams)
    }

    /// Returns whether this entry was logged on the given local calendar day.
    pub fn logged_on(&self, day: NaiveDate) -> bool {
        self.logged_at.date_naive() == day
    }
}

/// Checks the amount rule shared by the add and update paths.
///
/// # Errors
/// - [`EntryValidationError::NonFiniteAmount`] for NaN or infinite input.
/// - [`EntryValidationError::NonPositiveAmount`] for zero or negative input.
pub fn validate_amount(amount_grams: f64) -> Result<(), EntryValidationError> {
    if !amount_grams.is_finite() {
        return Err(EntryValidationError::NonFiniteAmount);
    }
    if amount_grams <= 0.0 {
        return Err(EntryValidationError::NonPositiveAmount { amount_grams });
    }
    Ok(())
}
