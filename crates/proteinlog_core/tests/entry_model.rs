use chrono::{Local, TimeZone};
use proteinlog_core::{EntryValidationError, ProteinEntry};
use uuid::Uuid;

#[test]
fn new_entry_sets_id_and_keeps_inputs() {
    let logged_at = Local.with_ymd_and_hms(2026, 8, 28, 12, 30, 0).unwrap();
    let entry = ProteinEntry::new(32.5, logged_at).unwrap();

    assert!(!entry.id.is_nil());
    assert_eq!(entry.amount_grams, 32.5);
    assert_eq!(entry.logged_at, logged_at);
}

#[test]
fn new_rejects_non_positive_amounts() {
    let logged_at = Local.with_ymd_and_hms(2026, 8, 28, 12, 30, 0).unwrap();

    let zero = ProteinEntry::new(0.0, logged_at).unwrap_err();
    assert_eq!(zero, EntryValidationError::NonPositiveAmount { amount_grams: 0.0 });

    let negative = ProteinEntry::new(-3.5, logged_at).unwrap_err();
    assert_eq!(
        negative,
        EntryValidationError::NonPositiveAmount { amount_grams: -3.5 }
    );
}

#[test]
fn new_rejects_non_finite_amounts() {
    let logged_at = Local.with_ymd_and_hms(2026, 8, 28, 12, 30, 0).unwrap();

    let nan = ProteinEntry::new(f64::NAN, logged_at).unwrap_err();
    assert_eq!(nan, EntryValidationError::NonFiniteAmount);

    let infinite = ProteinEntry::new(f64::INFINITY, logged_at).unwrap_err();
    assert_eq!(infinite, EntryValidationError::NonFiniteAmount);
}

#[test]
fn with_id_rejects_nil_uuid() {
    let logged_at = Local.with_ymd_and_hms(2026, 8, 28, 12, 30, 0).unwrap();
    let err = ProteinEntry::with_id(Uuid::nil(), 20.0, logged_at).unwrap_err();
    assert_eq!(err, EntryValidationError::NilId);
}

#[test]
fn logged_on_compares_local_calendar_days() {
    let evening = Local.with_ymd_and_hms(2026, 8, 28, 23, 59, 0).unwrap();
    let entry = ProteinEntry::new(10.0, evening).unwrap();

    assert!(entry.logged_on(evening.date_naive()));

    let next_midnight = Local.with_ymd_and_hms(2026, 8, 29, 0, 0, 0).unwrap();
    assert!(!entry.logged_on(next_midnight.date_naive()));
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let entry_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let logged_at = Local.with_ymd_and_hms(2026, 8, 28, 8, 15, 0).unwrap();
    let entry = ProteinEntry::with_id(entry_id, 42.0, logged_at).unwrap();

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["id"], entry_id.to_string());
    assert_eq!(json["amount_grams"], 42.0);
    assert!(json["logged_at"].is_string());

    let decoded: ProteinEntry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn deserialize_rejects_invalid_amounts() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "amount_grams": -5.0,
        "logged_at": "2026-08-28T08:15:00+00:00"
    });

    let err = serde_json::from_value::<ProteinEntry>(value).unwrap_err();
    assert!(
        err.to_string().contains("strictly positive"),
        "unexpected error: {err}"
    );
}
