use chrono::{Local, TimeDelta, TimeZone};
use proteinlog_core::{FixedClock, ProteinTracker};

fn tracker_at(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
) -> (ProteinTracker<FixedClock>, FixedClock) {
    let clock = FixedClock::new(Local.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap());
    (ProteinTracker::with_clock(clock.clone()), clock)
}

#[test]
fn excludes_entries_from_previous_days() {
    let (mut tracker, clock) = tracker_at(2026, 8, 27, 9);

    tracker.add_entry(30.0).unwrap();
    tracker.add_entry(20.0).unwrap();

    clock.advance(TimeDelta::days(1));
    let today_id = tracker.add_entry(45.0).unwrap();

    let today = tracker.entries_for_today();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].id, today_id);

    // Older entries are excluded from the view but not removed.
    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.total_consumed(), 95.0);
}

#[test]
fn preserves_insertion_order() {
    let (mut tracker, clock) = tracker_at(2026, 8, 28, 7);

    tracker.add_entry(10.0).unwrap();
    clock.advance(TimeDelta::hours(4));
    tracker.add_entry(20.0).unwrap();
    clock.advance(TimeDelta::hours(4));
    tracker.add_entry(30.0).unwrap();

    let amounts: Vec<f64> = tracker
        .entries_for_today()
        .iter()
        .map(|entry| entry.amount_grams)
        .collect();
    assert_eq!(amounts, vec![10.0, 20.0, 30.0]);
}

#[test]
fn view_is_recomputed_across_midnight() {
    let (mut tracker, clock) = tracker_at(2026, 8, 28, 23);

    tracker.add_entry(25.0).unwrap();
    assert_eq!(tracker.entries_for_today().len(), 1);

    // Same store, same entries; only the clock has moved past midnight.
    clock.advance(TimeDelta::hours(2));
    assert!(tracker.entries_for_today().is_empty());
    assert_eq!(tracker.len(), 1);
}

#[test]
fn snapshot_today_list_matches_the_filter() {
    let (mut tracker, clock) = tracker_at(2026, 8, 27, 20);

    tracker.add_entry(50.0).unwrap();
    clock.advance(TimeDelta::days(1));
    tracker.add_entry(35.0).unwrap();

    let snapshot = tracker.snapshot();
    assert_eq!(snapshot.today, tracker.entries_for_today());
    assert_eq!(snapshot.today.len(), 1);
    // Totals cover all entries, not just today's slice.
    assert_eq!(snapshot.total_consumed_grams, 85.0);
}
