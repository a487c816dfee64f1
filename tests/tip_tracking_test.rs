//! Integration tests for daily tip tracking over the local store.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use fitbuddy::storage::{Database, KeyValueStore, SqliteKeyValueStore};
use fitbuddy::tips::TipTracker;

fn tracker() -> TipTracker<SqliteKeyValueStore> {
    let db = Arc::new(Database::open_in_memory().unwrap());
    TipTracker::new(SqliteKeyValueStore::new(db))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_mark_then_check_same_day() {
    let tracker = tracker();
    let user = Uuid::new_v4();
    let today = date(2024, 6, 15);

    assert!(!tracker.has_been_shown_today(user, today).unwrap());

    tracker.mark_shown_today(user, today).unwrap();
    assert!(tracker.has_been_shown_today(user, today).unwrap());

    // A new day invalidates yesterday's marker.
    let tomorrow = date(2024, 6, 16);
    assert!(!tracker.has_been_shown_today(user, tomorrow).unwrap());
}

#[test]
fn test_marker_is_per_user() {
    let tracker = tracker();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let today = date(2024, 6, 15);

    tracker.mark_shown_today(alice, today).unwrap();
    assert!(tracker.has_been_shown_today(alice, today).unwrap());
    assert!(!tracker.has_been_shown_today(bob, today).unwrap());
}

#[test]
fn test_reset_single_user() {
    let tracker = tracker();
    let user = Uuid::new_v4();
    let today = date(2024, 6, 15);

    tracker.mark_shown_today(user, today).unwrap();
    tracker.reset_tracking(user).unwrap();
    assert!(!tracker.has_been_shown_today(user, today).unwrap());

    // Resetting an untracked user is not an error.
    tracker.reset_tracking(Uuid::new_v4()).unwrap();
}

#[test]
fn test_reset_all_clears_only_tip_markers() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = SqliteKeyValueStore::new(Arc::clone(&db));
    store.set("unrelated_key", "keep me").unwrap();

    let tracker = TipTracker::new(SqliteKeyValueStore::new(db));
    let today = date(2024, 6, 15);
    let users: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
    for &user in &users {
        tracker.mark_shown_today(user, today).unwrap();
    }

    tracker.reset_all_tracking().unwrap();
    for &user in &users {
        assert!(!tracker.has_been_shown_today(user, today).unwrap());
    }
    assert_eq!(
        store.get("unrelated_key").unwrap(),
        Some("keep me".to_string())
    );
}

#[test]
fn test_remark_overwrites_prior_date() {
    let tracker = tracker();
    let user = Uuid::new_v4();

    tracker.mark_shown_today(user, date(2024, 6, 15)).unwrap();
    tracker.mark_shown_today(user, date(2024, 6, 16)).unwrap();

    assert!(!tracker.has_been_shown_today(user, date(2024, 6, 15)).unwrap());
    assert!(tracker.has_been_shown_today(user, date(2024, 6, 16)).unwrap());
}
