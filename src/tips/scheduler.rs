//! Tip-of-the-day selection and per-user shown tracking.
//!
//! Selection is a pure function of the calendar date, so every user sees
//! the same tip on the same day without any coordination. Whether the
//! tip was already presented today is tracked per user in the durable
//! local key-value store.

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use super::catalog::{health_tips, HealthTip};
use crate::storage::{KeyValueStore, StoreError};

/// Key namespace for per-user shown markers.
const TIP_MARKER_PREFIX: &str = "lastTipShownDate_";

/// 1-based day of the calendar year (Jan 1 = 1, Dec 31 = 365 or 366).
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Select the tip of the day.
///
/// Deterministic: `day_of_year(date) % catalog_len` indexes the fixed
/// catalog, so the same date always yields the same tip.
pub fn select_daily_tip(date: NaiveDate) -> &'static HealthTip {
    let tips = health_tips();
    let index = day_of_year(date) as usize % tips.len();
    &tips[index]
}

fn marker_key(user_id: Uuid) -> String {
    format!("{TIP_MARKER_PREFIX}{user_id}")
}

fn date_stamp(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Tracks, per user, whether today's tip has already been presented.
///
/// One marker per user: the stored value is the calendar date of the
/// last presentation, overwritten on each mark. Writes are last-writer-
/// wins; no cross-process atomicity is assumed.
pub struct TipTracker<S> {
    store: S,
}

impl<S: KeyValueStore> TipTracker<S> {
    /// Create a tracker over a local key-value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the tip was already shown to this user on `date`.
    pub fn has_been_shown_today(&self, user_id: Uuid, date: NaiveDate) -> Result<bool, StoreError> {
        let marker = self.store.get(&marker_key(user_id))?;
        Ok(marker.as_deref() == Some(date_stamp(date).as_str()))
    }

    /// Record that the tip was shown to this user on `date`,
    /// overwriting any prior marker.
    pub fn mark_shown_today(&self, user_id: Uuid, date: NaiveDate) -> Result<(), StoreError> {
        self.store.set(&marker_key(user_id), &date_stamp(date))
    }

    /// Clear the marker for one user. No error if none exists.
    pub fn reset_tracking(&self, user_id: Uuid) -> Result<(), StoreError> {
        self.store.remove(&marker_key(user_id))
    }

    /// Clear markers for all users by scanning the key namespace.
    pub fn reset_all_tracking(&self) -> Result<(), StoreError> {
        for key in self.store.keys()? {
            if key.starts_with(TIP_MARKER_PREFIX) {
                self.store.remove(&key)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_year_boundaries() {
        assert_eq!(day_of_year(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()), 1);
        // 2023 is not a leap year.
        assert_eq!(
            day_of_year(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()),
            365
        );
        // 2024 is.
        assert_eq!(
            day_of_year(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()),
            366
        );
        assert_eq!(
            day_of_year(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
            60
        );
    }

    #[test]
    fn test_selection_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let first = select_daily_tip(date);
        let second = select_daily_tip(date);
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn test_selection_index_matches_day_of_year() {
        let tips = health_tips();
        for day in 1..=365u32 {
            let date = NaiveDate::from_yo_opt(2023, day).unwrap();
            let expected = &tips[day as usize % tips.len()];
            assert_eq!(select_daily_tip(date).id, expected.id);
        }
    }

    #[test]
    fn test_jan_first_selects_second_tip() {
        // Day of year 1 mod 20 = index 1.
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        assert_eq!(select_daily_tip(date).id, health_tips()[1].id);
    }
}
