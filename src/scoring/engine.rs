//! Score engine.
//!
//! Reduces a user's raw workout and unlock records to a point snapshot:
//! 10 points per workout, 1 per minute, 0.1 per calorie, plus the point
//! values of unlocked badges. All computations are pure and total over
//! well-shaped input; empty collections yield a zero snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::badges::{AchievementRecord, BadgeCatalog};

/// A single logged workout.
///
/// Immutable once created. Duration and calories are optional at the
/// fetch boundary; a missing value scores as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Duration in minutes.
    pub duration_minutes: Option<u32>,
    /// Calories burned.
    pub calories: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl WorkoutRecord {
    /// Create a new workout record for a user.
    pub fn new(user_id: Uuid, duration_minutes: Option<u32>, calories: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            duration_minutes,
            calories,
            created_at: Utc::now(),
        }
    }
}

/// How duplicate unlock records for the same badge are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Sum points per unlock record, so a badge unlocked twice scores
    /// twice. Matches the historical summation behavior.
    #[default]
    PerRecord,
    /// Count each badge id at most once regardless of how many unlock
    /// records exist.
    OncePerBadge,
}

impl DuplicatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuplicatePolicy::PerRecord => "per_record",
            DuplicatePolicy::OncePerBadge => "once_per_badge",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "per_record" => Some(DuplicatePolicy::PerRecord),
            "once_per_badge" => Some(DuplicatePolicy::OncePerBadge),
            _ => None,
        }
    }
}

/// Derived point totals for one user. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub workout_count: u32,
    pub total_minutes: u64,
    pub total_calories: u64,
    /// Points from workout volume alone.
    pub leaderboard_points: i64,
    /// Points from unlocked badge values.
    pub achievement_points: i64,
    pub total_points: i64,
}

/// Compute a user's score snapshot from their raw records.
///
/// Leaderboard points are `count*10 + minutes*1 + calories*0.1`, rounded
/// to the nearest integer with ties away from zero (`f64::round`).
/// Achievements whose `badge_type` is absent from the catalog contribute
/// zero points rather than an error.
pub fn compute_score(
    workouts: &[WorkoutRecord],
    achievements: &[AchievementRecord],
    catalog: &BadgeCatalog,
    policy: DuplicatePolicy,
) -> ScoreSnapshot {
    let workout_count = workouts.len() as u32;
    let total_minutes: u64 = workouts
        .iter()
        .map(|w| u64::from(w.duration_minutes.unwrap_or(0)))
        .sum();
    let total_calories: u64 = workouts
        .iter()
        .map(|w| u64::from(w.calories.unwrap_or(0)))
        .sum();

    let raw = f64::from(workout_count) * 10.0
        + total_minutes as f64
        + total_calories as f64 * 0.1;
    let leaderboard_points = raw.round() as i64;

    let achievement_points = match policy {
        DuplicatePolicy::PerRecord => achievements
            .iter()
            .map(|a| badge_points(catalog, &a.badge_type))
            .sum(),
        DuplicatePolicy::OncePerBadge => {
            let mut seen = HashSet::new();
            achievements
                .iter()
                .filter(|a| seen.insert(a.badge_type.as_str()))
                .map(|a| badge_points(catalog, &a.badge_type))
                .sum()
        }
    };

    ScoreSnapshot {
        workout_count,
        total_minutes,
        total_calories,
        leaderboard_points,
        achievement_points,
        total_points: leaderboard_points + achievement_points,
    }
}

fn badge_points(catalog: &BadgeCatalog, badge_type: &str) -> i64 {
    catalog
        .get(badge_type)
        .map(|b| i64::from(b.points))
        .unwrap_or(0)
}
