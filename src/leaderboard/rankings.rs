//! Leaderboard ranking.
//!
//! Recomputes every user's score snapshot and sorts by total points
//! descending. The ranking is rebuilt in full on each call; no cached
//! state survives between invocations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::badges::{AchievementRecord, BadgeCatalog};
use crate::scoring::{compute_score, DuplicatePolicy, ScoreSnapshot, WorkoutRecord};

/// Public user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
    pub goal: Option<String>,
}

impl Profile {
    /// Create a profile with just a username.
    pub fn new(id: Uuid, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            avatar_url: None,
            goal: None,
        }
    }
}

/// A profile augmented with its computed score and rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedProfile {
    /// 1-based position after sorting.
    pub rank: u32,
    pub profile: Profile,
    pub snapshot: ScoreSnapshot,
    /// Number of unlock records, including ones referencing badge ids
    /// absent from the catalog.
    pub achievement_count: u32,
}

/// Rank all users by total points, descending.
///
/// Users missing from the workout or achievement maps score zero for
/// that component. Ties keep the relative order of the input `profiles`
/// sequence; that stable order is the tie-break contract, there is no
/// secondary sort key.
pub fn rank_users(
    profiles: &[Profile],
    workouts_by_user: &HashMap<Uuid, Vec<WorkoutRecord>>,
    achievements_by_user: &HashMap<Uuid, Vec<AchievementRecord>>,
    catalog: &BadgeCatalog,
    policy: DuplicatePolicy,
) -> Vec<RankedProfile> {
    let mut ranked: Vec<RankedProfile> = profiles
        .iter()
        .map(|profile| {
            let workouts = workouts_by_user
                .get(&profile.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let achievements = achievements_by_user
                .get(&profile.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            RankedProfile {
                rank: 0,
                profile: profile.clone(),
                snapshot: compute_score(workouts, achievements, catalog, policy),
                achievement_count: achievements.len() as u32,
            }
        })
        .collect();

    // Vec::sort_by is stable, so equal totals keep input order.
    ranked.sort_by(|a, b| b.snapshot.total_points.cmp(&a.snapshot.total_points));

    for (i, entry) in ranked.iter_mut().enumerate() {
        entry.rank = i as u32 + 1;
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(username: &str) -> Profile {
        Profile::new(Uuid::new_v4(), username)
    }

    fn workouts_for(user_id: Uuid, entries: &[(u32, u32)]) -> Vec<WorkoutRecord> {
        entries
            .iter()
            .map(|&(duration, calories)| {
                WorkoutRecord::new(user_id, Some(duration), Some(calories))
            })
            .collect()
    }

    #[test]
    fn test_ranking_is_total_points_descending() {
        let alice = profile("alice");
        let bob = profile("bob");
        let catalog = BadgeCatalog::default();

        let mut workouts = HashMap::new();
        workouts.insert(alice.id, workouts_for(alice.id, &[(30, 200)]));
        workouts.insert(bob.id, workouts_for(bob.id, &[(30, 200), (45, 300)]));

        let ranked = rank_users(
            &[alice.clone(), bob.clone()],
            &workouts,
            &HashMap::new(),
            &catalog,
            DuplicatePolicy::default(),
        );

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].profile.id, bob.id);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].profile.id, alice.id);
        assert_eq!(ranked[1].rank, 2);
        assert!(ranked[0].snapshot.total_points > ranked[1].snapshot.total_points);
    }

    #[test]
    fn test_ties_preserve_input_order() {
        let first = profile("first");
        let second = profile("second");
        let third = profile("third");
        let catalog = BadgeCatalog::default();

        // Identical workout volume for all three.
        let mut workouts = HashMap::new();
        for p in [&first, &second, &third] {
            workouts.insert(p.id, workouts_for(p.id, &[(60, 400)]));
        }

        let input = vec![first.clone(), second.clone(), third.clone()];
        let ranked = rank_users(
            &input,
            &workouts,
            &HashMap::new(),
            &catalog,
            DuplicatePolicy::default(),
        );
        let order: Vec<Uuid> = ranked.iter().map(|r| r.profile.id).collect();
        assert_eq!(order, vec![first.id, second.id, third.id]);

        // Reordered input among equal-point users yields the new input order.
        let reordered = vec![third.clone(), first.clone(), second.clone()];
        let ranked = rank_users(
            &reordered,
            &workouts,
            &HashMap::new(),
            &catalog,
            DuplicatePolicy::default(),
        );
        let order: Vec<Uuid> = ranked.iter().map(|r| r.profile.id).collect();
        assert_eq!(order, vec![third.id, first.id, second.id]);
    }

    #[test]
    fn test_users_without_records_score_zero() {
        let lonely = profile("lonely");
        let catalog = BadgeCatalog::default();

        let ranked = rank_users(
            &[lonely.clone()],
            &HashMap::new(),
            &HashMap::new(),
            &catalog,
            DuplicatePolicy::default(),
        );

        assert_eq!(ranked[0].snapshot, ScoreSnapshot::default());
        assert_eq!(ranked[0].achievement_count, 0);
        assert_eq!(ranked[0].rank, 1);
    }

    #[test]
    fn test_achievement_count_includes_unknown_badge_types() {
        let user = profile("collector");
        let catalog = BadgeCatalog::default();

        let mut achievements = HashMap::new();
        achievements.insert(
            user.id,
            vec![
                AchievementRecord::new(user.id, "first_workout"),
                AchievementRecord::new(user.id, "retired_badge"),
            ],
        );

        let ranked = rank_users(
            &[user.clone()],
            &HashMap::new(),
            &achievements,
            &catalog,
            DuplicatePolicy::default(),
        );

        assert_eq!(ranked[0].achievement_count, 2);
        // Only the known badge contributes points.
        assert_eq!(ranked[0].snapshot.achievement_points, 10);
    }
}
