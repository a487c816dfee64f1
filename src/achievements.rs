//! Achievement service.
//!
//! Ties the store, the badge catalog, and the score engine together:
//! per-user score snapshots, the resolved badge view, and the all-users
//! leaderboard. Every result is recomputed from the current rows on
//! each call.

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::badges::{
    progress_percent, resolve_badges, unlocked_count, AchievementRecord, BadgeCatalog,
    ResolvedBadge,
};
use crate::leaderboard::{rank_users, RankedProfile};
use crate::scoring::{compute_score, DuplicatePolicy, ScoreSnapshot, WorkoutRecord};
use crate::session::Session;
use crate::storage::{Database, FitnessStore, StoreError};

/// A user's full achievements view.
#[derive(Debug, Clone)]
pub struct AchievementsOverview {
    pub snapshot: ScoreSnapshot,
    pub badges: Vec<ResolvedBadge>,
    pub unlocked_count: usize,
    /// Badge collection progress as a whole percentage.
    pub progress_percent: u32,
}

/// Service computing scores, badge views, and rankings.
pub struct AchievementService {
    store: FitnessStore,
    catalog: BadgeCatalog,
    policy: DuplicatePolicy,
}

impl AchievementService {
    /// Create a service over an open database.
    pub fn new(db: Arc<Database>, catalog: BadgeCatalog, policy: DuplicatePolicy) -> Self {
        Self {
            store: FitnessStore::new(db),
            catalog,
            policy,
        }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &FitnessStore {
        &self.store
    }

    /// Compute the session user's score snapshot from their rows.
    pub fn score_for(&self, session: &Session) -> Result<ScoreSnapshot, StoreError> {
        let workouts = self.store.workouts_for(session.user_id)?;
        let achievements = self.store.achievements_for(session.user_id)?;

        Ok(compute_score(
            &workouts,
            &achievements,
            &self.catalog,
            self.policy,
        ))
    }

    /// Compute the session user's full achievements view.
    pub fn overview_for(&self, session: &Session) -> Result<AchievementsOverview, StoreError> {
        let workouts = self.store.workouts_for(session.user_id)?;
        let achievements = self.store.achievements_for(session.user_id)?;

        let snapshot = compute_score(&workouts, &achievements, &self.catalog, self.policy);
        let badges = resolve_badges(&self.catalog, &achievements);
        let unlocked = unlocked_count(&badges);
        let progress = progress_percent(unlocked, self.catalog.len());

        tracing::debug!(
            user = %session.username,
            total_points = snapshot.total_points,
            unlocked,
            "achievements overview computed"
        );

        Ok(AchievementsOverview {
            snapshot,
            badges,
            unlocked_count: unlocked,
            progress_percent: progress,
        })
    }

    /// Rank every known user by total points.
    pub fn leaderboard(&self) -> Result<Vec<RankedProfile>, StoreError> {
        let profiles = self.store.profiles()?;
        let workouts_by_user = group_by_user(self.store.all_workouts()?, |w: &WorkoutRecord| {
            w.user_id
        });
        let achievements_by_user =
            group_by_user(self.store.all_achievements()?, |a: &AchievementRecord| {
                a.user_id
            });

        Ok(rank_users(
            &profiles,
            &workouts_by_user,
            &achievements_by_user,
            &self.catalog,
            self.policy,
        ))
    }
}

fn group_by_user<T>(rows: Vec<T>, key: impl Fn(&T) -> Uuid) -> HashMap<Uuid, Vec<T>> {
    let mut grouped: HashMap<Uuid, Vec<T>> = HashMap::new();
    for row in rows {
        grouped.entry(key(&row)).or_default().push(row);
    }
    grouped
}
