//! Fitness data storage operations.
//!
//! Provides persistence for:
//! - User profiles
//! - Logged workouts
//! - Badge unlock events
//!
//! This is the data-service seam: callers get plain row collections back
//! and all shape validation happens here, so the pure scoring and
//! resolution functions are never handed malformed records.

use chrono::{DateTime, Utc};
use rusqlite::params;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::badges::AchievementRecord;
use crate::leaderboard::Profile;
use crate::scoring::WorkoutRecord;
use crate::storage::database::Database;

/// Store for profiles, workouts, and achievement records.
pub struct FitnessStore {
    db: Arc<Database>,
}

impl FitnessStore {
    /// Create a new store over an open database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a user profile.
    pub fn insert_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        if profile.id.is_nil() {
            return Err(StoreError::InvalidRecord("profile id is nil".to_string()));
        }
        if profile.username.trim().is_empty() {
            return Err(StoreError::InvalidRecord("username is empty".to_string()));
        }

        self.db
            .connection()
            .execute(
                "INSERT INTO profiles (id, username, avatar_url, goal, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    profile.id.to_string(),
                    profile.username,
                    profile.avatar_url,
                    profile.goal,
                    Utc::now().to_rfc3339(),
                ],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// Get all profiles in registration order.
    pub fn profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare("SELECT id, username, avatar_url, goal FROM profiles ORDER BY created_at ASC")
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<String>>(3)?,
                ))
            })
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let mut profiles = Vec::new();
        for row in rows {
            let (id_str, username, avatar_url, goal) =
                row.map_err(|e| StoreError::DatabaseError(e.to_string()))?;
            profiles.push(Profile {
                id: parse_uuid(&id_str)?,
                username,
                avatar_url,
                goal,
            });
        }

        Ok(profiles)
    }

    /// Get a single profile by id.
    pub fn profile(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        Ok(self.profiles()?.into_iter().find(|p| p.id == id))
    }

    /// Insert a workout record.
    pub fn insert_workout(&self, workout: &WorkoutRecord) -> Result<(), StoreError> {
        if workout.user_id.is_nil() {
            return Err(StoreError::InvalidRecord("workout user id is nil".to_string()));
        }

        self.db
            .connection()
            .execute(
                "INSERT INTO workouts (id, user_id, duration_minutes, calories, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    workout.id.to_string(),
                    workout.user_id.to_string(),
                    workout.duration_minutes,
                    workout.calories,
                    workout.created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// Get all workouts for one user.
    pub fn workouts_for(&self, user_id: Uuid) -> Result<Vec<WorkoutRecord>, StoreError> {
        self.query_workouts(
            "SELECT id, user_id, duration_minutes, calories, created_at
             FROM workouts WHERE user_id = ?1",
            &[&user_id.to_string()],
        )
    }

    /// Get all workouts across all users.
    pub fn all_workouts(&self) -> Result<Vec<WorkoutRecord>, StoreError> {
        self.query_workouts(
            "SELECT id, user_id, duration_minutes, calories, created_at FROM workouts",
            &[],
        )
    }

    fn query_workouts(
        &self,
        sql: &str,
        sql_params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<WorkoutRecord>, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map(sql_params, |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<u32>>(2)?,
                    row.get::<_, Option<u32>>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let mut workouts = Vec::new();
        for row in rows {
            let (id_str, user_id_str, duration_minutes, calories, created_at_str) =
                row.map_err(|e| StoreError::DatabaseError(e.to_string()))?;
            workouts.push(WorkoutRecord {
                id: parse_uuid(&id_str)?,
                user_id: parse_uuid(&user_id_str)?,
                duration_minutes,
                calories,
                created_at: parse_timestamp(&created_at_str)?,
            });
        }

        Ok(workouts)
    }

    /// Insert a badge unlock event.
    pub fn insert_achievement(&self, achievement: &AchievementRecord) -> Result<(), StoreError> {
        if achievement.user_id.is_nil() {
            return Err(StoreError::InvalidRecord(
                "achievement user id is nil".to_string(),
            ));
        }
        if achievement.badge_type.trim().is_empty() {
            return Err(StoreError::InvalidRecord("badge type is empty".to_string()));
        }

        self.db
            .connection()
            .execute(
                "INSERT INTO achievements (id, user_id, badge_type, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    achievement.id.to_string(),
                    achievement.user_id.to_string(),
                    achievement.badge_type,
                    achievement.created_at.to_rfc3339(),
                ],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// Get one user's unlock events, newest first.
    pub fn achievements_for(&self, user_id: Uuid) -> Result<Vec<AchievementRecord>, StoreError> {
        self.query_achievements(
            "SELECT id, user_id, badge_type, created_at
             FROM achievements WHERE user_id = ?1
             ORDER BY created_at DESC",
            &[&user_id.to_string()],
        )
    }

    /// Get all unlock events across all users.
    pub fn all_achievements(&self) -> Result<Vec<AchievementRecord>, StoreError> {
        self.query_achievements(
            "SELECT id, user_id, badge_type, created_at FROM achievements",
            &[],
        )
    }

    fn query_achievements(
        &self,
        sql: &str,
        sql_params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<AchievementRecord>, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map(sql_params, |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            })
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let mut achievements = Vec::new();
        for row in rows {
            let (id_str, user_id_str, badge_type, created_at_str) =
                row.map_err(|e| StoreError::DatabaseError(e.to_string()))?;
            achievements.push(AchievementRecord {
                id: parse_uuid(&id_str)?,
                user_id: parse_uuid(&user_id_str)?,
                badge_type,
                created_at: parse_timestamp(&created_at_str)?,
            });
        }

        Ok(achievements)
    }
}

fn parse_uuid(s: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(s).map_err(|e| StoreError::DatabaseError(e.to_string()))
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::DatabaseError(e.to_string()))
}

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
