//! FitBuddy - Fitness Achievements and Scoring Engine
//!
//! Core rule logic for a fitness-tracking application: leaderboard
//! points derived from workout volume, achievement points from a static
//! badge catalog, full-recompute user ranking, and the deterministic
//! daily health tip rotation with per-user shown tracking.

pub mod achievements;
pub mod badges;
pub mod leaderboard;
pub mod refresh;
pub mod scoring;
pub mod session;
pub mod storage;
pub mod tips;

// Re-export commonly used types
pub use achievements::AchievementService;
pub use badges::{BadgeCatalog, BadgeRarity};
pub use leaderboard::{rank_users, Profile, RankedProfile};
pub use refresh::{RefreshBus, RefreshEvent};
pub use scoring::{compute_score, DuplicatePolicy, ScoreSnapshot, WorkoutRecord};
pub use session::Session;
pub use tips::{select_daily_tip, TipTracker};
