//! Leaderboard and achievement point computation.

pub mod engine;

pub use engine::{compute_score, DuplicatePolicy, ScoreSnapshot, WorkoutRecord};
