//! Full-recompute user ranking.

pub mod rankings;

pub use rankings::{rank_users, Profile, RankedProfile};
