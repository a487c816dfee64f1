//! Achievement badge catalog and unlock resolution.

pub mod resolve;
pub mod types;

pub use resolve::{progress_percent, resolve_badges, unlocked_count};
pub use types::{
    default_badges, AchievementRecord, BadgeCatalog, BadgeCategory, BadgeDefinition, BadgeRarity,
    ResolvedBadge,
};
