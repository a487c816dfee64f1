//! Core types for achievement badges.
//!
//! The badge catalog is static: defined once at process start, never
//! mutated at runtime. Unlock events reference catalog entries by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Badge rarity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl BadgeRarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeRarity::Common => "common",
            BadgeRarity::Rare => "rare",
            BadgeRarity::Epic => "epic",
            BadgeRarity::Legendary => "legendary",
            BadgeRarity::Mythic => "mythic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "common" => Some(BadgeRarity::Common),
            "rare" => Some(BadgeRarity::Rare),
            "epic" => Some(BadgeRarity::Epic),
            "legendary" => Some(BadgeRarity::Legendary),
            "mythic" => Some(BadgeRarity::Mythic),
            _ => None,
        }
    }
}

impl std::fmt::Display for BadgeRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Badge category, describing the kind of unlock criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCategory {
    /// Total workouts logged
    Workouts,
    /// Total minutes of exercise
    Minutes,
    /// Total calories burned
    Calories,
    /// Streak-based achievements
    Consistency,
    /// Event or unique achievements
    Special,
}

impl BadgeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeCategory::Workouts => "workouts",
            BadgeCategory::Minutes => "minutes",
            BadgeCategory::Calories => "calories",
            BadgeCategory::Consistency => "consistency",
            BadgeCategory::Special => "special",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "workouts" => Some(BadgeCategory::Workouts),
            "minutes" => Some(BadgeCategory::Minutes),
            "calories" => Some(BadgeCategory::Calories),
            "consistency" => Some(BadgeCategory::Consistency),
            "special" => Some(BadgeCategory::Special),
            _ => None,
        }
    }
}

/// Badge definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: BadgeRarity,
    pub category: BadgeCategory,
    /// Achievement points awarded when this badge is unlocked.
    pub points: u32,
}

/// A recorded badge unlock event for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    /// References a `BadgeDefinition.id`. May be stale if the catalog
    /// evolved; stale references score zero points.
    pub badge_type: String,
    pub created_at: DateTime<Utc>,
}

impl AchievementRecord {
    /// Create a new unlock event for a user.
    pub fn new(user_id: Uuid, badge_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            badge_type: badge_type.into(),
            created_at: Utc::now(),
        }
    }
}

/// A catalog entry merged with a user's unlock state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedBadge {
    pub badge: BadgeDefinition,
    pub unlocked: bool,
}

/// The static badge catalog with an id lookup index.
#[derive(Debug, Clone)]
pub struct BadgeCatalog {
    badges: Vec<BadgeDefinition>,
    index: HashMap<String, usize>,
}

impl BadgeCatalog {
    /// Build a catalog from an ordered list of definitions.
    ///
    /// Iteration order is the declared order; later duplicates of an id
    /// are unreachable through `get`.
    pub fn new(badges: Vec<BadgeDefinition>) -> Self {
        let mut index = HashMap::with_capacity(badges.len());
        for (i, badge) in badges.iter().enumerate() {
            index.entry(badge.id.clone()).or_insert(i);
        }
        Self { badges, index }
    }

    /// Look up a badge definition by id.
    pub fn get(&self, id: &str) -> Option<&BadgeDefinition> {
        self.index.get(id).map(|&i| &self.badges[i])
    }

    /// Whether the catalog contains the given badge id.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    /// Iterate definitions in declared order.
    pub fn iter(&self) -> std::slice::Iter<'_, BadgeDefinition> {
        self.badges.iter()
    }
}

impl Default for BadgeCatalog {
    fn default() -> Self {
        Self::new(default_badges())
    }
}

/// Default badge definitions.
pub fn default_badges() -> Vec<BadgeDefinition> {
    fn badge(
        id: &str,
        name: &str,
        description: &str,
        icon: &str,
        rarity: BadgeRarity,
        category: BadgeCategory,
        points: u32,
    ) -> BadgeDefinition {
        BadgeDefinition {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            rarity,
            category,
            points,
        }
    }

    vec![
        badge(
            "first_workout",
            "First Steps",
            "Log your first workout",
            "🏃",
            BadgeRarity::Common,
            BadgeCategory::Special,
            10,
        ),
        badge(
            "workouts_5",
            "Getting Started",
            "Complete 5 workouts",
            "🎽",
            BadgeRarity::Common,
            BadgeCategory::Workouts,
            25,
        ),
        badge(
            "workouts_10",
            "Committed",
            "Complete 10 workouts",
            "🎯",
            BadgeRarity::Rare,
            BadgeCategory::Workouts,
            50,
        ),
        badge(
            "workouts_25",
            "Dedicated",
            "Complete 25 workouts",
            "🔥",
            BadgeRarity::Rare,
            BadgeCategory::Workouts,
            100,
        ),
        badge(
            "workouts_50",
            "Fitness Warrior",
            "Complete 50 workouts",
            "⚔️",
            BadgeRarity::Epic,
            BadgeCategory::Workouts,
            200,
        ),
        badge(
            "workouts_100",
            "Centurion",
            "Complete 100 workouts",
            "🏛️",
            BadgeRarity::Legendary,
            BadgeCategory::Workouts,
            400,
        ),
        badge(
            "minutes_500",
            "Time Keeper",
            "Accumulate 500 minutes of exercise",
            "⏱️",
            BadgeRarity::Rare,
            BadgeCategory::Minutes,
            75,
        ),
        badge(
            "minutes_1000",
            "Endurance Master",
            "Accumulate 1000 minutes of exercise",
            "🏔️",
            BadgeRarity::Epic,
            BadgeCategory::Minutes,
            150,
        ),
        badge(
            "calories_5000",
            "Calorie Crusher",
            "Burn 5000 calories total",
            "💥",
            BadgeRarity::Rare,
            BadgeCategory::Calories,
            75,
        ),
        badge(
            "calories_10000",
            "Inferno",
            "Burn 10000 calories total",
            "🌋",
            BadgeRarity::Epic,
            BadgeCategory::Calories,
            150,
        ),
        badge(
            "week_streak",
            "Week Warrior",
            "Work out 7 days in a row",
            "📅",
            BadgeRarity::Legendary,
            BadgeCategory::Consistency,
            300,
        ),
        badge(
            "month_streak",
            "Unstoppable",
            "Work out 30 days in a row",
            "🌟",
            BadgeRarity::Mythic,
            BadgeCategory::Consistency,
            500,
        ),
    ]
}
