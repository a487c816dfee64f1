//! Badge unlock resolution.
//!
//! Merges a user's unlock events with the static catalog to produce the
//! per-badge locked/unlocked view and overall collection progress.

use std::collections::HashSet;

use super::types::{AchievementRecord, BadgeCatalog, ResolvedBadge};

/// Resolve every catalog badge against a user's unlock events.
///
/// Output order is the catalog's declared order and output length always
/// equals the catalog size. Achievements referencing unknown badge ids
/// are ignored here.
pub fn resolve_badges(
    catalog: &BadgeCatalog,
    achievements: &[AchievementRecord],
) -> Vec<ResolvedBadge> {
    let unlocked: HashSet<&str> = achievements.iter().map(|a| a.badge_type.as_str()).collect();

    catalog
        .iter()
        .map(|badge| ResolvedBadge {
            unlocked: unlocked.contains(badge.id.as_str()),
            badge: badge.clone(),
        })
        .collect()
}

/// Number of unlocked badges in a resolved view.
pub fn unlocked_count(resolved: &[ResolvedBadge]) -> usize {
    resolved.iter().filter(|r| r.unlocked).count()
}

/// Collection progress as a whole percentage.
///
/// An empty catalog is defined as 0% rather than a division error.
pub fn progress_percent(unlocked: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (unlocked as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badges::types::BadgeCatalog;
    use uuid::Uuid;

    fn record(badge_type: &str) -> AchievementRecord {
        AchievementRecord::new(Uuid::new_v4(), badge_type)
    }

    #[test]
    fn test_output_length_equals_catalog_length() {
        let catalog = BadgeCatalog::default();

        let resolved = resolve_badges(&catalog, &[]);
        assert_eq!(resolved.len(), catalog.len());
        assert!(resolved.iter().all(|r| !r.unlocked));

        // Unknown badge types must not change the output shape.
        let achievements = vec![record("first_workout"), record("not_in_catalog")];
        let resolved = resolve_badges(&catalog, &achievements);
        assert_eq!(resolved.len(), catalog.len());
        assert_eq!(unlocked_count(&resolved), 1);
    }

    #[test]
    fn test_resolution_preserves_catalog_order() {
        let catalog = BadgeCatalog::default();
        let achievements = vec![record("workouts_10")];
        let resolved = resolve_badges(&catalog, &achievements);

        for (entry, def) in resolved.iter().zip(catalog.iter()) {
            assert_eq!(entry.badge.id, def.id);
        }
    }

    #[test]
    fn test_duplicate_unlocks_count_once() {
        let catalog = BadgeCatalog::default();
        let achievements = vec![record("first_workout"), record("first_workout")];
        let resolved = resolve_badges(&catalog, &achievements);
        assert_eq!(unlocked_count(&resolved), 1);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(3, 12), 25);
        assert_eq!(progress_percent(0, 12), 0);
        assert_eq!(progress_percent(12, 12), 100);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        // Empty catalog is defined as 0%.
        assert_eq!(progress_percent(0, 0), 0);
    }
}
