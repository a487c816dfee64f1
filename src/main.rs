//! FitBuddy - Fitness Achievements and Scoring Engine
//!
//! Main entry point: prints the tip of the day and the current
//! leaderboard from the local database.

use std::sync::Arc;

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fitbuddy::storage::{load_config, Database};
use fitbuddy::tips::select_daily_tip;
use fitbuddy::{AchievementService, BadgeCatalog};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FitBuddy v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    let db = Arc::new(Database::open(&config.database_path())?);

    let today = Utc::now().date_naive();
    let tip = select_daily_tip(today);
    println!("Tip of the day [{}]: {}", tip.category, tip.text);

    let service = AchievementService::new(db, BadgeCatalog::default(), config.duplicate_policy);
    let ranking = service.leaderboard()?;

    if ranking.is_empty() {
        println!("No users registered yet.");
        return Ok(());
    }

    println!("Leaderboard:");
    for entry in &ranking {
        println!(
            "  #{:<3} {:<20} {:>6} pts ({} workouts, {} badges)",
            entry.rank,
            entry.profile.username,
            entry.snapshot.total_points,
            entry.snapshot.workout_count,
            entry.achievement_count,
        );
    }

    Ok(())
}
