//! Daily health tip rotation.

pub mod catalog;
pub mod scheduler;

pub use catalog::{health_tips, HealthTip};
pub use scheduler::{day_of_year, select_daily_tip, TipTracker};
