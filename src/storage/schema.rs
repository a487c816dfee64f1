//! Database schema definitions.

/// Table tracking applied schema versions.
pub const SCHEMA_VERSION_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL
);
"#;

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// SQL schema for creating all database tables.
pub const SCHEMA: &str = r#"
-- User profiles
CREATE TABLE IF NOT EXISTS profiles (
    id TEXT PRIMARY KEY,
    username TEXT NOT NULL,
    avatar_url TEXT,
    goal TEXT,
    created_at TEXT NOT NULL
);

-- Logged workouts
CREATE TABLE IF NOT EXISTS workouts (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES profiles(id),
    duration_minutes INTEGER,
    calories INTEGER,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_workouts_user_id ON workouts(user_id);
CREATE INDEX IF NOT EXISTS idx_workouts_created_at ON workouts(created_at);

-- Badge unlock events
CREATE TABLE IF NOT EXISTS achievements (
    id TEXT PRIMARY KEY,
    user_id TEXT NOT NULL REFERENCES profiles(id),
    badge_type TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_achievements_user_id ON achievements(user_id);

-- Client-local key-value storage (tip shown markers)
CREATE TABLE IF NOT EXISTS local_store (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;
