//! Storage module for database, stores, and configuration.

pub mod config;
pub mod database;
pub mod fitness_store;
pub mod local_store;
pub mod schema;

pub use config::{get_config_path, get_data_dir, load_config, AppConfig, ConfigError};
pub use database::{Database, DatabaseError};
pub use fitness_store::{FitnessStore, StoreError};
pub use local_store::{KeyValueStore, SqliteKeyValueStore};
