//! Durable client-local key-value storage.
//!
//! The tip scheduler keeps its per-user shown markers here. The trait is
//! the collaborator seam; the SQLite implementation backs it with the
//! `local_store` table in the application database.

use rusqlite::params;
use std::sync::Arc;

use crate::storage::database::Database;
use crate::storage::fitness_store::StoreError;

/// A durable string key-value store scoped to one client.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Remove a key. Not an error if the key does not exist.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
    /// List all stored keys.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Key-value store backed by the application database.
pub struct SqliteKeyValueStore {
    db: Arc<Database>,
}

impl SqliteKeyValueStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.db.connection();
        let result = conn.query_row(
            "SELECT value FROM local_store WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::DatabaseError(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.db
            .connection()
            .execute(
                "INSERT INTO local_store (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.db
            .connection()
            .execute("DELETE FROM local_store WHERE key = ?1", params![key])
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare("SELECT key FROM local_store")
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let mut keys = Vec::new();
        for row in rows {
            keys.push(row.map_err(|e| StoreError::DatabaseError(e.to_string()))?);
        }

        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteKeyValueStore {
        SqliteKeyValueStore::new(Arc::new(Database::open_in_memory().unwrap()))
    }

    #[test]
    fn test_get_set_remove() {
        let store = store();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));

        // Overwrite is last-writer-wins.
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("2".to_string()));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);

        // Removing an absent key is not an error.
        store.remove("a").unwrap();
    }

    #[test]
    fn test_keys_lists_all() {
        let store = store();
        store.set("x", "1").unwrap();
        store.set("y", "2").unwrap();

        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["x".to_string(), "y".to_string()]);
    }
}
