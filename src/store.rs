use std::path::{Path, PathBuf};

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::rand_core::OsRng;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tokio::fs;

use crate::{
    constants::{FOOD_ITEMS_COLLECTION, ORDERS_COLLECTION, USERS_COLLECTION},
    models::{FoodItem, Order, User},
};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed record store: one named collection per JSON file.
///
/// Every read parses the whole file and every write rewrites it in full.
/// There is no locking between the read and the write of a mutation, so
/// two overlapping mutations on the same collection resolve as
/// last-writer-wins. That is the documented contract of this store, and
/// callers (the repositories) are built around it.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }

    /// Reads a collection. A missing file is bootstrapped with `default`
    /// (persisted, then returned); anything else that goes wrong is fatal
    /// to the calling operation.
    pub async fn read<T>(&self, collection: &str, default: T) -> Result<T, StorageError>
    where
        T: Serialize + DeserializeOwned,
    {
        let path = self.collection_path(collection);
        match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| StorageError::Parse {
                path: path.clone(),
                source,
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                self.write(collection, &default).await?;
                Ok(default)
            }
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    /// Overwrites a collection in full, pretty-printed. Creates the data
    /// directory on first use.
    pub async fn write<T>(&self, collection: &str, data: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| StorageError::Io {
                path: self.data_dir.clone(),
                source,
            })?;

        let path = self.collection_path(collection);
        let json = serde_json::to_vec_pretty(data).map_err(|source| StorageError::Parse {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json)
            .await
            .map_err(|source| StorageError::Io { path, source })
    }
}

fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(hash.to_string())
}

/// Startup initialization: makes sure every collection file exists and
/// seeds the default accounts when the user collection is empty.
pub async fn initialize(store: &JsonStore) -> anyhow::Result<()> {
    let users: Vec<User> = store.read(USERS_COLLECTION, Vec::new()).await?;
    if users.is_empty() {
        tracing::info!("seeding default users");
        let defaults = vec![
            User {
                userid: "admin".into(),
                email: "admin@prep.com".into(),
                password: hash_password("admin")?,
                role: "owner".into(),
                name: None,
            },
            User {
                userid: "manager".into(),
                email: "manager@prep.com".into(),
                password: hash_password("manager")?,
                role: "manager".into(),
                name: None,
            },
            User {
                userid: "testuser".into(),
                email: "test@example.com".into(),
                password: hash_password("password123")?,
                role: "user".into(),
                name: None,
            },
        ];
        store.write(USERS_COLLECTION, &defaults).await?;
    }

    let _: Vec<Order> = store.read(ORDERS_COLLECTION, Vec::new()).await?;
    let _: Vec<FoodItem> = store.read(FOOD_ITEMS_COLLECTION, Vec::new()).await?;

    tracing::info!(data_dir = %store.data_dir().display(), "record store initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_collection_bootstraps_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let first: Vec<String> = store.read("things", Vec::new()).await.unwrap();
        assert!(first.is_empty());
        assert!(dir.path().join("things.json").exists());

        // A fresh store over the same directory sees the bootstrapped file.
        let reopened = JsonStore::new(dir.path());
        let second: Vec<String> = reopened.read("things", Vec::new()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn read_is_idempotent_without_writes() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store
            .write("things", &vec!["a".to_string(), "b".to_string()])
            .await
            .unwrap();

        let one: Vec<String> = store.read("things", Vec::new()).await.unwrap();
        let two: Vec<String> = store.read("things", Vec::new()).await.unwrap();
        assert_eq!(one, two);
    }

    #[tokio::test]
    async fn write_overwrites_in_full() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store
            .write("things", &vec!["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        store.write("things", &vec!["c".to_string()]).await.unwrap();

        let after: Vec<String> = store.read("things", Vec::new()).await.unwrap();
        assert_eq!(after, vec!["c".to_string()]);
    }

    #[tokio::test]
    async fn malformed_json_surfaces_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("things.json"), b"{not json").unwrap();
        let store = JsonStore::new(dir.path());

        let err = store
            .read::<Vec<String>>("things", Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
    }

    #[tokio::test]
    async fn initialize_seeds_users_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        initialize(&store).await.unwrap();
        let users: Vec<User> = store.read(USERS_COLLECTION, Vec::new()).await.unwrap();
        assert_eq!(users.len(), 3);

        // Second run must not duplicate the seed accounts.
        initialize(&store).await.unwrap();
        let again: Vec<User> = store.read(USERS_COLLECTION, Vec::new()).await.unwrap();
        assert_eq!(again.len(), 3);
    }
}
