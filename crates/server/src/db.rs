//! JSON-file document store backing the mock API.
//!
//! The whole document is kept in memory and rewritten on every mutation,
//! using the same `db.json` layout the front end has always talked to.

use std::{
    io,
    path::{Path, PathBuf},
};

use api_types::{
    card::{Card, CardStatus},
    dashboard::AccountSummary,
    profile::Profile,
    transaction::{TransactionRecord, TransactionType},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::{RwLock, RwLockReadGuard};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Db {
    pub dashboard: AccountSummary,
    pub profile: Profile,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Db {
    /// Demo account used when no data file exists yet.
    pub fn seed() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        Self {
            dashboard: AccountSummary {
                user_name: "John Doe".to_string(),
                account_number: "1234567890".to_string(),
                account_type: "Savings".to_string(),
                balance: 250_000,
            },
            profile: Profile {
                name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                phone: "08012345678".to_string(),
            },
            transactions: vec![
                TransactionRecord {
                    id: 1_735_725_600_000,
                    kind: TransactionType::Credit,
                    amount: 150_000,
                    description: "Salary".to_string(),
                    date: date(2025, 1, 1),
                },
                TransactionRecord {
                    id: 1_735_898_400_000,
                    kind: TransactionType::Debit,
                    amount: 2_000,
                    description: "Airtime purchase to +2348012345678 (MTN)".to_string(),
                    date: date(2025, 1, 3),
                },
            ],
            cards: vec![Card {
                id: "1".to_string(),
                card_number: "4111 1111 1111 1111".to_string(),
                expiry: "09/27".to_string(),
                cvv: "123".to_string(),
                status: CardStatus::Active,
            }],
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed data file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct Store {
    path: Option<PathBuf>,
    data: RwLock<Db>,
}

impl Store {
    /// Store that never touches the disk.
    pub fn in_memory(db: Db) -> Self {
        Self {
            path: None,
            data: RwLock::new(db),
        }
    }

    /// Loads `path`, seeding it with the demo account when it does not exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let db = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "data file missing, seeding demo account");
                let db = Db::seed();
                persist(&path, &db).await?;
                db
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            path: Some(path),
            data: RwLock::new(db),
        })
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Db> {
        self.data.read().await
    }

    /// Applies `change` and writes the document back to disk. The in-memory
    /// document only moves forward once the write has succeeded.
    pub async fn write<T>(&self, change: impl FnOnce(&mut Db) -> T) -> Result<T, StoreError> {
        let mut db = self.data.write().await;
        let mut next = db.clone();
        let out = change(&mut next);
        if let Some(path) = &self.path {
            persist(path, &next).await?;
        }
        *db = next;
        Ok(out)
    }
}

async fn persist(path: &Path, db: &Db) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_vec_pretty(db)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("skybank_{}_{}.json", name, uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_file_is_seeded() {
        let path = temp_path("seed");
        let store = Store::open(&path).await.unwrap();
        assert_eq!(store.read().await.dashboard.user_name, "John Doe");

        let on_disk: Db = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(on_disk, Db::seed());
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn writes_survive_reopen() {
        let path = temp_path("reopen");
        let store = Store::open(&path).await.unwrap();
        store
            .write(|db| db.profile.name = "Jane Doe".to_string())
            .await
            .unwrap();
        drop(store);

        let store = Store::open(&path).await.unwrap();
        assert_eq!(store.read().await.profile.name, "Jane Doe");
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn failed_write_leaves_document_unchanged() {
        let path = temp_path("failed_write");
        let store = Store::open(&path).await.unwrap();
        let before = store.read().await.transactions.len();

        // A directory in place of the data file makes the rewrite fail.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let result = store
            .write(|db| {
                db.transactions.push(TransactionRecord {
                    id: 1,
                    kind: TransactionType::Debit,
                    amount: 5_000,
                    description: "Transfer to Ada Obi".to_string(),
                    date: NaiveDate::default(),
                })
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.read().await.transactions.len(), before);
        std::fs::remove_dir(path).unwrap();
    }
}
