// ============================
// crates/backend-lib/src/storage.rs
// ============================
//! Document store abstraction with flat-file implementation.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use tokio::fs as tokio_fs;
use uuid::Uuid;

use crate::error::AppError;
use taskboard_common::Task;

/// A stored user document. The password hash never leaves the backend;
/// only the public fields are copied into API responses.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Trait for store backends. These are the query shapes the services
/// require; anything that can answer them can back the application.
#[async_trait]
pub trait Store: Send + Sync {
    /// Persist a new user document
    async fn insert_user(&self, user: &UserRecord) -> Result<(), AppError>;

    /// Find a user by exact email match
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError>;

    /// Find any user whose username OR email matches. Used as the single
    /// uniqueness probe at registration.
    async fn find_user_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<UserRecord>, AppError>;

    /// Persist a new task document
    async fn insert_task(&self, task: &Task) -> Result<(), AppError>;

    /// Replace a task document in full (last write wins)
    async fn update_task(&self, task: &Task) -> Result<(), AppError>;

    /// Ownership-scoped lookup: filters on (task id, owner id) jointly.
    /// An id that exists under a different owner reads as `None`.
    async fn find_task(&self, id: Uuid, owner: Uuid) -> Result<Option<Task>, AppError>;

    /// All tasks owned by `owner`
    async fn tasks_for_owner(&self, owner: Uuid) -> Result<Vec<Task>, AppError>;

    /// Ownership-scoped delete. Returns whether a document was removed.
    async fn delete_task(&self, id: Uuid, owner: Uuid) -> Result<bool, AppError>;
}

/// Flat-file implementation of the Store trait: one JSON document per
/// record under `<root>/users` and `<root>/tasks`.
#[derive(Clone)]
pub struct FlatFileStore {
    root: PathBuf,
}

impl FlatFileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> anyhow::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("users"))?;
        fs::create_dir_all(root.join("tasks"))?;
        Ok(Self { root })
    }

    fn user_path(&self, id: Uuid) -> PathBuf {
        self.root.join("users").join(format!("{id}.json"))
    }

    fn task_path(&self, id: Uuid) -> PathBuf {
        self.root.join("tasks").join(format!("{id}.json"))
    }

    /// Scan every document in a collection directory.
    async fn read_collection<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, AppError> {
        let mut records = Vec::new();
        let mut dir = tokio_fs::read_dir(self.root.join(collection)).await?;

        while let Some(entry) = dir.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = tokio_fs::read_to_string(&path).await?;
            records.push(serde_json::from_str(&content)?);
        }

        Ok(records)
    }
}

#[async_trait]
impl Store for FlatFileStore {
    async fn insert_user(&self, user: &UserRecord) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(user)?;
        tokio_fs::write(self.user_path(user.id), json).await?;
        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AppError> {
        let users: Vec<UserRecord> = self.read_collection("users").await?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    async fn find_user_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<UserRecord>, AppError> {
        let users: Vec<UserRecord> = self.read_collection("users").await?;
        Ok(users
            .into_iter()
            .find(|u| u.username == username || u.email == email))
    }

    async fn insert_task(&self, task: &Task) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(task)?;
        tokio_fs::write(self.task_path(task.id), json).await?;
        Ok(())
    }

    async fn update_task(&self, task: &Task) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(task)?;
        tokio_fs::write(self.task_path(task.id), json).await?;
        Ok(())
    }

    async fn find_task(&self, id: Uuid, owner: Uuid) -> Result<Option<Task>, AppError> {
        let path = self.task_path(id);

        if !path.exists() {
            return Ok(None);
        }

        let content = tokio_fs::read_to_string(&path).await?;
        let task: Task = serde_json::from_str(&content)?;

        // Joint predicate: an owner mismatch is indistinguishable from a
        // missing document.
        if task.created_by == owner {
            Ok(Some(task))
        } else {
            Ok(None)
        }
    }

    async fn tasks_for_owner(&self, owner: Uuid) -> Result<Vec<Task>, AppError> {
        let mut tasks: Vec<Task> = self
            .read_collection("tasks")
            .await?
            .into_iter()
            .filter(|t: &Task| t.created_by == owner)
            .collect();

        // Newest first
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(tasks)
    }

    async fn delete_task(&self, id: Uuid, owner: Uuid) -> Result<bool, AppError> {
        match self.find_task(id, owner).await? {
            Some(task) => {
                tokio_fs::remove_file(self.task_path(task.id)).await?;
                Ok(true)
            },
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_common::{Priority, Status};
    use tempfile::tempdir;

    fn sample_task(owner: Uuid, title: &str) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            due_date: None,
            priority: Priority::default(),
            status: Status::default(),
            category: None,
            created_by: owner,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn user_roundtrip_and_conflict_probe() {
        let dir = tempdir().unwrap();
        let store = FlatFileStore::new(dir.path()).unwrap();

        let user = UserRecord {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
        };
        store.insert_user(&user).await.unwrap();

        let found = store.find_user_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);

        // Either field matching counts as a conflict
        assert!(store
            .find_user_by_username_or_email("alice", "other@x.com")
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_user_by_username_or_email("other", "a@x.com")
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_user_by_username_or_email("other", "other@x.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn ownership_scoped_lookup_hides_foreign_tasks() {
        let dir = tempdir().unwrap();
        let store = FlatFileStore::new(dir.path()).unwrap();

        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let task = sample_task(owner, "mine");
        store.insert_task(&task).await.unwrap();

        assert!(store.find_task(task.id, owner).await.unwrap().is_some());
        assert!(store.find_task(task.id, stranger).await.unwrap().is_none());
        assert!(!store.delete_task(task.id, stranger).await.unwrap());
        assert!(store.delete_task(task.id, owner).await.unwrap());
        assert!(store.find_task(task.id, owner).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn tasks_for_owner_sorted_newest_first() {
        let dir = tempdir().unwrap();
        let store = FlatFileStore::new(dir.path()).unwrap();

        let owner = Uuid::new_v4();
        let mut older = sample_task(owner, "older");
        older.created_at = Utc::now() - chrono::Duration::hours(1);
        let newer = sample_task(owner, "newer");
        store.insert_task(&older).await.unwrap();
        store.insert_task(&newer).await.unwrap();
        store.insert_task(&sample_task(Uuid::new_v4(), "foreign")).await.unwrap();

        let tasks = store.tasks_for_owner(owner).await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "newer");
        assert_eq!(tasks[1].title, "older");
    }
}
