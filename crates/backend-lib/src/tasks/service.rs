// ============================
// crates/backend-lib/src/tasks/service.rs
// ============================
//! Ownership-scoped task CRUD.
//!
//! Every operation takes the caller identity resolved by the auth
//! middleware and only ever touches documents owned by that identity.
//! Lookups filter on (task id, owner id) in a single predicate, so an
//! ownership mismatch is indistinguishable from a missing task.
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::storage::Store;
use crate::validation::{self, ValidationError};
use taskboard_common::{CreateTaskRequest, Task, UpdateTaskRequest};

pub struct TaskService<S> {
    store: Arc<S>,
}

impl<S> Clone for TaskService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: Store> TaskService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Create a task owned by the caller. Unsupplied optional fields take
    /// their type defaults (priority medium, status todo).
    pub async fn create(&self, owner: Uuid, req: CreateTaskRequest) -> Result<Task, AppError> {
        let title = req
            .title
            .as_deref()
            .ok_or(ValidationError::MissingField("title"))?;
        validation::validate_title(title)?;

        let task = Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: req.description,
            due_date: req.due_date,
            priority: req.priority.unwrap_or_default(),
            status: Default::default(),
            category: req.category,
            created_by: owner,
            created_at: chrono::Utc::now(),
        };
        self.store.insert_task(&task).await?;

        info!(task_id = %task.id, user_id = %owner, "task created");

        Ok(task)
    }

    /// All of the caller's tasks, newest first.
    pub async fn list(&self, owner: Uuid) -> Result<Vec<Task>, AppError> {
        self.store.tasks_for_owner(owner).await
    }

    /// Fetch one task through the ownership-scoped lookup.
    pub async fn get(&self, owner: Uuid, id: Uuid) -> Result<Task, AppError> {
        self.store
            .find_task(id, owner)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    /// Partial update with replace-if-truthy semantics: supplied non-empty
    /// strings overwrite, everything else is left unchanged. An empty
    /// string behaves like an omitted field, so this endpoint cannot
    /// clear a field.
    pub async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        req: UpdateTaskRequest,
    ) -> Result<Task, AppError> {
        let mut task = self.get(owner, id).await?;

        if let Some(title) = req.title.filter(|t| !t.is_empty()) {
            task.title = title;
        }
        if let Some(description) = req.description.filter(|d| !d.is_empty()) {
            task.description = Some(description);
        }
        if let Some(due_date) = req.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(priority) = req.priority {
            task.priority = priority;
        }
        if let Some(status) = req.status {
            task.status = status;
        }
        if let Some(category) = req.category.filter(|c| !c.is_empty()) {
            task.category = Some(category);
        }

        self.store.update_task(&task).await?;
        Ok(task)
    }

    /// Ownership-scoped delete. Tasks have no dependents, so there is
    /// nothing to cascade.
    pub async fn delete(&self, owner: Uuid, id: Uuid) -> Result<(), AppError> {
        if self.store.delete_task(id, owner).await? {
            info!(task_id = %id, user_id = %owner, "task deleted");
            Ok(())
        } else {
            Err(AppError::NotFound("Task not found".to_string()))
        }
    }
}
