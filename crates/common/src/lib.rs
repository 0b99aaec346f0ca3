// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! shared between the taskboard backend and its clients.
//! This module defines the JSON API request/response shapes and the task model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority levels
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Task progress states
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Completed,
}

/// A unit of work owned by exactly one user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned task id
    pub id: Uuid,
    /// Short description of the work (required)
    pub title: String,
    /// Longer free-form description
    pub description: Option<String>,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    /// Priority (defaults to medium)
    pub priority: Priority,
    /// Progress state (defaults to todo)
    pub status: Status,
    /// Optional category label
    pub category: Option<String>,
    /// Owning user id, set at creation and never changed
    pub created_by: Uuid,
    /// Creation timestamp, set by the store
    pub created_at: DateTime<Utc>,
}

/// Registration request body
/// # Fields
/// * `username` - Desired unique username
/// * `email` - Unique email address
/// * `password` - Plaintext password, hashed before storage
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request body
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful register/login response: the user's public fields plus a
/// bearer token. The password hash is never part of any response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub token: String,
}

/// Task creation request body. Only `title` is required; unsupplied
/// optional fields take their type defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

/// Partial task update request body. Supplied non-empty fields overwrite
/// the stored value; omitted or empty fields leave it unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub category: Option<String>,
}

/// Generic confirmation response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}
