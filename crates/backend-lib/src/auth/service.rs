// ============================
// crates/backend-lib/src/auth/service.rs
// ============================
//! Registration and login.
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::auth::password;
use crate::auth::token::TokenKeys;
use crate::error::AppError;
use crate::storage::{Store, UserRecord};
use crate::validation;
use taskboard_common::{AuthResponse, LoginRequest, RegisterRequest};

/// Authentication service: validates credentials, enforces uniqueness,
/// hashes passwords and issues session tokens.
pub struct AuthService<S> {
    store: Arc<S>,
    keys: Arc<TokenKeys>,
}

impl<S> Clone for AuthService<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            keys: self.keys.clone(),
        }
    }
}

impl<S: Store> AuthService<S> {
    pub fn new(store: Arc<S>, keys: Arc<TokenKeys>) -> Self {
        Self { store, keys }
    }

    /// Register a new user and log them in.
    ///
    /// One probe covers both uniqueness constraints; the error does not
    /// say which field collided.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthResponse, AppError> {
        let (username, email, mut password) = validation::validate_register(&req)?;

        if self
            .store
            .find_user_by_username_or_email(&username, &email)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateUser);
        }

        // The plaintext is wiped as soon as the hash exists; it is never
        // stored or logged.
        let password_hash = password::hash_password_secure(&mut password)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let user = UserRecord {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: chrono::Utc::now(),
        };
        self.store.insert_user(&user).await?;

        info!(user_id = %user.id, "user registered");

        let token = self.keys.issue(user.id)?;
        Ok(AuthResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            token,
        })
    }

    /// Log an existing user in, issuing a fresh token.
    ///
    /// Unknown email and wrong password produce the same error, so the
    /// endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthResponse, AppError> {
        let (email, password) = validation::validate_login(&req)?;

        let user = self
            .store
            .find_user_by_email(&email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !password::verify_password(&user.password_hash, &password) {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.keys.issue(user.id)?;
        Ok(AuthResponse {
            id: user.id,
            username: user.username,
            email: user.email,
            token,
        })
    }
}
