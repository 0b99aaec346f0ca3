// ============================
// crates/backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the taskboard JSON API.

pub mod config;
pub mod error;
pub mod storage;
pub mod validation;
pub mod auth;
pub mod tasks;
pub mod middleware;
pub mod http_router;

use std::sync::Arc;

use crate::auth::{AuthService, TokenKeys};
use crate::config::Settings;
use crate::storage::Store;
use crate::tasks::TaskService;

/// Application state shared across all handlers. Constructed once at
/// startup around a single store handle; there is no other cross-request
/// state.
pub struct AppState<S> {
    /// Authentication service
    pub auth: AuthService<S>,
    /// Task service
    pub tasks: TaskService<S>,
    /// Settings
    pub settings: Arc<Settings>,
    /// Token signing/verification keys
    pub token_keys: Arc<TokenKeys>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            auth: self.auth.clone(),
            tasks: self.tasks.clone(),
            settings: self.settings.clone(),
            token_keys: self.token_keys.clone(),
        }
    }
}

impl<S: Store> AppState<S> {
    /// Create a new application state
    pub fn new(store: S, settings: Settings) -> Self {
        let store = Arc::new(store);
        let token_keys = Arc::new(TokenKeys::new(&settings.token_secret));

        Self {
            auth: AuthService::new(store.clone(), token_keys.clone()),
            tasks: TaskService::new(store),
            settings: Arc::new(settings),
            token_keys,
        }
    }
}
