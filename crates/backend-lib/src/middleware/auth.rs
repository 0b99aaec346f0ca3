// ============================
// crates/backend-lib/src/middleware/auth.rs
// ============================
//! Bearer-token session verification.
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{error::AppError, storage::Store, AppState};

/// The caller identity resolved from a verified token, injected into
/// request extensions for the task handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub Uuid);

/// Reject any request without a valid bearer token before the task
/// handlers run. The token payload is trusted as-is; the user record is
/// not re-fetched, so a token outlives account changes until it expires.
pub async fn require_auth<S: Store + 'static>(
    State(state): State<AppState<S>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized("Not authorized, no token"))?;

    let user_id = state.token_keys.verify(token)?;
    request.extensions_mut().insert(AuthUser(user_id));

    Ok(next.run(request).await)
}
