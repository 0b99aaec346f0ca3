// ============================
// crates/backend-lib/src/http_router.rs
// ============================
//! HTTP router and request handlers.
//!
//! Thin boundary layer: every handler translates one request into one
//! service call and serializes the result to JSON. Task routes sit behind
//! the bearer-token middleware; auth routes are open.
use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::{require_auth, AuthUser};
use crate::storage::Store;
use crate::AppState;
use taskboard_common::{
    CreateTaskRequest, LoginRequest, MessageResponse, RegisterRequest, UpdateTaskRequest,
};

/// Create the application router
pub fn create_router<S: Store + 'static>(state: AppState<S>) -> Router {
    let task_routes = Router::new()
        .route("/", post(create_task::<S>).get(list_tasks::<S>))
        .route(
            "/{id}",
            get(get_task::<S>)
                .put(update_task::<S>)
                .delete(delete_task::<S>),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth::<S>));

    Router::new()
        .route("/api", get(api_index))
        .route("/api/auth/register", post(register::<S>))
        .route("/api/auth/login", post(login::<S>))
        .nest("/api/tasks", task_routes)
        .fallback_service(ServeDir::new(state.settings.static_dir.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn api_index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Task Management API".to_string(),
    })
}

async fn register<S: Store + 'static>(
    State(state): State<AppState<S>>,
    Json(body): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth.register(body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn login<S: Store + 'static>(
    State(state): State<AppState<S>>,
    Json(body): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth.login(body).await?;
    Ok(Json(response))
}

async fn create_task<S: Store + 'static>(
    State(state): State<AppState<S>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task = state.tasks.create(user_id, body).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn list_tasks<S: Store + 'static>(
    State(state): State<AppState<S>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let tasks = state.tasks.list(user_id).await?;
    Ok(Json(tasks))
}

async fn get_task<S: Store + 'static>(
    State(state): State<AppState<S>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let task = state.tasks.get(user_id, id).await?;
    Ok(Json(task))
}

async fn update_task<S: Store + 'static>(
    State(state): State<AppState<S>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task = state.tasks.update(user_id, id, body).await?;
    Ok(Json(task))
}

async fn delete_task<S: Store + 'static>(
    State(state): State<AppState<S>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    state.tasks.delete(user_id, id).await?;
    Ok(Json(MessageResponse {
        message: "Task removed successfully".to_string(),
    }))
}
