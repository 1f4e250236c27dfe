//! In-memory todo REST service.
//!
//! # Overview
//! Serves list/create/update/delete for a single collection of todos under
//! `/api/todos`. State lives in one [`TodoStore`] per router and is lost when
//! the process exits.
//!
//! # Design
//! - Handlers take the raw body as `Bytes` and decode it with
//!   [`TodoInput::decode`], so every decode failure is a 400 with the
//!   serde_json message, with or without a `Content-Type` header.
//! - Path ids are taken as strings and parsed by hand so a non-integer id is
//!   a JSON 400 rather than the framework's plain-text rejection.
//! - Cross-origin access is limited to `Config::allowed_origin`.

pub mod config;
pub mod error;
pub mod model;
pub mod store;

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{header, Method, StatusCode},
    routing::{get, put},
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use model::{DeleteConfirmation, Todo, TodoInput};
pub use store::TodoStore;

/// Shared handler state.
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<TodoStore>,
}

/// Router backed by a fresh, empty store.
pub fn app(config: &Config) -> Router {
    router(AppState::default(), config)
}

pub fn router(state: AppState, config: &Config) -> Router {
    let api = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo));

    Router::new()
        .nest("/api", api)
        .layer(cors(config))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

fn cors(config: &Config) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.allowed_origin.clone()]))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE])
        .allow_credentials(true)
}

pub async fn run(listener: TcpListener, config: &Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.store.list().await)
}

async fn create_todo(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let input = TodoInput::decode(&body)?;
    let todo = state.store.create(input).await;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let id = error::path_id(path)?;
    let todo = state.store.update(id, || TodoInput::decode(&body)).await?;
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let id = error::path_id(path)?;
    state.store.delete(id).await?;
    Ok(Json(DeleteConfirmation::deleted()))
}
