//! Development server for the submission form.
//!
//! Stores submissions in memory behind `/data`, collects browser diagnostics
//! on `/api/logs`, and serves the built frontend for every other path.

pub mod config;
pub mod domain;
pub mod error;
pub mod rest;

use std::any::Any as PanicPayload;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::domain::DataStore;
use crate::error::AppError;

/// Application state shared by all handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub data_store: DataStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Build the router with CORS and static fallback configured from `config`
pub fn build_router(state: AppState, config: &Config) -> Result<Router> {
    let routes = Router::new()
        .route("/data", post(rest::create_data).get(rest::list_data))
        .route("/data/:id", get(rest::get_data).delete(rest::delete_data))
        .route("/api/logs", post(rest::log_message))
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(state);

    apply_layers(routes, config)
}

/// Wrap `router` in CORS and turn handler panics into 500 responses
pub fn apply_layers(router: Router, config: &Config) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin {:?}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Ok(router
        .layer(cors)
        .layer(CatchPanicLayer::custom(internal_error_response)))
}

fn internal_error_response(panic: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let reason = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(reason).into_response()
}
