//! HTTP server mode serving pagination fragments
//!
//! Request handlers of the catalog site can fetch the control over HTTP
//! instead of linking the crate.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::pagination::{PaginationEngine, PaginationParams};
use crate::render::HtmlRenderer;

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Pagination settings applied to every request
    pub pager: PagerConfig,
}

/// App state shared across handlers
struct AppState {
    config: ServerConfig,
    renderer: HtmlRenderer,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn error(msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the router
pub fn router(config: ServerConfig) -> Router {
    let renderer = HtmlRenderer::new(config.pager.markup.clone());
    let state = AppState { config, renderer };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/fragment", get(fragment))
        .route("/window", get(window))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::server(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::server(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

fn build_engine(state: &AppState, params: &PaginationParams) -> Result<PaginationEngine> {
    let pager = &state.config.pager;
    Ok(params
        .build(pager.default_per_page)?
        .with_page_param(&pager.page_param))
}

fn bad_request(message: String) -> Response {
    tracing::debug!(error = %message, "rejected pagination request");
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(message)),
    )
        .into_response()
}

/// Build the engine for a request, or the JSON 400 response.
///
/// `total` and `page` never reject, so a rejection here means `per_page`
/// was not a number.
fn engine_for(
    state: &AppState,
    query: std::result::Result<Query<PaginationParams>, QueryRejection>,
) -> std::result::Result<PaginationEngine, Response> {
    let Query(params) = query.map_err(|e| bad_request(e.body_text()))?;
    build_engine(state, &params).map_err(|e| bad_request(e.to_string()))
}

/// Render the pagination control as an HTML fragment
async fn fragment(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<PaginationParams>, QueryRejection>,
) -> Response {
    match engine_for(&state, query) {
        Ok(engine) => Html(engine.render_with(&state.renderer)).into_response(),
        Err(response) => response,
    }
}

/// Return the computed window as JSON
async fn window(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<PaginationParams>, QueryRejection>,
) -> Response {
    match engine_for(&state, query) {
        Ok(engine) => (StatusCode::OK, Json(ApiResponse::success(engine.summary()))).into_response(),
        Err(response) => response,
    }
}
