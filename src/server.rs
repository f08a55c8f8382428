// Amount Kit - HTTP API
// Validation and schema metadata over REST with Axum

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::amount::SafeParse;
use crate::options::AmountOptions;
use crate::registry::{SchemaDefinition, SchemaRegistry};
use crate::specialized::ValidatorKind;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    registry: Arc<SchemaRegistry>,
}

impl AppState {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Body of POST /api/validate/:kind
#[derive(Deserialize)]
struct ValidateRequest {
    value: Value,
    #[serde(default)]
    options: AmountOptions,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/schemas - All registered schemas as JSON-Schema fragments
async fn get_schemas(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.registry.to_json_schema()))
}

/// GET /api/schemas/:id - One schema definition
async fn get_schema(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.registry.get(&id) {
        Some(schema) => (StatusCode::OK, Json(ApiResponse::ok(schema.clone()))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<SchemaDefinition>::err(format!("Unknown schema: {}", id))),
        )
            .into_response(),
    }
}

/// POST /api/validate/:kind - safe-parse a value with the named validator
async fn validate(Path(kind): Path<String>, Json(request): Json<ValidateRequest>) -> Response {
    let kind: ValidatorKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => {
            log::warn!("{}", e);
            return (StatusCode::NOT_FOUND, Json(ApiResponse::<SafeParse>::err(e.to_string()))).into_response();
        }
    };

    let outcome = kind.safe_parse(&request.value, &request.options);
    if let Some(error) = &outcome.error {
        log::info!("Rejected {} {}: {}", kind.label(), request.value, error);
    }

    (StatusCode::OK, Json(ApiResponse::ok(outcome))).into_response()
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/schemas", get(get_schemas))
        .route("/schemas/:id", get(get_schema))
        .route("/validate/:kind", post(validate))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================
