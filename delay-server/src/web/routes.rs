//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::delay::DelayError;
use crate::domain::Journey;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/delay/sbb", get(next_departures_sbb))
        .route("/delay/opendata", get(next_departure_opendata))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The next ten departures from the legacy station board, as JSON.
async fn next_departures_sbb(
    State(state): State<AppState>,
    Query(req): Query<BoardRequest>,
) -> Result<Json<Vec<Journey>>, AppError> {
    let journeys = state
        .delay
        .list_next_10(
            req.from.as_deref().unwrap_or_default(),
            req.to.as_deref(),
            req.products.as_deref(),
        )
        .await?;

    Ok(Json(journeys))
}

/// One-line delay summary from the connections API, as plain text.
async fn next_departure_opendata(
    State(state): State<AppState>,
    Query(req): Query<ConnectionRequest>,
) -> Result<String, AppError> {
    let summary = state
        .delay
        .next_departure_alt(
            req.from.as_deref().unwrap_or_default(),
            req.to.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(summary)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
}

impl From<DelayError> for AppError {
    fn from(e: DelayError) -> Self {
        let message = e.to_string();
        match e {
            DelayError::InvalidCategory(_)
            | DelayError::UnknownStation(_)
            | DelayError::InvalidArgument(_) => AppError::BadRequest { message },
            DelayError::EmptyResponse { .. } => AppError::NotFound { message },
            DelayError::MalformedConnection(_) | DelayError::Provider(_) => {
                AppError::BadGateway { message }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
