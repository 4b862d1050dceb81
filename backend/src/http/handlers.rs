//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the query itself.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Local, NaiveDate};

use super::dto::{DocsResponse, EclipseRecord, HealthResponse, WelcomeResponse};
use super::error::AppError;
use super::state::AppState;
use crate::models::EclipseKind;
use crate::services::eclipses as eclipse_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Message returned when the dataset holds no future eclipse.
pub const NO_UPCOMING_MESSAGE: &str = "No upcoming eclipses found.";

/// Message returned for an unsupported `{type}` segment.
pub const INVALID_TYPE_MESSAGE: &str = "Invalid type. Use 'solar' or 'lunar'.";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

// =============================================================================
// Informational
// =============================================================================

/// GET /
pub async fn home() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}

/// GET /docs
pub async fn docs() -> Json<DocsResponse> {
    Json(DocsResponse::default())
}

/// GET /health
///
/// Reports how many records are being served and how the dataset is loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let summary = state.repository.summary().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: summary.records,
        dropped_rows: summary.dropped_rows,
        load_strategy: state.repository.strategy().to_string(),
    }))
}

// =============================================================================
// Eclipses
// =============================================================================

/// GET /eclipses
///
/// List all eclipses in dataset order.
pub async fn list_eclipses(State(state): State<AppState>) -> HandlerResult<Vec<EclipseRecord>> {
    let eclipses = eclipse_services::fetch_all(state.repository.as_ref()).await?;
    Ok(Json(eclipses))
}

/// GET /eclipses/next
///
/// The first eclipse in dataset order dated today or later.
pub async fn next_eclipse(State(state): State<AppState>) -> HandlerResult<EclipseRecord> {
    let next = eclipse_services::fetch_next_upcoming(state.repository.as_ref(), today()).await?;
    next.map(Json)
        .ok_or_else(|| AppError::NotFound(NO_UPCOMING_MESSAGE.to_string()))
}

/// GET /eclipses/{eclipse_type}
///
/// Eclipses of one family. An empty match is a 200 with an empty list.
pub async fn eclipses_by_type(
    State(state): State<AppState>,
    Path(eclipse_type): Path<String>,
) -> HandlerResult<Vec<EclipseRecord>> {
    let kind: EclipseKind = eclipse_type
        .parse()
        .map_err(|_| AppError::BadRequest(INVALID_TYPE_MESSAGE.to_string()))?;

    let eclipses = eclipse_services::fetch_by_type(state.repository.as_ref(), kind.as_str()).await?;
    if eclipses.is_empty() {
        tracing::debug!("No {} eclipses found", kind);
    }

    Ok(Json(eclipses))
}
