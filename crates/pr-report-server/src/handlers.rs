//! API handlers.
//!
//! These call the report pipeline with a GitHub client bound to the
//! caller's credentials and translate failures into HTTP statuses.

use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use pr_report_core::{Error, User};
use pr_report_pipeline::generate_report;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::auth::{resolve_credentials, session_from_cookies};
use crate::error::{status_for, ApiError};
use crate::server::AppState;

/// Content type of report responses.
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// Query parameters of `/api/report`.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    #[serde(default)]
    pub date: Option<String>,
}

/// `GET /api/report?date=YYYY-MM-DD`: Markdown report of the caller's PRs.
pub async fn report(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(params): Query<ReportParams>,
) -> Result<Response, ApiError> {
    let credentials = resolve_credentials(&state, &jar, &headers).map_err(|e| match e {
        Error::Unauthorized(message) => {
            debug!(reason = %message, "Report request rejected");
            ApiError::unauthorized(message)
        }
        other => ApiError::from(other),
    })?;

    let date = params.date.filter(|d| !d.is_empty()).ok_or_else(|| {
        ApiError::from(Error::InvalidInput(
            "Date parameter is required".to_string(),
        ))
    })?;

    let client = state.github_client(credentials);
    let report = generate_report(&client, &date).await.map_err(|e| {
        warn!(date = %date, error = %e, "Report generation failed");
        ApiError::new(status_for(&e), format!("Failed to generate report: {}", e))
    })?;

    Ok(([(CONTENT_TYPE, MARKDOWN_CONTENT_TYPE)], report).into_response())
}

/// `GET /api/me`: the user of the current session.
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Result<Json<User>, ApiError> {
    let session = session_from_cookies(&state, &jar).map_err(|e| match e {
        Error::Unauthorized(reason) => {
            debug!(reason = %reason, "No valid session");
            ApiError::unauthorized("Unauthorized")
        }
        other => ApiError::from(other),
    })?;

    Ok(Json(session.user))
}
