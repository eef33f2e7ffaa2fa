//! Response rendering.
//!
//! # Responsibilities
//! - Turn a resolution into an HTTP response
//! - Map misses and gate failures to 404 with a short diagnostic
//!
//! # Design Decisions
//! - Resolved payloads are always JSON (`Content-Type: application/json`)
//! - Authored codes HTTP cannot carry as a final status (below 200) become
//!   500 with a diagnostic instead of being silently rewritten

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::routing::Resolution;

pub const INVALID_PREFIX_BODY: &str = "Error: invalid prefix";
pub const NOT_FOUND_BODY: &str = "Error: route not found";

/// Result of handling one request, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The path lacks the configured prefix.
    InvalidPrefix,
    Resolved(Resolution),
}

impl Outcome {
    /// The status that will be sent.
    pub fn status(&self) -> u16 {
        match self {
            Outcome::InvalidPrefix => StatusCode::NOT_FOUND.as_u16(),
            Outcome::Resolved(resolution) => final_status(resolution.status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
                .as_u16(),
        }
    }
}

/// `code` as a final response status. Informational (1xx) and sub-100 codes
/// cannot end an exchange.
fn final_status(code: u16) -> Option<StatusCode> {
    if code < 200 {
        return None;
    }
    StatusCode::from_u16(code).ok()
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let resolution = match self {
            Outcome::InvalidPrefix => return (StatusCode::NOT_FOUND, INVALID_PREFIX_BODY).into_response(),
            Outcome::Resolved(resolution) => resolution,
        };

        let Some(payload) = resolution.payload else {
            return (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response();
        };

        match final_status(resolution.status) {
            Some(status) => (status, Json(payload)).into_response(),
            None => {
                tracing::warn!(status = resolution.status, "Authored status code is not valid HTTP");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error: unsupported status code {:03}", resolution.status),
                )
                    .into_response()
            }
        }
    }
}
