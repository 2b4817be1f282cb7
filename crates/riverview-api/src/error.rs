use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use riverview_types::FieldIssue;

/// Route-layer failure taxonomy. Validation carries per-field detail,
/// not-found carries its message, everything else collapses to a generic
/// 500 with the cause logged server-side only.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        message: &'static str,
        issues: Vec<FieldIssue>,
    },

    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// An unreadable body (bad syntax, wrong content type) gets the same
/// `{message, errors}` shape as field-level failures.
pub fn body_rejection(message: &'static str, rejection: JsonRejection) -> ApiError {
    ApiError::Validation {
        message,
        issues: vec![FieldIssue {
            field: "body".to_string(),
            message: rejection.body_text(),
        }],
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation { message, issues } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message, "errors": issues })),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": message })),
            )
                .into_response(),
            ApiError::Internal(err) => {
                error!("internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
