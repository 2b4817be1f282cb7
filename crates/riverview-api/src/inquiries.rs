use axum::extract::rejection::JsonRejection;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

use riverview_types::NewInquiry;

use crate::AppState;
use crate::error::{ApiError, body_rejection};

/// POST /api/contact — same contract as bookings, for contact inquiries.
pub async fn create_inquiry(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rej| body_rejection("Invalid inquiry data", rej))?;
    let input = NewInquiry::from_json(&body).map_err(|issues| ApiError::Validation {
        message: "Invalid inquiry data",
        issues,
    })?;

    let db = state.clone();
    let inquiry = tokio::task::spawn_blocking(move || db.db.create_inquiry(&input))
        .await
        .map_err(anyhow::Error::from)??;

    state.mailer.notify_inquiry(&inquiry);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Inquiry received", "id": inquiry.id })),
    ))
}
