use axum::extract::rejection::JsonRejection;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

use riverview_types::NewBookingRequest;

use crate::AppState;
use crate::error::{ApiError, body_rejection};

/// POST /api/bookings — validate, persist, then fire the staff notification.
///
/// The body is re-validated here even though the client pre-validates; the
/// server never trusts client-side checks.
pub async fn create_booking(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|rej| body_rejection("Invalid booking data", rej))?;
    let input = NewBookingRequest::from_json(&body).map_err(|issues| ApiError::Validation {
        message: "Invalid booking data",
        issues,
    })?;

    let db = state.clone();
    let booking = tokio::task::spawn_blocking(move || db.db.create_booking_request(&input))
        .await
        .map_err(anyhow::Error::from)??;

    // Fire-and-forget; delivery never affects the response.
    state.mailer.notify_booking(&booking);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Booking request received", "id": booking.id })),
    ))
}
