pub mod bookings;
pub mod error;
pub mod inquiries;
pub mod mail;
pub mod rooms;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use riverview_db::Database;

use crate::mail::Mailer;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub mailer: Mailer,
}

/// The full public API surface. Layers (CORS, request tracing) are applied
/// by the binary; tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/rooms", get(rooms::list_rooms))
        .route("/api/rooms/{slug}", get(rooms::get_room))
        .route("/api/bookings", post(bookings::create_booking))
        .route("/api/contact", post(inquiries::create_inquiry))
        .with_state(state)
}
