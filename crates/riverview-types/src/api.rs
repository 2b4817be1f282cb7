use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// -- Rooms --

/// A bookable accommodation category, not an individual physical unit.
/// One Room covers several physical room numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    pub name: String,
    /// Unique URL-safe key, immutable after creation.
    pub slug: String,
    pub description: String,
    pub size: String,
    pub beds: String,
    pub bathrooms: i64,
    pub adults: i64,
    pub children: i64,
    pub view: Option<String>,
    /// Smallest currency unit.
    pub price: Option<i64>,
    pub room_numbers: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub image_url: String,
    pub gallery: Option<Vec<String>>,
}

/// Room as inserted — the system assigns the id. Only startup seeding
/// constructs these; rooms are never created over the wire.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub size: String,
    pub beds: String,
    pub bathrooms: i64,
    pub adults: i64,
    pub children: i64,
    pub view: Option<String>,
    pub price: Option<i64>,
    pub room_numbers: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub image_url: String,
    pub gallery: Option<Vec<String>>,
}

// -- Booking requests --

/// An unconfirmed expression of interest in a stay. No inventory is held.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub adults: Option<i64>,
    pub children: Option<i64>,
    /// Free-text label chosen by the guest, not a reference to a Room.
    pub room_type: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Written once at creation ("pending"); no endpoint ever transitions it.
    pub status: String,
}

/// Client-facing booking shape — excludes id, created_at and status, which
/// the server assigns. Built from a JSON body via [`NewBookingRequest::from_json`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub adults: Option<i64>,
    pub children: Option<i64>,
    pub room_type: Option<String>,
    pub message: Option<String>,
}

// -- Inquiries --

/// A free-form contact-us message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: Option<String>,
    pub message: String,
}

// -- Validation --

/// One violated constraint on one input field. A failed validation returns
/// every issue found, never just the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
