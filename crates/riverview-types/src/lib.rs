pub mod api;
pub mod validate;

pub use api::{BookingRequest, FieldIssue, Inquiry, NewBookingRequest, NewInquiry, NewRoom, Room};
