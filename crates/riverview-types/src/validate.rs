//! Boundary validation for form submissions.
//!
//! Bodies arrive as loose JSON and are checked field by field so that one
//! response can report every problem at once. Numbers and dates submitted as
//! strings coerce; absent, null or empty-string optionals read as "not
//! provided" rather than invalid.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

use crate::api::{FieldIssue, NewBookingRequest, NewInquiry};

impl NewBookingRequest {
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldIssue>> {
        let obj = as_object(body)?;
        let mut issues = Vec::new();

        let name = required_str(obj, "name", &mut issues);
        let email = required_str(obj, "email", &mut issues);
        let phone = required_str(obj, "phone", &mut issues);
        let check_in = optional_datetime(obj, "checkIn", &mut issues);
        let check_out = optional_datetime(obj, "checkOut", &mut issues);
        let adults = optional_count(obj, "adults", &mut issues);
        let children = optional_count(obj, "children", &mut issues);
        let room_type = optional_str(obj, "roomType", &mut issues);
        let message = optional_str(obj, "message", &mut issues);

        if !issues.is_empty() {
            return Err(issues);
        }

        // All required fields are Some once issues is empty.
        Ok(Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
            check_in,
            check_out,
            adults,
            children,
            room_type,
            message,
        })
    }
}

impl NewInquiry {
    pub fn from_json(body: &Value) -> Result<Self, Vec<FieldIssue>> {
        let obj = as_object(body)?;
        let mut issues = Vec::new();

        let name = required_str(obj, "name", &mut issues);
        let email = required_str(obj, "email", &mut issues);
        let phone = required_str(obj, "phone", &mut issues);
        let subject = optional_str(obj, "subject", &mut issues);
        let message = required_str(obj, "message", &mut issues);

        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone: phone.unwrap_or_default(),
            subject,
            message: message.unwrap_or_default(),
        })
    }
}

// -- Field helpers --

fn as_object(body: &Value) -> Result<&Map<String, Value>, Vec<FieldIssue>> {
    body.as_object()
        .ok_or_else(|| vec![FieldIssue::new("body", "Expected a JSON object")])
}

fn required_str(
    obj: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            issues.push(FieldIssue::new(field, "Required"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(FieldIssue::new(field, "Expected a string"));
            None
        }
    }
}

fn optional_str(
    obj: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<String> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            issues.push(FieldIssue::new(field, "Expected a string"));
            None
        }
    }
}

/// Accepts an integer, or a string holding one ("2" coerces to 2).
fn optional_int(
    obj: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<i64> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) => Some(v),
            None => {
                issues.push(FieldIssue::new(field, "Expected an integer"));
                None
            }
        },
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => match s.trim().parse::<i64>() {
            Ok(v) => Some(v),
            Err(_) => {
                issues.push(FieldIssue::new(field, "Expected an integer"));
                None
            }
        },
        Some(_) => {
            issues.push(FieldIssue::new(field, "Expected an integer"));
            None
        }
    }
}

/// As [`optional_int`], for guest counts — negatives are invalid.
fn optional_count(
    obj: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<i64> {
    match optional_int(obj, field, issues) {
        Some(v) if v < 0 => {
            issues.push(FieldIssue::new(field, "Expected a non-negative integer"));
            None
        }
        other => other,
    }
}

/// Accepts an RFC 3339 timestamp or a plain `YYYY-MM-DD` date (read as
/// midnight UTC). Form date pickers submit both shapes.
fn optional_datetime(
    obj: &Map<String, Value>,
    field: &str,
    issues: &mut Vec<FieldIssue>,
) -> Option<DateTime<Utc>> {
    let s = match obj.get(field) {
        None | Some(Value::Null) => return None,
        Some(Value::String(s)) if s.is_empty() => return None,
        Some(Value::String(s)) => s,
        Some(_) => {
            issues.push(FieldIssue::new(field, "Expected a date"));
            return None;
        }
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = s.parse::<NaiveDate>() {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Some(dt.and_utc());
        }
    }

    issues.push(FieldIssue::new(field, "Expected a date"));
    None
}
