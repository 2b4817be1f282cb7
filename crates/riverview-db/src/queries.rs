use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{OptionalExtension, Row};

use riverview_types::{BookingRequest, Inquiry, NewBookingRequest, NewInquiry, NewRoom, Room};

use crate::Database;

impl Database {
    // -- Rooms --

    /// All rooms in insertion order. Empty before seeding has run.
    pub fn list_rooms(&self) -> Result<Vec<Room>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, slug, description, size, beds, bathrooms, adults, children,
                        view, price, room_numbers, features, image_url, gallery
                 FROM rooms ORDER BY id",
            )?;
            let rooms = stmt
                .query_map([], room_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rooms)
        })
    }

    pub fn room_by_slug(&self, slug: &str) -> Result<Option<Room>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, slug, description, size, beds, bathrooms, adults, children,
                        view, price, room_numbers, features, image_url, gallery
                 FROM rooms WHERE slug = ?1",
            )?;
            let room = stmt.query_row([slug], room_from_row).optional()?;
            Ok(room)
        })
    }

    /// Seeding only; not reachable over the wire.
    pub fn create_room(&self, room: &NewRoom) -> Result<Room> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO rooms (name, slug, description, size, beds, bathrooms, adults,
                                    children, view, price, room_numbers, features, image_url, gallery)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
                rusqlite::params![
                    room.name,
                    room.slug,
                    room.description,
                    room.size,
                    room.beds,
                    room.bathrooms,
                    room.adults,
                    room.children,
                    room.view,
                    room.price,
                    to_json_column(room.room_numbers.as_ref())?,
                    to_json_column(room.features.as_ref())?,
                    room.image_url,
                    to_json_column(room.gallery.as_ref())?,
                ],
            )?;

            Ok(Room {
                id: conn.last_insert_rowid(),
                name: room.name.clone(),
                slug: room.slug.clone(),
                description: room.description.clone(),
                size: room.size.clone(),
                beds: room.beds.clone(),
                bathrooms: room.bathrooms,
                adults: room.adults,
                children: room.children,
                view: room.view.clone(),
                price: room.price,
                room_numbers: room.room_numbers.clone(),
                features: room.features.clone(),
                image_url: room.image_url.clone(),
                gallery: room.gallery.clone(),
            })
        })
    }

    // -- Booking requests --

    /// Assigns id, creation timestamp and the initial "pending" status.
    pub fn create_booking_request(&self, booking: &NewBookingRequest) -> Result<BookingRequest> {
        let created_at = Utc::now();

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO booking_requests (name, email, phone, check_in, check_out,
                                               adults, children, room_type, message, created_at, status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, 'pending')",
                rusqlite::params![
                    booking.name,
                    booking.email,
                    booking.phone,
                    booking.check_in.map(|t| t.to_rfc3339()),
                    booking.check_out.map(|t| t.to_rfc3339()),
                    booking.adults,
                    booking.children,
                    booking.room_type,
                    booking.message,
                    created_at.to_rfc3339(),
                ],
            )?;

            Ok(BookingRequest {
                id: conn.last_insert_rowid(),
                name: booking.name.clone(),
                email: booking.email.clone(),
                phone: booking.phone.clone(),
                check_in: booking.check_in,
                check_out: booking.check_out,
                adults: booking.adults,
                children: booking.children,
                room_type: booking.room_type.clone(),
                message: booking.message.clone(),
                created_at,
                status: "pending".to_string(),
            })
        })
    }

    /// Direct read-back for tests; no route exposes stored bookings.
    pub fn booking_request_by_id(&self, id: i64) -> Result<Option<BookingRequest>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, email, phone, check_in, check_out, adults, children,
                        room_type, message, created_at, status
                 FROM booking_requests WHERE id = ?1",
            )?;
            let booking = stmt.query_row([id], booking_from_row).optional()?;
            Ok(booking)
        })
    }

    // -- Inquiries --

    pub fn create_inquiry(&self, inquiry: &NewInquiry) -> Result<Inquiry> {
        let created_at = Utc::now();

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO inquiries (name, email, phone, subject, message, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    inquiry.name,
                    inquiry.email,
                    inquiry.phone,
                    inquiry.subject,
                    inquiry.message,
                    created_at.to_rfc3339(),
                ],
            )?;

            Ok(Inquiry {
                id: conn.last_insert_rowid(),
                name: inquiry.name.clone(),
                email: inquiry.email.clone(),
                phone: inquiry.phone.clone(),
                subject: inquiry.subject.clone(),
                message: inquiry.message.clone(),
                created_at,
            })
        })
    }
}

// -- Row mapping --

fn room_from_row(row: &Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        size: row.get(4)?,
        beds: row.get(5)?,
        bathrooms: row.get(6)?,
        adults: row.get(7)?,
        children: row.get(8)?,
        view: row.get(9)?,
        price: row.get(10)?,
        room_numbers: from_json_column(row, 11)?,
        features: from_json_column(row, 12)?,
        image_url: row.get(13)?,
        gallery: from_json_column(row, 14)?,
    })
}

fn booking_from_row(row: &Row<'_>) -> rusqlite::Result<BookingRequest> {
    Ok(BookingRequest {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        check_in: from_timestamp_column(row, 4)?,
        check_out: from_timestamp_column(row, 5)?,
        adults: row.get(6)?,
        children: row.get(7)?,
        room_type: row.get(8)?,
        message: row.get(9)?,
        created_at: from_timestamp_column(row, 10)?
            .ok_or_else(|| column_error(10, "missing created_at"))?,
        status: row.get(11)?,
    })
}

/// String-list columns are stored as JSON text.
fn to_json_column(list: Option<&Vec<String>>) -> Result<Option<String>> {
    list.map(|l| serde_json::to_string(l).map_err(anyhow::Error::from))
        .transpose()
}

fn from_json_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<Vec<String>>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| serde_json::from_str(&s).map_err(|e| column_error(idx, e)))
        .transpose()
}

fn from_timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| {
        DateTime::parse_from_rfc3339(&s)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| column_error(idx, e))
    })
    .transpose()
}

fn column_error<E>(idx: usize, err: E) -> rusqlite::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_room(slug: &str) -> NewRoom {
        NewRoom {
            name: "Test Room".to_string(),
            slug: slug.to_string(),
            description: "A room for tests.".to_string(),
            size: "20 sqm".to_string(),
            beds: "1".to_string(),
            bathrooms: 1,
            adults: 2,
            children: 1,
            view: Some("River View".to_string()),
            price: Some(9000),
            room_numbers: Some(vec!["301".to_string(), "302".to_string()]),
            features: Some(vec!["Flat TV".to_string()]),
            image_url: "https://example.com/room.jpg".to_string(),
            gallery: Some(vec![
                "https://example.com/a.jpg".to_string(),
                "https://example.com/b.jpg".to_string(),
            ]),
        }
    }

    #[test]
    fn room_round_trips_by_slug() {
        let db = Database::open_in_memory().unwrap();
        let created = db.create_room(&sample_room("test-room")).unwrap();

        let fetched = db.room_by_slug("test-room").unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.gallery.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn room_by_slug_misses_cleanly() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.room_by_slug("does-not-exist").unwrap().is_none());
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        db.create_room(&sample_room("twin")).unwrap();
        assert!(db.create_room(&sample_room("twin")).is_err());
    }

    #[test]
    fn null_list_columns_stay_none() {
        let db = Database::open_in_memory().unwrap();
        let mut room = sample_room("bare");
        room.room_numbers = None;
        room.features = None;
        room.gallery = None;
        db.create_room(&room).unwrap();

        let fetched = db.room_by_slug("bare").unwrap().unwrap();
        assert_eq!(fetched.room_numbers, None);
        assert_eq!(fetched.gallery, None);
    }

    #[test]
    fn booking_gets_id_timestamp_and_pending_status() {
        let db = Database::open_in_memory().unwrap();
        let before = Utc::now();

        let booking = db
            .create_booking_request(&NewBookingRequest {
                name: "Jane Guest".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+8801700000000".to_string(),
                check_in: Some(Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()),
                check_out: None,
                adults: Some(2),
                children: None,
                room_type: Some("Premium King Room".to_string()),
                message: None,
            })
            .unwrap();

        assert_eq!(booking.status, "pending");
        assert!(booking.created_at >= before);

        let stored = db.booking_request_by_id(booking.id).unwrap().unwrap();
        assert_eq!(stored, booking);
    }

    #[test]
    fn concurrent_style_inserts_get_distinct_ids() {
        let db = Database::open_in_memory().unwrap();
        let new = NewBookingRequest {
            name: "Jane Guest".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+8801700000000".to_string(),
            check_in: None,
            check_out: None,
            adults: None,
            children: None,
            room_type: None,
            message: None,
        };

        let a = db.create_booking_request(&new).unwrap();
        let b = db.create_booking_request(&new).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn inquiry_round_trips_through_insert() {
        let db = Database::open_in_memory().unwrap();
        let inquiry = db
            .create_inquiry(&NewInquiry {
                name: "Jane Guest".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+8801700000000".to_string(),
                subject: None,
                message: "Do you have parking?".to_string(),
            })
            .unwrap();

        assert!(inquiry.id > 0);
        assert_eq!(inquiry.subject, None);
    }
}
