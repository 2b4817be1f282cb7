//! One-time reference-data bootstrap. Runs at startup before the listener
//! binds; inserting only into an empty table makes it idempotent across
//! process restarts.

use anyhow::Result;
use tracing::info;

use riverview_types::NewRoom;

use crate::Database;

/// Inserts the fixed room set if none exist. Returns how many rooms were
/// inserted (0 when the table is already populated).
pub fn seed_rooms(db: &Database) -> Result<usize> {
    if !db.list_rooms()?.is_empty() {
        return Ok(0);
    }

    info!("Seeding rooms...");
    let rooms = default_rooms();
    for room in &rooms {
        db.create_room(room)?;
    }
    info!("Rooms seeded successfully.");
    Ok(rooms.len())
}

fn default_rooms() -> Vec<NewRoom> {
    let features: Vec<String> = [
        "Breakfast Included",
        "Flat TV",
        "Hairdryer",
        "Writing Desk",
        "Towel Warmer",
        "Bathtub",
        "Balcony",
        "Ironing Board",
        "Kettle",
        "Telephone",
        "Safe",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    vec![
        NewRoom {
            name: "Premium King Room".to_string(),
            slug: "premium-king".to_string(),
            description: "Experience unmatched luxury with our AI-powered king-size bed \
                          featuring massage functionality, premium pillow options, smart \
                          controls, and a serene river view."
                .to_string(),
            size: "34 sqm".to_string(),
            beds: "1".to_string(),
            bathrooms: 1,
            adults: 2,
            children: 2,
            view: Some("River View".to_string()),
            price: Some(15000),
            room_numbers: Some(vec!["105".to_string(), "210".to_string()]),
            features: Some(features.clone()),
            image_url: "https://images.unsplash.com/photo-1590490360182-c33d57733427?q=80&w=1000&auto=format&fit=crop".to_string(),
            gallery: Some(vec![
                "https://images.unsplash.com/photo-1590490360182-c33d57733427?q=80&w=1000&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?q=80&w=1000&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1611892440504-42a792e24d32?q=80&w=1000&auto=format&fit=crop".to_string(),
            ]),
        },
        NewRoom {
            name: "Deluxe King Room".to_string(),
            slug: "deluxe-king".to_string(),
            description: "Elegant interiors, premium bedding, smart controls, and a calm \
                          river-facing atmosphere designed for comfort and relaxation."
                .to_string(),
            size: "23 sqm".to_string(),
            beds: "2 Beds".to_string(),
            bathrooms: 2,
            adults: 1,
            children: 2,
            view: Some("River View".to_string()),
            price: Some(12000),
            room_numbers: Some(
                ["101", "102", "103", "206", "207", "208"]
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            ),
            features: Some(features.clone()),
            image_url: "https://images.unsplash.com/photo-1618773928121-c32242e63f39?q=80&w=1000&auto=format&fit=crop".to_string(),
            gallery: Some(vec![
                "https://images.unsplash.com/photo-1618773928121-c32242e63f39?q=80&w=1000&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1566665797739-1674de7a421a?q=80&w=1000&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1584132967334-10e028bd69f7?q=80&w=1000&auto=format&fit=crop".to_string(),
            ]),
        },
        NewRoom {
            name: "Standard Room".to_string(),
            slug: "standard-room".to_string(),
            description: "A comfortable and practical stay with essential amenities, ideal \
                          for short visits and business travelers."
                .to_string(),
            size: "23 sqm".to_string(),
            beds: "2 Beds".to_string(),
            bathrooms: 1,
            adults: 2,
            children: 1,
            view: Some("City View".to_string()),
            price: Some(8000),
            room_numbers: Some(vec!["104".to_string(), "209".to_string()]),
            features: Some(features),
            image_url: "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?q=80&w=1000&auto=format&fit=crop".to_string(),
            gallery: Some(vec![
                "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?q=80&w=1000&auto=format&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1595576508898-0ad5c879a061?q=80&w=1000&auto=format&fit=crop".to_string(),
            ]),
        },
    ]
}
