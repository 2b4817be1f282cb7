use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS rooms (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            slug          TEXT NOT NULL UNIQUE,
            description   TEXT NOT NULL,
            size          TEXT NOT NULL,
            beds          TEXT NOT NULL,
            bathrooms     INTEGER NOT NULL,
            adults        INTEGER NOT NULL,
            children      INTEGER NOT NULL,
            view          TEXT,
            price         INTEGER,
            room_numbers  TEXT,           -- JSON array of labels
            features      TEXT,           -- JSON array of labels
            image_url     TEXT NOT NULL,
            gallery       TEXT            -- JSON array, ordered
        );

        CREATE TABLE IF NOT EXISTS booking_requests (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            phone       TEXT NOT NULL,
            check_in    TEXT,
            check_out   TEXT,
            adults      INTEGER,
            children    INTEGER,
            room_type   TEXT,
            message     TEXT,
            created_at  TEXT NOT NULL,
            status      TEXT NOT NULL DEFAULT 'pending'
        );

        CREATE TABLE IF NOT EXISTS inquiries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            phone       TEXT NOT NULL,
            subject     TEXT,
            message     TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
