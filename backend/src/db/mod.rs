//! SQLite persistence for component documents, reviews and users.
//!
//! Handlers open a connection per request through `open`, which also makes sure
//! the schema exists. Query functions take a `&Connection` so tests can run them
//! against any database file.

pub mod components;
pub mod reviews;
pub mod users;

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::path::Path;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id    TEXT PRIMARY KEY,
    name  TEXT NOT NULL,
    email TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS components (
    id              TEXT PRIMARY KEY,
    owner_id        TEXT NOT NULL REFERENCES users(id),
    type            TEXT NOT NULL,
    live_code       TEXT NOT NULL,
    component_path  TEXT NOT NULL,
    title           TEXT NOT NULL,
    description     TEXT NOT NULL,
    code_snippet    TEXT NOT NULL,
    component_code  TEXT NOT NULL,
    components_uses TEXT NOT NULL,
    image           TEXT,
    video           TEXT,
    created_at      TEXT NOT NULL,
    updated_at      TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS reviews (
    id           TEXT PRIMARY KEY,
    component_id TEXT NOT NULL REFERENCES components(id),
    user_id      TEXT NOT NULL REFERENCES users(id),
    comment      TEXT NOT NULL,
    rating       INTEGER NOT NULL,
    created_at   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_reviews_component ON reviews(component_id);
"#;

/// Opens the database at `path` and creates missing tables.
pub fn open(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}

pub(crate) fn now() -> String {
    Utc::now().to_rfc3339()
}

pub(crate) fn parse_timestamp(raw: Option<String>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|ts| ts.with_timezone(&Utc))
}

#[cfg(test)]
pub(crate) fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().expect("in-memory database");
    init_schema(&conn).expect("schema");
    conn
}
