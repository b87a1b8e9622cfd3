use common::model::user::User;
use rusqlite::{params, Connection, OptionalExtension};

pub fn get_user(conn: &Connection, user_id: &str) -> rusqlite::Result<Option<User>> {
    conn.query_row(
        "SELECT id, name, email FROM users WHERE id = ?1",
        params![user_id],
        |row| {
            Ok(User {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
            })
        },
    )
    .optional()
}

/// Inserts or replaces a user record.
pub fn upsert_user(conn: &Connection, id: &str, name: &str, email: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO users (id, name, email) VALUES (?1, ?2, ?3)",
        params![id, name, email],
    )?;
    Ok(())
}
