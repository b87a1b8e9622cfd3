use common::model::review::Review;
use rusqlite::{params, Connection, OptionalExtension};

use super::{now, parse_timestamp};

pub fn insert_review(
    conn: &Connection,
    component_id: &str,
    user_id: &str,
    comment: &str,
    rating: i64,
) -> rusqlite::Result<Review> {
    let id = uuid::Uuid::new_v4().to_string();
    conn.execute(
        "INSERT INTO reviews (id, component_id, user_id, comment, rating, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![id, component_id, user_id, comment, rating, now()],
    )?;
    get_review(conn, &id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)
}

const SELECT_REVIEW: &str = r#"
SELECT r.id, r.component_id, r.user_id, u.name, r.comment, r.rating, r.created_at
FROM reviews r
LEFT JOIN users u ON u.id = r.user_id
"#;

fn review_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        component_id: row.get(1)?,
        user_id: row.get(2)?,
        user_name: row.get(3)?,
        comment: row.get(4)?,
        rating: row.get(5)?,
        created_at: parse_timestamp(row.get(6)?),
    })
}

fn get_review(conn: &Connection, id: &str) -> rusqlite::Result<Option<Review>> {
    conn.query_row(
        &format!("{} WHERE r.id = ?1", SELECT_REVIEW),
        params![id],
        review_from_row,
    )
    .optional()
}

/// Reviews of one component, newest first.
pub fn list_reviews(conn: &Connection, component_id: &str) -> rusqlite::Result<Vec<Review>> {
    let mut stmt = conn.prepare(&format!(
        "{} WHERE r.component_id = ?1 ORDER BY r.created_at DESC",
        SELECT_REVIEW
    ))?;
    let rows = stmt.query_map(params![component_id], review_from_row)?;
    rows.collect()
}
