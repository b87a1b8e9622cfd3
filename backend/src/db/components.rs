use common::model::component::Component;
use common::model::user::OwnerSummary;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{now, parse_timestamp};

/// All mandatory fields of a new component plus optional media URLs.
#[derive(Debug, Clone, Default)]
pub struct NewComponent {
    pub owner_id: String,
    pub component_type: String,
    pub live_code: String,
    pub component_path: String,
    pub title: String,
    pub description: String,
    pub code_snippet: String,
    pub component_code: String,
    pub components_uses: String,
    pub image: Option<String>,
    pub video: Option<String>,
}

/// Partial update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub component_path: Option<String>,
    pub image: Option<String>,
    pub video: Option<String>,
}

const SELECT_COMPONENT: &str = r#"
SELECT c.id, c.owner_id, c.type, c.live_code, c.component_path, c.title, c.description,
       c.code_snippet, c.component_code, c.components_uses, c.image, c.video,
       c.created_at, c.updated_at, u.name, u.email
FROM components c
LEFT JOIN users u ON u.id = c.owner_id
"#;

fn component_from_row(row: &Row<'_>) -> rusqlite::Result<Component> {
    let owner_id: String = row.get(1)?;
    let owner_name: Option<String> = row.get(14)?;
    let owner_email: Option<String> = row.get(15)?;
    let owner = match (owner_name, owner_email) {
        (Some(name), Some(email)) => Some(OwnerSummary {
            id: owner_id.clone(),
            name,
            email,
        }),
        _ => None,
    };

    Ok(Component {
        id: row.get(0)?,
        owner_id,
        owner,
        component_type: row.get(2)?,
        live_code: row.get(3)?,
        component_path: row.get(4)?,
        title: row.get(5)?,
        description: row.get(6)?,
        code_snippet: row.get(7)?,
        component_code: row.get(8)?,
        components_uses: row.get(9)?,
        image: row.get(10)?,
        video: row.get(11)?,
        created_at: parse_timestamp(row.get(12)?),
        updated_at: parse_timestamp(row.get(13)?),
    })
}

pub fn insert_component(conn: &Connection, new: &NewComponent) -> rusqlite::Result<String> {
    let id = uuid::Uuid::new_v4().to_string();
    let ts = now();
    conn.execute(
        "INSERT INTO components (id, owner_id, type, live_code, component_path, title, description,
                                 code_snippet, component_code, components_uses, image, video,
                                 created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?13)",
        params![
            id,
            new.owner_id,
            new.component_type,
            new.live_code,
            new.component_path,
            new.title,
            new.description,
            new.code_snippet,
            new.component_code,
            new.components_uses,
            new.image,
            new.video,
            ts,
        ],
    )?;
    Ok(id)
}

pub fn get_component(conn: &Connection, id: &str) -> rusqlite::Result<Option<Component>> {
    conn.query_row(
        &format!("{} WHERE c.id = ?1", SELECT_COMPONENT),
        params![id],
        component_from_row,
    )
    .optional()
}

/// All components, most recently created first.
pub fn list_components(conn: &Connection) -> rusqlite::Result<Vec<Component>> {
    let mut stmt = conn.prepare(&format!("{} ORDER BY c.created_at DESC", SELECT_COMPONENT))?;
    let rows = stmt.query_map([], component_from_row)?;
    rows.collect()
}

/// Owner of a component, or `None` if it does not exist.
pub fn owner_of(conn: &Connection, id: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        "SELECT owner_id FROM components WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )
    .optional()
}

/// Applies `patch` and refreshes `updated_at`. Returns whether a row matched.
pub fn update_component(
    conn: &Connection,
    id: &str,
    patch: &ComponentPatch,
) -> rusqlite::Result<bool> {
    let changed = conn.execute(
        "UPDATE components
         SET title = COALESCE(?1, title),
             description = COALESCE(?2, description),
             component_path = COALESCE(?3, component_path),
             image = COALESCE(?4, image),
             video = COALESCE(?5, video),
             updated_at = ?6
         WHERE id = ?7",
        params![
            patch.title,
            patch.description,
            patch.component_path,
            patch.image,
            patch.video,
            now(),
            id,
        ],
    )?;
    Ok(changed > 0)
}

/// Deletes a component together with its reviews. Returns whether it existed.
pub fn delete_component(conn: &mut Connection, id: &str) -> rusqlite::Result<bool> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM reviews WHERE component_id = ?1", params![id])?;
    let removed = tx.execute("DELETE FROM components WHERE id = ?1", params![id])?;
    tx.commit()?;
    Ok(removed > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{reviews, test_connection, users};

    fn sample(owner: &str) -> NewComponent {
        NewComponent {
            owner_id: owner.to_string(),
            component_type: "input".to_string(),
            live_code: "<input />".to_string(),
            component_path: "src/components/Input.tsx".to_string(),
            title: "Input".to_string(),
            description: "Text field".to_string(),
            code_snippet: "<Input />".to_string(),
            component_code: "export const Input = () => null;".to_string(),
            components_uses: "Forms".to_string(),
            image: None,
            video: None,
        }
    }

    #[test]
    fn inserted_component_is_read_back_with_owner() {
        let conn = test_connection();
        users::upsert_user(&conn, "u-1", "Ada", "ada@example.com").unwrap();
        let id = insert_component(&conn, &sample("u-1")).unwrap();

        let component = get_component(&conn, &id).unwrap().unwrap();
        assert_eq!(component.title.as_deref(), Some("Input"));
        assert_eq!(component.owner.as_ref().map(|o| o.name.as_str()), Some("Ada"));
        assert!(component.created_at.is_some());
        assert_eq!(owner_of(&conn, &id).unwrap().as_deref(), Some("u-1"));
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let conn = test_connection();
        users::upsert_user(&conn, "u-1", "Ada", "ada@example.com").unwrap();
        let id = insert_component(&conn, &sample("u-1")).unwrap();

        let patch = ComponentPatch {
            title: Some("Search input".to_string()),
            image: Some("/media/abc.png".to_string()),
            ..Default::default()
        };
        assert!(update_component(&conn, &id, &patch).unwrap());

        let component = get_component(&conn, &id).unwrap().unwrap();
        assert_eq!(component.title.as_deref(), Some("Search input"));
        assert_eq!(component.description.as_deref(), Some("Text field"));
        assert_eq!(component.image.as_deref(), Some("/media/abc.png"));
        assert_eq!(component.video, None);

        assert!(!update_component(&conn, "missing", &patch).unwrap());
    }

    #[test]
    fn delete_removes_reviews() {
        let mut conn = test_connection();
        users::upsert_user(&conn, "u-1", "Ada", "ada@example.com").unwrap();
        let id = insert_component(&conn, &sample("u-1")).unwrap();
        reviews::insert_review(&conn, &id, "u-1", "Nice", 5).unwrap();

        assert!(delete_component(&mut conn, &id).unwrap());
        assert!(get_component(&conn, &id).unwrap().is_none());
        assert!(reviews::list_reviews(&conn, &id).unwrap().is_empty());
        assert!(!delete_component(&mut conn, &id).unwrap());
    }
}
