use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::OwnerSummary;

/// A showcase entry: code bodies, metadata and optional media, owned by one user.
///
/// The JSON shape mirrors the document store the client was written against:
/// identifiers travel as `_id` and every other field is camelCase. Fields the
/// client may receive partially (older documents, projections) are optional so a
/// missing field never fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Server-assigned unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Identifier of the owning user. Always present on stored documents.
    pub owner_id: String,

    /// Embedded owner summary, resolved by the server when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerSummary>,

    #[serde(rename = "type", default)]
    pub component_type: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Logical location of the component source, e.g. `src/components/Button.tsx`.
    #[serde(default)]
    pub component_path: Option<String>,

    #[serde(default)]
    pub code_snippet: Option<String>,

    #[serde(default)]
    pub component_code: Option<String>,

    /// Free-text usage notes.
    #[serde(default)]
    pub components_uses: Option<String>,

    /// Renderable preview payload, displayed inside a sandboxed frame.
    #[serde(default)]
    pub live_code: Option<String>,

    /// Media URL after upload.
    #[serde(default)]
    pub image: Option<String>,

    /// Media URL after upload.
    #[serde(default)]
    pub video: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Component {
    /// Returns the owner identifier used for ownership gating, preferring the
    /// embedded summary and falling back to `ownerId`.
    pub fn owner_ref(&self) -> &str {
        self.owner
            .as_ref()
            .map(|owner| owner.id.as_str())
            .unwrap_or(self.owner_id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_document_shape_with_missing_optionals() {
        let json = r#"{
            "_id": "c-1",
            "ownerId": "u-1",
            "owner": { "_id": "u-1", "name": "Ada", "email": "ada@example.com" },
            "title": "Button",
            "componentPath": "src/components/Button.tsx",
            "createdAt": "2024-05-01T10:00:00Z"
        }"#;

        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(component.id, "c-1");
        assert_eq!(component.owner_ref(), "u-1");
        assert_eq!(component.title.as_deref(), Some("Button"));
        assert_eq!(component.description, None);
        assert_eq!(component.image, None);
        assert!(component.created_at.is_some());
    }

    #[test]
    fn owner_ref_falls_back_to_owner_id() {
        let json = r#"{ "_id": "c-2", "ownerId": "u-9" }"#;
        let component: Component = serde_json::from_str(json).unwrap();
        assert_eq!(component.owner_ref(), "u-9");
    }

    #[test]
    fn serializes_type_and_id_with_document_names() {
        let json = r#"{ "_id": "c-3", "ownerId": "u-1", "type": "input" }"#;
        let component: Component = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&component).unwrap();
        assert_eq!(value["_id"], "c-3");
        assert_eq!(value["type"], "input");
        assert!(value.get("owner").is_none());
    }
}
