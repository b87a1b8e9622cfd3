//! Media attachments and the multipart form used to send them.
//!
//! The client reads a chosen file into memory once (`MediaFile`) and later turns
//! a `ComponentUpdateForm` into an ordered list of `FormPart`s, which the browser
//! transport maps onto `FormData`. The server parses the same field names back.

use serde::{Deserialize, Serialize};

/// Multipart field names shared by client and server.
pub mod field {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const COMPONENT_PATH: &str = "componentPath";
    pub const IMAGE: &str = "image";
    pub const VIDEO: &str = "video";
    pub const TYPE: &str = "type";
    pub const LIVE_CODE: &str = "liveCode";
    pub const CODE_SNIPPET: &str = "codeSnippet";
    pub const COMPONENT_CODE: &str = "componentCode";
    pub const COMPONENTS_USES: &str = "componentsUses";
}

/// A file chosen by the user, fully read into memory.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// One part of a multipart body.
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart<'a> {
    Text { name: &'static str, value: &'a str },
    File { name: &'static str, file: &'a MediaFile },
}

impl FormPart<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Partial update of a component as submitted from the update dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentUpdateForm {
    pub title: String,
    pub description: String,
    pub component_path: String,
    pub image: Option<MediaFile>,
    pub video: Option<MediaFile>,
}

impl ComponentUpdateForm {
    /// Text fields are always present; files only when one was chosen. The server
    /// treats an absent field as "no change".
    pub fn parts(&self) -> Vec<FormPart<'_>> {
        let mut parts = vec![
            FormPart::Text { name: field::TITLE, value: &self.title },
            FormPart::Text { name: field::DESCRIPTION, value: &self.description },
            FormPart::Text { name: field::COMPONENT_PATH, value: &self.component_path },
        ];
        if let Some(image) = &self.image {
            parts.push(FormPart::File { name: field::IMAGE, file: image });
        }
        if let Some(video) = &self.video {
            parts.push(FormPart::File { name: field::VIDEO, file: video });
        }
        parts
    }
}
