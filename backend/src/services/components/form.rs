//! Multipart parsing shared by create and update.

use actix_multipart::Multipart;
use common::model::media::{field, MediaFile};
use futures_util::StreamExt;
use std::collections::HashMap;

use crate::config::{MAX_FORM_BYTES, MAX_FORM_PARTS, MAX_MEDIA_BYTES};
use crate::error::ServiceError;

/// Text fields and media files of one multipart body. Fields that were not
/// sent are simply absent.
#[derive(Debug, Default)]
pub struct ComponentForm {
    pub text: HashMap<String, String>,
    pub image: Option<MediaFile>,
    pub video: Option<MediaFile>,
}

impl ComponentForm {
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.text.remove(name)
    }

    /// Like `take_text` but the field must be present and non-blank.
    pub fn require_text(&mut self, name: &str) -> Result<String, ServiceError> {
        self.take_text(name)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ServiceError::BadRequest(format!("{} is required", name)))
    }
}

/// Size limits applied while reading a form.
#[derive(Debug, Clone, Copy)]
pub struct FormLimits {
    pub max_parts: usize,
    pub max_part_bytes: usize,
    pub max_total_bytes: usize,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            max_parts: MAX_FORM_PARTS,
            max_part_bytes: MAX_MEDIA_BYTES,
            max_total_bytes: MAX_FORM_BYTES,
        }
    }
}

pub async fn read_form(payload: Multipart) -> Result<ComponentForm, ServiceError> {
    read_form_with(payload, FormLimits::default()).await
}

pub async fn read_form_with(
    mut payload: Multipart,
    limits: FormLimits,
) -> Result<ComponentForm, ServiceError> {
    let mut form = ComponentForm::default();
    let mut parts = 0;
    let mut total = 0;

    while let Some(item) = payload.next().await {
        let mut part = item?;
        parts += 1;
        if parts > limits.max_parts {
            return Err(ServiceError::BadRequest(format!(
                "form has more than {} parts",
                limits.max_parts
            )));
        }
        let name = part
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()))
            .unwrap_or_default();
        let file_name = part
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()));
        let content_type = part
            .content_type()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = part.next().await {
            let chunk = chunk?;
            if bytes.len() + chunk.len() > limits.max_part_bytes {
                return Err(ServiceError::BadRequest(format!("{} is too large", name)));
            }
            total += chunk.len();
            if total > limits.max_total_bytes {
                return Err(ServiceError::BadRequest("form is too large".to_string()));
            }
            bytes.extend_from_slice(&chunk);
        }

        match name.as_str() {
            field::IMAGE | field::VIDEO => {
                // An empty file input still submits a part; treat it as "no change".
                if bytes.is_empty() {
                    continue;
                }
                let media = MediaFile {
                    name: file_name.unwrap_or_else(|| name.clone()),
                    content_type,
                    bytes,
                };
                if name == field::IMAGE {
                    form.image = Some(media);
                } else {
                    form.video = Some(media);
                }
            }
            "" => {}
            _ => {
                let value = String::from_utf8(bytes)
                    .map_err(|_| ServiceError::BadRequest(format!("{} is not valid UTF-8", name)))?;
                form.text.insert(name, value);
            }
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::error::PayloadError;
    use actix_web::http::header::{self, HeaderMap, HeaderValue};
    use actix_web::web::Bytes;
    use futures_util::stream;

    use crate::services::test_support::{multipart_body, multipart_content_type, Part};

    fn payload(parts: &[Part<'_>]) -> Multipart {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_str(&multipart_content_type()).unwrap(),
        );
        let body = Bytes::from(multipart_body(parts));
        Multipart::new(&headers, stream::once(async move { Ok::<_, PayloadError>(body) }))
    }

    fn limits(max_parts: usize, max_total_bytes: usize) -> FormLimits {
        FormLimits {
            max_parts,
            max_part_bytes: 1024,
            max_total_bytes,
        }
    }

    #[actix_web::test]
    async fn reads_text_and_skips_empty_files() {
        let mut form = read_form(payload(&[
            Part::Text("title", "Button"),
            Part::File {
                name: "image",
                file_name: "empty.png",
                content_type: "application/octet-stream",
                bytes: b"",
            },
        ]))
        .await
        .unwrap();
        assert_eq!(form.take_text("title").as_deref(), Some("Button"));
        assert!(form.image.is_none());
    }

    #[actix_web::test]
    async fn too_many_parts_are_rejected() {
        let fields: Vec<String> = (0..5).map(|i| format!("extra{}", i)).collect();
        let parts: Vec<Part<'_>> = fields.iter().map(|f| Part::Text(f, "x")).collect();
        let err = read_form_with(payload(&parts), limits(4, 1024))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));
    }

    #[actix_web::test]
    async fn total_size_is_capped_across_parts() {
        let chunk = "a".repeat(600);
        let parts = [
            Part::Text("title", chunk.as_str()),
            Part::Text("description", chunk.as_str()),
        ];
        let err = read_form_with(payload(&parts), limits(8, 1000))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::BadRequest(_)));

        let ok = read_form_with(payload(&parts), limits(8, 2000)).await;
        assert!(ok.is_ok());
    }
}
