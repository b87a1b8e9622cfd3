//! Local media storage. Files are content-addressed: the name is the MD5 of the
//! bytes, so re-uploading the same file reuses the stored copy.

use common::api::MEDIA_PREFIX;
use common::model::media::MediaFile;
use std::fs;
use std::path::Path;

use crate::error::ServiceError;

/// Which kind of media a multipart field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    fn mime_prefix(self) -> &'static str {
        match self {
            MediaKind::Image => "image/",
            MediaKind::Video => "video/",
        }
    }
}

/// Writes `file` into `media_dir` and returns its public URL.
pub fn store(media_dir: &Path, kind: MediaKind, file: &MediaFile) -> Result<String, ServiceError> {
    if !file.content_type.starts_with(kind.mime_prefix()) {
        return Err(ServiceError::BadRequest(format!(
            "{} is {}, expected {}*",
            file.name,
            file.content_type,
            kind.mime_prefix()
        )));
    }

    let extension = Path::new(&file.name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .or_else(|| {
            mime_guess::get_mime_extensions_str(&file.content_type)
                .and_then(|exts| exts.first())
                .map(|e| e.to_string())
        })
        .unwrap_or_else(|| "bin".to_string());

    let file_name = format!("{:x}.{}", md5::compute(&file.bytes), extension);
    fs::create_dir_all(media_dir)?;
    let path = media_dir.join(&file_name);
    if !path.exists() {
        fs::write(&path, &file.bytes)?;
        log::info!("Stored media {} ({} bytes)", file_name, file.bytes.len());
    }

    Ok(format!("{}/{}", MEDIA_PREFIX, file_name))
}
