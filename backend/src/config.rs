//! Server configuration read from the environment.
//!
//! | Variable                | Default            |
//! |-------------------------|--------------------|
//! | `SHOWCASE_HOST`         | `127.0.0.1`        |
//! | `SHOWCASE_PORT`         | `8080`             |
//! | `SHOWCASE_DATABASE`     | `showcase.sqlite`  |
//! | `SHOWCASE_MEDIA_DIR`    | `media`            |
//! | `SHOWCASE_OPEN_BROWSER` | `true`             |

use std::env;
use std::path::PathBuf;

/// Upper bound for a single uploaded media file.
pub const MAX_MEDIA_BYTES: usize = 50 * 1024 * 1024;

/// Upper bound for the number of parts in one multipart form.
pub const MAX_FORM_PARTS: usize = 32;

/// Upper bound for a whole multipart form: both media files plus text fields.
pub const MAX_FORM_BYTES: usize = 2 * MAX_MEDIA_BYTES + 4 * 1024 * 1024;

/// Upper bound for JSON request bodies.
pub const JSON_LIMIT: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub media_dir: PathBuf,
    pub open_browser: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("SHOWCASE_PORT").map(|v| v.parse::<u16>()) {
            Some(Ok(port)) => port,
            Some(Err(e)) => {
                log::warn!("Ignoring invalid SHOWCASE_PORT ({}), using 8080", e);
                8080
            }
            None => 8080,
        };
        let open_browser = lookup("SHOWCASE_OPEN_BROWSER")
            .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        Self {
            host: lookup("SHOWCASE_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            database_path: lookup("SHOWCASE_DATABASE")
                .unwrap_or_else(|| "showcase.sqlite".to_string())
                .into(),
            media_dir: lookup("SHOWCASE_MEDIA_DIR")
                .unwrap_or_else(|| "media".to_string())
                .into(),
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
