//! Fixtures for handler tests: a throwaway database and media directory, seed
//! helpers and a hand-built multipart body.

use rusqlite::Connection;
use tempfile::TempDir;

use crate::config::AppConfig;
use crate::db;
use crate::db::components::NewComponent;

pub const BOUNDARY: &str = "showcase-test-boundary";

pub struct TestEnv {
    _dir: TempDir,
    pub config: AppConfig,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_path: dir.path().join("showcase.sqlite"),
            media_dir: dir.path().join("media"),
            open_browser: false,
        };
        Self { _dir: dir, config }
    }

    pub fn conn(&self) -> Connection {
        db::open(&self.config.database_path).expect("open test database")
    }

    pub fn seed_user(&self, id: &str) {
        let name = format!("User {}", id);
        let email = format!("{}@example.com", id);
        db::users::upsert_user(&self.conn(), id, &name, &email).expect("seed user");
    }

    /// Creates a user-owned component and returns its id.
    pub fn seed_component(&self, owner: &str) -> String {
        let new = NewComponent {
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
        };
        db::components::insert_component(&self.conn(), &new).expect("seed component")
    }
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, file_name, content_type
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// Builds the full application around `config` for `actix_web::test`.
macro_rules! test_app {
    ($config:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($config.clone()))
                .service($crate::services::components::configure_routes())
                .service($crate::services::users::configure_routes()),
        )
        .await
    };
}

pub(crate) use test_app;
