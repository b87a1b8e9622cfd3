mod config;
mod db;
mod error;
mod services;

use crate::config::{AppConfig, JSON_LIMIT};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use common::api::MEDIA_PREFIX;
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded frontend bundle. Unknown paths fall back to
/// `index.html` so client-side routes like `/components/{id}` load the app.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::from_env();
    let url = config.url();

    // Fail early on an unusable database instead of on the first request.
    db::open(&config.database_path).map_err(std::io::Error::other)?;
    std::fs::create_dir_all(&config.media_dir)?;

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Server running at {}", url);

    let bind = (config.host.clone(), config.port);
    let media_dir = config.media_dir.clone();
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(JSON_LIMIT))
            .app_data(config.clone())
            .service(services::components::configure_routes())
            .service(services::users::configure_routes())
            .service(actix_files::Files::new(MEDIA_PREFIX, media_dir.clone()))
            .default_service(web::route().to(serve_embedded))
    })
        .bind(bind)?
        .run()
        .await
}
