use actix_web::{web, HttpResponse};
use common::requests::ListComponentsResponse;

use crate::config::AppConfig;
use crate::db;
use crate::error::ServiceError;

/// `GET /api/component/get-components`, newest first.
pub async fn process(config: web::Data<AppConfig>) -> Result<HttpResponse, ServiceError> {
    let conn = db::open(&config.database_path)?;
    let components = db::components::list_components(&conn)?;
    Ok(HttpResponse::Ok().json(ListComponentsResponse { components }))
}
