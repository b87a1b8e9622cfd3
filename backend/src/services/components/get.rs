use actix_web::{web, HttpResponse};
use common::requests::{GetComponentResponse, IdQuery};

use crate::config::AppConfig;
use crate::db;
use crate::error::ServiceError;

/// `GET /api/component/get-component?id=`. An unknown id answers
/// `{ "components": null }` with `200 OK`.
pub async fn process(
    query: web::Query<IdQuery>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db::open(&config.database_path)?;
    let components = db::components::get_component(&conn, &query.id)?;
    Ok(HttpResponse::Ok().json(GetComponentResponse { components }))
}
