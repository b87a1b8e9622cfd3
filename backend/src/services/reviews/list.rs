use actix_web::{web, HttpResponse};
use common::requests::{IdQuery, ListReviewsResponse};

use crate::config::AppConfig;
use crate::db;
use crate::error::ServiceError;

/// `GET /api/component/get-reviews?id=`, newest first.
pub async fn process(
    query: web::Query<IdQuery>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db::open(&config.database_path)?;
    let reviews = db::reviews::list_reviews(&conn, &query.id)?;
    Ok(HttpResponse::Ok().json(ListReviewsResponse { reviews }))
}
