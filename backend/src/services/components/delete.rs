use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::{Ack, IdQuery};

use crate::config::AppConfig;
use crate::db;
use crate::error::ServiceError;
use crate::services::identity::{require_owner, require_user};

/// `DELETE /api/component/delete-component?id=`. Reviews go with the component.
pub async fn process(
    req: HttpRequest,
    query: web::Query<IdQuery>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ServiceError> {
    let mut conn = db::open(&config.database_path)?;
    let user = require_user(&req, &conn)?;
    require_owner(&conn, &query.id, &user)?;

    if !db::components::delete_component(&mut conn, &query.id)? {
        return Err(ServiceError::NotFound(format!("component {}", query.id)));
    }
    log::info!("Component {} deleted by {}", query.id, user.id);

    Ok(HttpResponse::Ok().json(Ack {
        success: true,
        message: None,
    }))
}
