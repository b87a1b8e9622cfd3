use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::media::field;
use common::requests::{Ack, IdQuery};

use super::form::read_form;
use crate::config::AppConfig;
use crate::db;
use crate::db::components::ComponentPatch;
use crate::error::ServiceError;
use crate::services::identity::{require_owner, require_user};
use crate::services::media::{self, MediaKind};

/// `PATCH /api/component/update-component?id=` (multipart).
///
/// Only the fields present in the body change. Media files are stored first
/// and the component is pointed at their new URLs.
pub async fn process(
    req: HttpRequest,
    query: web::Query<IdQuery>,
    payload: Multipart,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ServiceError> {
    {
        let conn = db::open(&config.database_path)?;
        let user = require_user(&req, &conn)?;
        require_owner(&conn, &query.id, &user)?;
    }

    let mut form = read_form(payload).await?;
    let mut patch = ComponentPatch {
        title: form.take_text(field::TITLE),
        description: form.take_text(field::DESCRIPTION),
        component_path: form.take_text(field::COMPONENT_PATH),
        ..Default::default()
    };
    if let Some(image) = &form.image {
        patch.image = Some(media::store(&config.media_dir, MediaKind::Image, image)?);
    }
    if let Some(video) = &form.video {
        patch.video = Some(media::store(&config.media_dir, MediaKind::Video, video)?);
    }

    let conn = db::open(&config.database_path)?;
    if !db::components::update_component(&conn, &query.id, &patch)? {
        return Err(ServiceError::NotFound(format!("component {}", query.id)));
    }
    log::info!("Component {} updated", query.id);

    Ok(HttpResponse::Ok().json(Ack {
        success: true,
        message: None,
    }))
}
