use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::media::field;
use common::requests::GetComponentResponse;

use super::form::read_form;
use crate::config::AppConfig;
use crate::db;
use crate::db::components::NewComponent;
use crate::error::ServiceError;
use crate::services::identity::require_user;
use crate::services::media::{self, MediaKind};

/// `POST /api/component/create-component` (multipart). Every text field is
/// mandatory; image and video are optional. The caller becomes the owner.
pub async fn process(
    req: HttpRequest,
    payload: Multipart,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ServiceError> {
    let user = {
        let conn = db::open(&config.database_path)?;
        require_user(&req, &conn)?
    };

    let mut form = read_form(payload).await?;
    let mut new = NewComponent {
        owner_id: user.id.clone(),
        component_type: form.require_text(field::TYPE)?,
        live_code: form.require_text(field::LIVE_CODE)?,
        component_path: form.require_text(field::COMPONENT_PATH)?,
        title: form.require_text(field::TITLE)?,
        description: form.require_text(field::DESCRIPTION)?,
        code_snippet: form.require_text(field::CODE_SNIPPET)?,
        component_code: form.require_text(field::COMPONENT_CODE)?,
        components_uses: form.require_text(field::COMPONENTS_USES)?,
        ..Default::default()
    };
    if let Some(image) = &form.image {
        new.image = Some(media::store(&config.media_dir, MediaKind::Image, image)?);
    }
    if let Some(video) = &form.video {
        new.video = Some(media::store(&config.media_dir, MediaKind::Video, video)?);
    }

    let conn = db::open(&config.database_path)?;
    let id = db::components::insert_component(&conn, &new)?;
    log::info!("Component {} created by {}", id, user.id);

    let components = db::components::get_component(&conn, &id)?;
    Ok(HttpResponse::Created().json(GetComponentResponse { components }))
}
