//! Routes under `/api/user`: the current viewer and a development session
//! endpoint that stands in for real sign-in.

use actix_web::cookie::Cookie;
use actix_web::web::{delete, get, post, resource, scope};
use actix_web::{web, HttpRequest, HttpResponse, Scope};
use common::api;
use common::requests::CurrentUserResponse;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::db;
use crate::error::ServiceError;
use crate::services::identity::{current_user, SESSION_COOKIE};

const SESSION: &str = "/session";

pub fn configure_routes() -> Scope {
    scope(api::USER_SCOPE)
        .route(api::CURRENT_USER, get().to(me))
        .service(
            resource(SESSION)
                .route(post().to(start_session))
                .route(delete().to(end_session)),
        )
}

/// `GET /api/user/me`: `{ "user": User | null }`.
async fn me(req: HttpRequest, config: web::Data<AppConfig>) -> Result<HttpResponse, ServiceError> {
    let conn = db::open(&config.database_path)?;
    let user = current_user(&req, &conn)?;
    Ok(HttpResponse::Ok().json(CurrentUserResponse { user }))
}

#[derive(Deserialize)]
struct SessionRequest {
    name: String,
    email: String,
}

/// `POST /api/user/session`: registers a user and sets the identity cookie.
async fn start_session(
    body: web::Json<SessionRequest>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ServiceError> {
    let name = body.name.trim();
    let email = body.email.trim();
    if name.is_empty() || !email.contains('@') {
        return Err(ServiceError::BadRequest("name and a valid email are required".to_string()));
    }

    let conn = db::open(&config.database_path)?;
    let id = uuid::Uuid::new_v4().to_string();
    db::users::upsert_user(&conn, &id, name, email)?;
    let user = db::users::get_user(&conn, &id)?;
    log::info!("Session started for {}", id);

    Ok(HttpResponse::Ok()
        .cookie(Cookie::build(SESSION_COOKIE, id).path("/").http_only(true).finish())
        .json(CurrentUserResponse { user }))
}

/// `DELETE /api/user/session`: clears the identity cookie.
async fn end_session() -> HttpResponse {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    HttpResponse::Ok().cookie(cookie).json(CurrentUserResponse { user: None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::json;

    use crate::services::test_support::{test_app, TestEnv};

    fn me_uri() -> String {
        format!("{}{}", api::USER_SCOPE, api::CURRENT_USER)
    }

    #[actix_web::test]
    async fn me_resolves_cookie_user() {
        let env = TestEnv::new();
        env.seed_user("u-1");
        let app = test_app!(env.config);

        let req = test::TestRequest::get().uri(&me_uri()).to_request();
        let anonymous: CurrentUserResponse = test::call_and_read_body_json(&app, req).await;
        assert!(anonymous.user.is_none());

        let req = test::TestRequest::get()
            .uri(&me_uri())
            .cookie(Cookie::new(SESSION_COOKIE, "u-1"))
            .to_request();
        let known: CurrentUserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(known.user.map(|u| u.id).as_deref(), Some("u-1"));

        let req = test::TestRequest::get()
            .uri(&me_uri())
            .cookie(Cookie::new(SESSION_COOKIE, "ghost"))
            .to_request();
        let unknown: CurrentUserResponse = test::call_and_read_body_json(&app, req).await;
        assert!(unknown.user.is_none());
    }

    #[actix_web::test]
    async fn session_sets_identity_cookie() {
        let env = TestEnv::new();
        let app = test_app!(env.config);

        let req = test::TestRequest::post()
            .uri(&format!("{}{}", api::USER_SCOPE, SESSION))
            .set_json(json!({ "name": "Ada", "email": "ada@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .expect("identity cookie");
        let id = cookie.value().to_string();

        let body: CurrentUserResponse = test::read_body_json(resp).await;
        let user = body.user.expect("registered user");
        assert_eq!(user.id, id);
        assert_eq!(user.name, "Ada");
    }

    #[actix_web::test]
    async fn session_rejects_missing_email() {
        let env = TestEnv::new();
        let app = test_app!(env.config);

        let req = test::TestRequest::post()
            .uri(&format!("{}{}", api::USER_SCOPE, SESSION))
            .set_json(json!({ "name": "Ada", "email": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
