//! `POST /api/component/create-review?id=`.
//!
//! Rejections the user can fix (no identity, unknown component, bad rating,
//! empty comment) answer `200` with `success: false`. Only storage failures
//! surface as HTTP errors.

use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::{CreateReviewRequest, CreateReviewResponse, IdQuery};
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::db;
use crate::error::ServiceError;
use crate::services::identity::current_user;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

pub async fn process(
    req: HttpRequest,
    query: web::Query<IdQuery>,
    body: web::Json<CreateReviewRequest>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ServiceError> {
    let conn = db::open(&config.database_path)?;
    let response = create_review(&req, &conn, &query.id, &body)?;
    Ok(HttpResponse::Ok().json(response))
}

fn create_review(
    req: &HttpRequest,
    conn: &Connection,
    component_id: &str,
    body: &CreateReviewRequest,
) -> Result<CreateReviewResponse, ServiceError> {
    let Some(user) = current_user(req, conn)? else {
        return Ok(rejected("Sign in to write a review"));
    };
    if db::components::owner_of(conn, component_id)?.is_none() {
        return Ok(rejected("Component not found"));
    }
    let rating = match body.rating {
        Some(rating) if (MIN_RATING..=MAX_RATING).contains(&rating) => rating,
        _ => {
            return Ok(rejected(&format!(
                "Rating must be a whole number from {} to {}",
                MIN_RATING, MAX_RATING
            )))
        }
    };
    let comment = body.comment.trim();
    if comment.is_empty() {
        return Ok(rejected("Comment must not be empty"));
    }

    let review = db::reviews::insert_review(conn, component_id, &user.id, comment, rating)?;
    log::info!("Review {} added to component {}", review.id, component_id);

    Ok(CreateReviewResponse {
        success: true,
        message: None,
        review: Some(review),
    })
}

fn rejected(message: &str) -> CreateReviewResponse {
    log::warn!("Review rejected: {}", message);
    CreateReviewResponse {
        success: false,
        message: Some(message.to_string()),
        review: None,
    }
}
