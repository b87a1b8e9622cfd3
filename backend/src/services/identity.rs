//! Resolves the requesting user from the `uid` cookie.
//!
//! This is an identity stand-in for a real authentication layer: whoever
//! presents a known id is treated as that user. Ownership checks built on top
//! of it are still enforced on every mutation.

use actix_web::HttpRequest;
use common::model::user::User;
use rusqlite::Connection;

use crate::db;
use crate::error::ServiceError;

pub const SESSION_COOKIE: &str = "uid";

/// The current user, if the cookie names an existing one.
pub fn current_user(req: &HttpRequest, conn: &Connection) -> Result<Option<User>, ServiceError> {
    match req.cookie(SESSION_COOKIE) {
        Some(cookie) if !cookie.value().is_empty() => Ok(db::users::get_user(conn, cookie.value())?),
        _ => Ok(None),
    }
}

pub fn require_user(req: &HttpRequest, conn: &Connection) -> Result<User, ServiceError> {
    current_user(req, conn)?.ok_or(ServiceError::Unauthenticated)
}

/// Fails unless `user` owns component `id`. Missing components are reported
/// as not found before ownership is considered.
pub fn require_owner(conn: &Connection, id: &str, user: &User) -> Result<(), ServiceError> {
    match db::components::owner_of(conn, id)? {
        None => Err(ServiceError::NotFound(format!("component {}", id))),
        Some(owner) if owner == user.id => Ok(()),
        Some(_) => Err(ServiceError::Forbidden(format!(
            "user {} does not own component {}",
            user.id, id
        ))),
    }
}
