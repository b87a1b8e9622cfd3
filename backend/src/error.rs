//! Error type shared by all handlers.
//!
//! Every variant maps onto an HTTP status and is rendered as
//! `{ "success": false, "message": ... }`, the same shape the client already
//! reads from review creation.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::Ack;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Not authorized: {0}")]
    Forbidden(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Multipart error: {0}")]
    Multipart(#[from] actix_multipart::MultipartError),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::BadRequest(_) | ServiceError::Multipart(_) => StatusCode::BAD_REQUEST,
            ServiceError::Database(_) | ServiceError::Io(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }
        HttpResponse::build(status).json(Ack {
            success: false,
            message: Some(self.to_string()),
        })
    }
}
