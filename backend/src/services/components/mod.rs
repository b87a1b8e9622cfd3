//! # Component Service Module
//!
//! Routes under `/api/component`. Component CRUD lives in the submodules here;
//! the review endpoints share the same prefix and are registered from
//! `services::reviews`.
//!
//! ## Registered Routes
//!
//! *   **`GET /get-component?id=`** - one component or `null`.
//! *   **`GET /get-components`** - every component, newest first.
//! *   **`POST /create-component`** - multipart with all mandatory fields.
//! *   **`PATCH /update-component?id=`** - multipart partial update, owner only.
//! *   **`DELETE /delete-component?id=`** - owner only, removes reviews too.
//! *   **`POST /create-review?id=`** - JSON review, validation reported via `success`.
//! *   **`GET /get-reviews?id=`** - reviews of one component.

mod create;
mod delete;
mod form;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, patch, post, scope};
use actix_web::Scope;
use common::api;

use crate::services::reviews;

pub fn configure_routes() -> Scope {
    scope(api::COMPONENT_SCOPE)
        .route(api::GET_COMPONENT, get().to(get::process))
        .route(api::GET_COMPONENTS, get().to(list::process))
        .route(api::CREATE_COMPONENT, post().to(create::process))
        .route(api::UPDATE_COMPONENT, patch().to(update::process))
        .route(api::DELETE_COMPONENT, delete().to(delete::process))
        .route(api::CREATE_REVIEW, post().to(reviews::create::process))
        .route(api::GET_REVIEWS, get().to(reviews::list::process))
}
