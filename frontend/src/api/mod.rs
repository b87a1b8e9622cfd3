//! HTTP client for the showcase REST endpoints.
//!
//! Every function performs exactly one request and maps the outcome onto
//! `ApiError`. Nothing here touches component state; callers turn results into
//! messages.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use common::api::{
    component_route, component_url, CREATE_REVIEW, CURRENT_USER, DELETE_COMPONENT,
    GET_COMPONENT, GET_COMPONENTS, GET_REVIEWS, UPDATE_COMPONENT, USER_SCOPE,
};
use common::model::component::Component;
use common::model::media::{ComponentUpdateForm, FormPart};
use common::model::review::Review;
use common::model::user::User;
use common::requests::{
    CreateReviewRequest, CreateReviewResponse, CurrentUserResponse, GetComponentResponse,
    ListComponentsResponse, ListReviewsResponse,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("could not build request: {0}")]
    Payload(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Payload(format!("{:?}", err))
}

async fn expect_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    expect_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_component(id: &str) -> Result<Option<Component>, ApiError> {
    let response = Request::get(&component_url(GET_COMPONENT, id)).send().await?;
    let body: GetComponentResponse = decode(response).await?;
    Ok(body.components)
}

pub async fn fetch_components() -> Result<Vec<Component>, ApiError> {
    let response = Request::get(&component_route(GET_COMPONENTS)).send().await?;
    let body: ListComponentsResponse = decode(response).await?;
    Ok(body.components)
}

pub async fn delete_component(id: &str) -> Result<(), ApiError> {
    let response = Request::delete(&component_url(DELETE_COMPONENT, id))
        .send()
        .await?;
    expect_ok(response).await.map(|_| ())
}

/// Sends the form as `multipart/form-data`. The browser sets the boundary, so
/// no content type header is added here.
pub async fn update_component(id: &str, form: &ComponentUpdateForm) -> Result<(), ApiError> {
    let data = form_data(form)?;
    let response = Request::patch(&component_url(UPDATE_COMPONENT, id))
        .body(data)?
        .send()
        .await?;
    expect_ok(response).await.map(|_| ())
}

pub async fn create_review(
    id: &str,
    body: &CreateReviewRequest,
) -> Result<CreateReviewResponse, ApiError> {
    let response = Request::post(&component_url(CREATE_REVIEW, id))
        .json(body)?
        .send()
        .await?;
    decode(response).await
}

pub async fn fetch_reviews(component_id: &str) -> Result<Vec<Review>, ApiError> {
    let response = Request::get(&component_url(GET_REVIEWS, component_id))
        .send()
        .await?;
    let body: ListReviewsResponse = decode(response).await?;
    Ok(body.reviews)
}

pub async fn fetch_current_user() -> Result<Option<User>, ApiError> {
    let response = Request::get(&format!("{}{}", USER_SCOPE, CURRENT_USER))
        .send()
        .await?;
    let body: CurrentUserResponse = decode(response).await?;
    Ok(body.user)
}

fn form_data(form: &ComponentUpdateForm) -> Result<FormData, ApiError> {
    let data = FormData::new().map_err(js_error)?;
    for part in form.parts() {
        match part {
            FormPart::Text { name, value } => data.append_with_str(name, value),
            FormPart::File { name, file } => {
                let blob = gloo_file::File::new_with_options(
                    &file.name,
                    file.bytes.as_slice(),
                    Some(&file.content_type),
                    None,
                );
                let raw: &web_sys::File = blob.as_ref();
                data.append_with_blob_and_filename(name, raw, &file.name)
            }
        }
        .map_err(js_error)?;
    }
    Ok(data)
}
