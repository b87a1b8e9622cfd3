use serde::{Deserialize, Serialize};

use crate::model::component::Component;
use crate::model::review::Review;
use crate::model::user::User;

/// `?id=` query parameter used by every component endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdQuery {
    pub id: String,
}

/// Response of `GET get-component`. The field name is plural for historical
/// reasons; it holds a single component or `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetComponentResponse {
    #[serde(default)]
    pub components: Option<Component>,
}

/// Response of `GET get-components`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListComponentsResponse {
    #[serde(default)]
    pub components: Vec<Component>,
}

/// Body of `POST create-review`.
///
/// `rating` is `None` when the typed text did not start with a number; it is
/// serialized as `null` and left for the server to reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub comment: String,
    pub rating: Option<i64>,
}

/// Response of `POST create-review`. Validation failures are reported through
/// `success: false`, not through the HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<Review>,
}

/// Response of `GET get-reviews`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListReviewsResponse {
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Response of `GET /api/user/me`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    #[serde(default)]
    pub user: Option<User>,
}

/// Generic acknowledgement returned by mutating endpoints and by errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_rating_is_sent_as_null() {
        let body = CreateReviewRequest {
            comment: "neat".to_string(),
            rating: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"comment":"neat","rating":null}"#
        );
    }

    #[test]
    fn null_component_reads_as_none() {
        let response: GetComponentResponse =
            serde_json::from_str(r#"{ "components": null }"#).unwrap();
        assert!(response.components.is_none());
    }
}
