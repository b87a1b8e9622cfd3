//! Endpoint paths shared by the client and the server routing table.

pub const COMPONENT_SCOPE: &str = "/api/component";
pub const USER_SCOPE: &str = "/api/user";
pub const MEDIA_PREFIX: &str = "/media";

pub const GET_COMPONENT: &str = "/get-component";
pub const GET_COMPONENTS: &str = "/get-components";
pub const CREATE_COMPONENT: &str = "/create-component";
pub const UPDATE_COMPONENT: &str = "/update-component";
pub const DELETE_COMPONENT: &str = "/delete-component";
pub const CREATE_REVIEW: &str = "/create-review";
pub const GET_REVIEWS: &str = "/get-reviews";
pub const CURRENT_USER: &str = "/me";

/// Client-side path of the collection listing.
pub const COMPONENTS_PAGE: &str = "/components";

/// Builds `/api/component{route}?id={id}`.
pub fn component_url(route: &str, id: &str) -> String {
    format!("{}{}?id={}", COMPONENT_SCOPE, route, id)
}

/// Builds `/api/component{route}` for routes without a key.
pub fn component_route(route: &str) -> String {
    format!("{}{}", COMPONENT_SCOPE, route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_urls_use_id_query() {
        assert_eq!(
            component_url(DELETE_COMPONENT, "abc"),
            "/api/component/delete-component?id=abc"
        );
        assert_eq!(component_route(GET_COMPONENTS), "/api/component/get-components");
    }
}
