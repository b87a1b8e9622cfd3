//! Review endpoints. Registered under the component scope by
//! `services::components::configure_routes`.

pub(crate) mod create;
pub(crate) mod list;

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::test;
    use common::api;
    use common::requests::{CreateReviewRequest, CreateReviewResponse, ListReviewsResponse};

    use crate::services::identity::SESSION_COOKIE;
    use crate::services::test_support::{test_app, TestEnv};

    fn review(comment: &str, rating: Option<i64>) -> CreateReviewRequest {
        CreateReviewRequest {
            comment: comment.to_string(),
            rating,
        }
    }

    #[actix_web::test]
    async fn accepted_review_is_listed() {
        let env = TestEnv::new();
        env.seed_user("u-1");
        env.seed_user("u-2");
        let id = env.seed_component("u-1");
        let app = test_app!(env.config);

        let req = test::TestRequest::post()
            .uri(&api::component_url(api::CREATE_REVIEW, &id))
            .cookie(Cookie::new(SESSION_COOKIE, "u-2"))
            .set_json(review("  Solid component  ", Some(4)))
            .to_request();
        let resp: CreateReviewResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        let created = resp.review.expect("review");
        assert_eq!(created.comment, "Solid component");
        assert_eq!(created.rating, 4);

        let req = test::TestRequest::get()
            .uri(&api::component_url(api::GET_REVIEWS, &id))
            .to_request();
        let listed: ListReviewsResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.reviews.len(), 1);
        assert_eq!(listed.reviews[0].user_name.as_deref(), Some("User u-2"));
    }

    #[actix_web::test]
    async fn invalid_reviews_report_failure_in_body() {
        let env = TestEnv::new();
        env.seed_user("u-1");
        let id = env.seed_component("u-1");
        let app = test_app!(env.config);

        let cases = [
            (Some("u-1"), id.as_str(), review("Fine", None)),
            (Some("u-1"), id.as_str(), review("Fine", Some(0))),
            (Some("u-1"), id.as_str(), review("Fine", Some(6))),
            (Some("u-1"), id.as_str(), review("   ", Some(3))),
            (Some("u-1"), "missing", review("Fine", Some(3))),
            (None, id.as_str(), review("Fine", Some(3))),
        ];
        for (user, target, body) in cases {
            let mut req = test::TestRequest::post()
                .uri(&api::component_url(api::CREATE_REVIEW, target))
                .set_json(body);
            if let Some(user) = user {
                req = req.cookie(Cookie::new(SESSION_COOKIE, user));
            }
            let resp = test::call_service(&app, req.to_request()).await;
            assert!(resp.status().is_success());
            let body: CreateReviewResponse = test::read_body_json(resp).await;
            assert!(!body.success);
            assert!(body.message.is_some());
            assert!(body.review.is_none());
        }

        let reviews = crate::db::reviews::list_reviews(&env.conn(), &id).unwrap();
        assert!(reviews.is_empty());
    }
}
