//! Review list shown next to a component. Fetches its own data on mount and
//! whenever the component id changes; the detail page never pushes reviews in.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::review::Review;
use common::model::user::User;

use crate::api::{self, ApiError};

#[derive(Properties, PartialEq, Clone)]
pub struct ReviewListProps {
    pub component_id: String,
    #[prop_or_default]
    pub user: Option<User>,
}

pub enum Msg {
    Fetch,
    Fetched(Result<Vec<Review>, ApiError>),
}

pub struct ReviewList {
    reviews: Vec<Review>,
    loading: bool,
}

impl Component for ReviewList {
    type Message = Msg;
    type Properties = ReviewListProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Fetch);
        Self {
            reviews: Vec::new(),
            loading: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetch => {
                self.loading = true;
                let link = ctx.link().clone();
                let component_id = ctx.props().component_id.clone();
                spawn_local(async move {
                    link.send_message(Msg::Fetched(api::fetch_reviews(&component_id).await));
                });
                true
            }
            Msg::Fetched(Ok(reviews)) => {
                self.reviews = reviews;
                self.loading = false;
                true
            }
            Msg::Fetched(Err(err)) => {
                gloo_console::error!(format!("Error fetching reviews: {}", err));
                self.loading = false;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().component_id != old_props.component_id {
            ctx.link().send_message(Msg::Fetch);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let viewer = ctx.props().user.as_ref().map(|u| u.id.as_str());

        if self.loading && self.reviews.is_empty() {
            return html! { <p class="placeholder">{"Loading reviews..."}</p> };
        }
        if self.reviews.is_empty() {
            return html! { <p class="placeholder">{"No thoughts yet."}</p> };
        }

        html! {
            <ul class="review-list">
                { for self.reviews.iter().map(|review| review_item(review, viewer)) }
            </ul>
        }
    }
}

fn review_item(review: &Review, viewer: Option<&str>) -> Html {
    let author = review
        .user_name
        .clone()
        .unwrap_or_else(|| "Anonymous".to_string());
    let own = viewer == Some(review.user_id.as_str());

    html! {
        <li class={classes!("review", own.then_some("own"))}>
            <strong>{ author }</strong>
            { if own { " (you)" } else { "" } }
            <span>{ format!(" · {}", stars(review.rating)) }</span>
            <p>{ review.comment.clone() }</p>
        </li>
    }
}

/// Renders a rating as filled and empty stars out of five.
fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
