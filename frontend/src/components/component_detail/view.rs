//! View rendering for the component detail page.
//!
//! Layout: an action bar (review button once loaded, owner-only update/delete),
//! the main column with the rendered entry or a loading placeholder, and a side
//! column with the review list. Both dialogs are always mounted and shown
//! through their open flags.

use yew::html::Scope;
use yew::prelude::*;

use common::model::component::Component;

use super::dialogs::review::review_dialog;
use super::dialogs::update::update_dialog;
use super::messages::Msg;
use super::state::{ComponentDetail, UpdateFlow};
use crate::components::components_layout::{ComponentsLayout, ComponentsLayoutProps};
use crate::components::review_list::ReviewList;

pub fn view(component: &ComponentDetail, ctx: &Context<ComponentDetail>) -> Html {
    let link = ctx.link();

    html! {
        <div class="detail-root">
            { build_action_bar(component, link) }
            <div class="detail">
                <div class="detail-main">
                    {
                        match &component.component {
                            Some(entry) => html! { <ComponentsLayout ..layout_props(entry) /> },
                            None => html! {
                                <p class="placeholder">{"Loading... component please wait few seconds"}</p>
                            },
                        }
                    }
                    { update_dialog(component, link) }
                </div>
                <div class="detail-side">
                    { review_dialog(component, link) }
                    {
                        if let Some(entry) = &component.component {
                            html! {
                                <ReviewList
                                    component_id={entry.id.clone()}
                                    user={component.user.clone()}
                                />
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn build_action_bar(component: &ComponentDetail, link: &Scope<ComponentDetail>) -> Html {
    let review_button = if component.component.is_some() {
        html! {
            <button class="btn" onclick={link.callback(|_| Msg::OpenReviewDialog)}>
                {"Write Your Thought"}
            </button>
        }
    } else {
        html! {}
    };

    let owner_buttons = if component.is_owner() {
        let deleting = component.delete_in_flight;
        html! {
            <>
                <button class="btn" onclick={link.callback(|_| Msg::OpenUpdateDialog)}>
                    {"Update"}
                </button>
                <button
                    class="btn danger"
                    disabled={deleting}
                    onclick={link.callback(|_| Msg::Delete)}
                >
                    { if deleting { "Deleting..." } else { "Delete" } }
                </button>
            </>
        }
    } else {
        html! {}
    };

    let refreshing = if matches!(component.update_flow, UpdateFlow::Reloading { .. }) {
        html! { <span class="placeholder">{"Refreshing..."}</span> }
    } else {
        html! {}
    };

    html! {
        <div class="actions">
            { review_button }
            { owner_buttons }
            { refreshing }
        </div>
    }
}

/// Maps a loaded entry onto the layout, substituting display defaults for
/// missing fields.
fn layout_props(entry: &Component) -> ComponentsLayoutProps {
    let or = |value: &Option<String>, fallback: &str| {
        value
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(fallback)
            .to_string()
    };
    let owner = entry.owner.as_ref();

    ComponentsLayoutProps {
        user_id: entry.owner_ref().to_string(),
        owner_name: owner.map(|o| o.name.clone()),
        owner_email: owner.map(|o| o.email.clone()),
        code_snippet: or(&entry.code_snippet, "No code snippet available"),
        component_code: or(&entry.component_code, "No component code provided"),
        component_title: or(&entry.title, "Untitled Component"),
        component_description: or(&entry.description, "No description available"),
        component_path: or(&entry.component_path, "src/components/UntitledComponent.tsx"),
        components_uses: or(&entry.components_uses, "No usage information provided"),
        live_preview_code: entry.live_code.clone().filter(|v| !v.is_empty()),
        preview_image: entry.image.clone(),
        preview_video: entry.video.clone(),
    }
}
