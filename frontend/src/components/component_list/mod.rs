use yew::platform::spawn_local;
use yew::prelude::*;

use common::api::COMPONENTS_PAGE;
use common::model::component::Component as Entry;

use crate::api::{self, ApiError};

pub enum Msg {
    Fetched(Result<Vec<Entry>, ApiError>),
}

/// Collection listing; each entry links to its detail page.
pub struct ComponentList {
    entries: Option<Vec<Entry>>,
}

impl Component for ComponentList {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Fetched(api::fetch_components().await));
        });
        Self { entries: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Fetched(Ok(entries)) => {
                self.entries = Some(entries);
                true
            }
            Msg::Fetched(Err(err)) => {
                gloo_console::error!(format!("Error fetching components: {}", err));
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.entries {
            None => html! { <p class="placeholder">{"Loading components..."}</p> },
            Some(entries) if entries.is_empty() => {
                html! { <p class="placeholder">{"No components yet."}</p> }
            }
            Some(entries) => html! {
                <ul class="component-list">
                    { for entries.iter().map(|entry| html! {
                        <li>
                            <a href={format!("{}/{}", COMPONENTS_PAGE, entry.id)}>
                                { entry.title.clone().unwrap_or_else(|| "Untitled Component".to_string()) }
                            </a>
                        </li>
                    }) }
                </ul>
            },
        }
    }
}
