//! Component detail page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, side effects and view rendering.
//!
//! Responsibilities
//! - On creation, request the viewer identity and load the entry named by the route.
//! - Reload whenever the route identifier changes.
//! - Delegate every message to `update::update` and execute the returned commands.

use yew::prelude::*;

mod commands;
mod dialogs;
mod effects;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use commands::Command;
pub use messages::Msg;
pub use props::ComponentDetailProps;
pub use state::ComponentDetail;

impl yew::Component for ComponentDetail {
    type Message = Msg;
    type Properties = ComponentDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = ComponentDetail::new(ctx.props().component_id.clone());
        let mut commands = vec![Command::FetchUser];
        update::update(&mut page, Msg::Load, &mut commands);
        effects::run(commands, ctx.link());
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let mut commands = Vec::new();
        let rerender = update::update(self, msg, &mut commands);
        effects::run(commands, ctx.link());
        rerender
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let mut commands = Vec::new();
        let msg = Msg::RouteChanged(ctx.props().component_id.clone());
        let rerender = update::update(self, msg, &mut commands);
        effects::run(commands, ctx.link());
        rerender
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
