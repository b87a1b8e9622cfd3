use uuid::Uuid;
use yew::{classes, html, Component, Context, Html, Properties};

/// Overlay container for modal dialogs. Children stay mounted; visibility is
/// driven by the `show` class, toggled from the `open` prop.
pub struct MaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
}

impl Component for MaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div
                class={classes!("top-sheet", props.open.then_some("show"))}
                id={self.id.clone()}
                aria-hidden={(!props.open).to_string()}
            >
                { props.children.clone() }
            </div>
        }
    }
}
