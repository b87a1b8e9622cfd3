//! Read-only presentation of a showcase entry: header, owner, markdown
//! description and usage notes, code bodies, media and a sandboxed live preview.

use pulldown_cmark::{Event, Parser};
use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq, Clone)]
pub struct ComponentsLayoutProps {
    pub user_id: String,
    #[prop_or_default]
    pub owner_name: Option<String>,
    #[prop_or_default]
    pub owner_email: Option<String>,
    pub code_snippet: String,
    pub component_code: String,
    pub component_title: String,
    pub component_description: String,
    pub component_path: String,
    pub components_uses: String,
    #[prop_or_default]
    pub live_preview_code: Option<String>,
    #[prop_or_default]
    pub preview_image: Option<String>,
    #[prop_or_default]
    pub preview_video: Option<String>,
}

pub struct ComponentsLayout;

impl Component for ComponentsLayout {
    type Message = ();
    type Properties = ComponentsLayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ComponentsLayout
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        html! {
            <article class="components-layout">
                <h1>{ props.component_title.clone() }</h1>
                <p class="placeholder">
                    { props.owner_name.clone().unwrap_or_else(|| props.user_id.clone()) }
                    {
                        match &props.owner_email {
                            Some(email) => html! { <>{" · "}{ email.clone() }</> },
                            None => html! {},
                        }
                    }
                </p>
                <div class="markdown">{ Html::from_html_unchecked(render_markdown(&props.component_description)) }</div>
                { build_preview(props) }
                <h3>{"Path"}</h3>
                <code>{ props.component_path.clone() }</code>
                <h3>{"Usage"}</h3>
                <pre>{ props.code_snippet.clone() }</pre>
                <h3>{"Code"}</h3>
                <pre>{ props.component_code.clone() }</pre>
                <h3>{"Notes"}</h3>
                <div class="markdown">{ Html::from_html_unchecked(render_markdown(&props.components_uses)) }</div>
            </article>
        }
    }
}

fn build_preview(props: &ComponentsLayoutProps) -> Html {
    let live = match &props.live_preview_code {
        // Scripts are allowed but the frame gets its own origin.
        Some(code) => html! {
            <iframe
                class="live-preview"
                sandbox="allow-scripts"
                srcdoc={code.clone()}
                style="width:100%;min-height:240px;border:none;background:#fff;border-radius:4px;"
            />
        },
        None => html! {},
    };
    let image = match &props.preview_image {
        Some(src) => html! { <img src={src.clone()} alt={props.component_title.clone()} style="max-width:100%;" /> },
        None => html! {},
    };
    let video = match &props.preview_video {
        Some(src) => html! { <video src={src.clone()} controls=true style="max-width:100%;" /> },
        None => html! {},
    };

    html! {
        <section class="preview">
            { live }
            { image }
            { video }
        </section>
    }
}

/// Renders markdown to HTML. Raw HTML in the source is emitted as text.
pub fn render_markdown(source: &str) -> AttrValue {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut output = String::new();
    pulldown_cmark::html::push_html(&mut output, parser);
    AttrValue::from(output)
}
