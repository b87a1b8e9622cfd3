use crate::components::component_detail::ComponentDetail;
use crate::components::component_list::ComponentList;
use common::api::COMPONENTS_PAGE;
use yew::{html, Component, Context, Html};

/// Page selected from the browser location.
#[derive(Debug, PartialEq)]
pub enum Route {
    List,
    Detail(String),
}

impl Route {
    /// `/components/{id}` opens the detail page; anything else shows the list.
    pub fn from_path(path: &str) -> Self {
        let rest = path
            .strip_prefix(COMPONENTS_PAGE)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(|rest| rest.trim_end_matches('/'));
        match rest {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Detail(id.to_string()),
            _ => Route::List,
        }
    }
}

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self {
            route: Route::from_path(&path),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                {
                    match &self.route {
                        Route::Detail(id) => html! { <ComponentDetail component_id={id.clone()} /> },
                        Route::List => html! { <ComponentList /> },
                    }
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn detail_route_carries_identifier() {
        assert_eq!(Route::from_path("/components/abc-123"), Route::Detail("abc-123".to_string()));
        assert_eq!(Route::from_path("/components/abc-123/"), Route::Detail("abc-123".to_string()));
    }

    #[test]
    fn other_paths_show_listing() {
        assert_eq!(Route::from_path("/components"), Route::List);
        assert_eq!(Route::from_path("/"), Route::List);
        assert_eq!(Route::from_path("/components/a/b"), Route::List);
    }
}
