use yew::prelude::*;

/// Properties for `ComponentDetail`.
#[derive(Properties, PartialEq, Clone)]
pub struct ComponentDetailProps {
    /// Route identifier of the entry to show. A change triggers a fresh load.
    pub component_id: String,
}
