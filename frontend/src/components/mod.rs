pub mod component_detail;
pub mod component_list;
pub mod components_layout;
pub mod review_list;
