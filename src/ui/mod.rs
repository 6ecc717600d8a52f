pub mod json_view;
pub mod panels;
