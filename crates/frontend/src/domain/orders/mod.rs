pub mod api;
pub mod labels;
pub mod ui;
