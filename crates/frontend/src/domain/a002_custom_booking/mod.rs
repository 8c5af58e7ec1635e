pub mod api;
pub mod context;
pub mod store;
pub mod ui;
