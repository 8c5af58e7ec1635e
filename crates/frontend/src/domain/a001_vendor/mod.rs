pub mod api;
pub mod context;
pub mod mirror;
pub mod store;
pub mod ui;
