pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod file_input;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod mutation;
pub mod notify;
pub mod storage;
pub mod store;
pub mod theme;

#[cfg(test)]
pub mod test_support;
