pub mod assign_vendor;
pub mod details;
pub mod list;
