pub mod a001_vendor;
pub mod a002_custom_booking;
