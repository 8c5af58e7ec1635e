pub mod forgot_password;
pub mod sign_in_required;
