pub mod add_manually;
pub mod details;
pub mod list;
pub mod onboarding;
