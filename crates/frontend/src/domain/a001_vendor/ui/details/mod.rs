//! Vendor add/edit form.
//!
//! - view_model.rs: form state, pending uploads and the save command
//! - view.rs: the form fields and the modal content

mod view;
mod view_model;

pub use view::{VendorDetails, VendorFormFields};
pub use view_model::VendorDetailsViewModel;
