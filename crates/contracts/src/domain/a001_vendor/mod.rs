pub mod aggregate;

pub use aggregate::{
    parse_master_admin_vendors, parse_vendor, parse_vendor_list, Vendor, VendorDocument,
    VendorField, VendorForm, VendorId, VendorStats, VendorStatus,
};
