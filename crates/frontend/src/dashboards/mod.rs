pub mod d100_vendor_overview;

pub use d100_vendor_overview::ui::VendorOverviewDashboard;
