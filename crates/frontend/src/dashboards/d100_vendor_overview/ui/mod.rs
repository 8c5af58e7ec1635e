mod dashboard;
mod pie;

pub use dashboard::VendorOverviewDashboard;
pub use pie::{pie_gradient, ActiveInactivePie};
