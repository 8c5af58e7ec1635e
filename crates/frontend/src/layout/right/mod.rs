pub mod profile_drawer;

pub use profile_drawer::ProfileDrawer;
