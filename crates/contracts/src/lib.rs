//! Wire types shared by every view of the vendor admin panel.
//!
//! Everything here is plain serde data plus the validating parsers that turn
//! backend payloads into typed records. No browser APIs, so the whole crate
//! is testable natively.

pub mod domain;
pub mod system;
