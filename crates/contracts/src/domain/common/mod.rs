//! Common types shared by all records

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
