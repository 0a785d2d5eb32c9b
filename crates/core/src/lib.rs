//! Domain model for the customs brokerage operations portal.
//!
//! The centre of the crate is the job workflow status model: a closed set of
//! lifecycle statuses, their display labels, and their position on the
//! 11-step progress timeline. The remaining modules cover the job record
//! contract consumed from the job data source.

pub mod document;
pub mod error;
pub mod job;
pub mod job_status;
pub mod status_field;
pub mod timeline;
pub mod types;
pub mod wire;
