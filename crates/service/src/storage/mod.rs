//! In-memory storage for the service layer
//!
//! `pet_store` owns the catalog records; `filter` parses the comma-separated
//! query values used by the status and tag scans.

pub mod filter;
pub mod pet_store;
