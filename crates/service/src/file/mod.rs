//! File-backed helpers for the service layer.

pub mod attachments;
