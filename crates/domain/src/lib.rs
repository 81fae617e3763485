//! Domain layer for the complaint system backend.
//!
//! This crate contains:
//! - Domain models (Complaint, ComplaintStatus)
//! - Request and response DTOs for the HTTP contract

pub mod models;
