//! Persistence layer for the complaint system backend.
//!
//! This crate contains:
//! - Database connection pool management
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
