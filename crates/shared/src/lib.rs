//! Shared utilities for the complaint system backend.
//!
//! This crate provides common functionality used across the other crates:
//! - Request field validation helpers

pub mod validation;
