//! Database row mappings.

pub mod complaint;

pub use complaint::{ComplaintEntity, ComplaintStatusDb};
