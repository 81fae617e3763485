//! Repository implementations.

pub mod complaint;

pub use complaint::ComplaintRepository;
