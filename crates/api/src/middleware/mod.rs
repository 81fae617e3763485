//! HTTP middleware components.

pub mod logging;
pub mod metrics;
pub mod request_id;

pub use metrics::{metrics_handler, track_metrics};
#[allow(unused_imports)] // Re-exports for downstream use
pub use metrics::init_metrics;
pub use request_id::request_id;
#[allow(unused_imports)] // Re-exports for downstream use
pub use request_id::{RequestId, REQUEST_ID_HEADER};
