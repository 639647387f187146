//! Report session state
//!
//! Owns the dataset and lifecycle flags of one embedded report instance.

mod report_session;
mod update_coalescer;

pub use report_session::{ReportSession, SessionOptions};
pub use update_coalescer::{UpdateCoalescer, DEFAULT_COALESCE_WINDOW};
