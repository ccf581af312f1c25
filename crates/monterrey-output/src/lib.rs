#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/nortefin/monterrey/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod report;

pub use export::{
    ExportError, ExportFormat, write_trailing_returns_csv, write_trajectory_csv,
};
pub use report::{AdviceReport, ProjectionSummary, ReportError};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
