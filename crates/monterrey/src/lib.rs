#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/nortefin/monterrey/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod session;

// Re-export main types from sub-crates
pub use monterrey_data as data;
pub use monterrey_growth as growth;
pub use monterrey_output as output;
pub use monterrey_profile as profile;
pub use monterrey_stats as stats;

pub use session::{AdvisorSession, SessionError};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
