#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/nortefin/monterrey/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod params;
pub mod simulate;

pub use params::{HORIZON_MAX_YEARS, HORIZON_MIN_YEARS, ParamError, SimulationParams};
pub use simulate::{GrowthTrajectory, MONTHS_PER_YEAR, effective_monthly_rate, simulate};

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
