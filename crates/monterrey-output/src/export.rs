//! CSV export of trajectories and performance tables.

use monterrey_growth::GrowthTrajectory;
use monterrey_stats::TrailingReturn;
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Pretty-printed JSON format.
    Json,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Serialize)]
struct TrajectoryRow {
    month: usize,
    compounded: f64,
    contributions_only: f64,
}

/// Write a growth trajectory as CSV with one row per month.
pub fn write_trajectory_csv<W: Write>(
    trajectory: &GrowthTrajectory,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (month, compounded, contributions_only) in trajectory.rows() {
        csv_writer.serialize(TrajectoryRow {
            month,
            compounded,
            contributions_only,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct TrailingReturnRow<'a> {
    symbol: &'a str,
    period: &'static str,
    return_pct: Option<f64>,
}

/// Write per-instrument trailing returns as CSV.
///
/// Windows without enough history serialize as an empty field.
pub fn write_trailing_returns_csv<W: Write>(
    returns_by_symbol: &[(String, Vec<TrailingReturn>)],
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (symbol, returns) in returns_by_symbol {
        for trailing in returns {
            csv_writer.serialize(TrailingReturnRow {
                symbol,
                period: trailing.label,
                return_pct: trailing.return_pct,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}
