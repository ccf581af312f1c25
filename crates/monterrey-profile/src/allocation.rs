//! Model portfolios per risk category and user-adjusted allocations.
//!
//! Each category maps to a fixed three-ETF model with default percentage
//! weights. Clients may override the weights instrument by instrument; an
//! allocation is only valid when the integer percentages sum to exactly 100.

use crate::category::RiskCategory;
use crate::error::{ProfileError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Required total of allocation weights, in percent.
pub const TOTAL_WEIGHT_PCT: u32 = 100;

/// One instrument of a model portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instrument {
    /// Ticker symbol.
    pub symbol: &'static str,
    /// Human-readable fund name.
    pub name: &'static str,
    /// Default weight in percent.
    pub default_weight_pct: u8,
}

/// Static model portfolio for one risk category.
#[derive(Debug, Clone, Copy)]
pub struct AllocationModel {
    /// Category this model is recommended for.
    pub category: RiskCategory,
    /// Instruments in recommendation order.
    pub instruments: &'static [Instrument],
    /// Why these instruments fit the category.
    pub rationale: &'static str,
}

static HIGH_MODEL: AllocationModel = AllocationModel {
    category: RiskCategory::High,
    instruments: &[
        Instrument {
            symbol: "QQQ",
            name: "Invesco QQQ Trust (Nasdaq-100 technology)",
            default_weight_pct: 50,
        },
        Instrument {
            symbol: "SPY",
            name: "SPDR S&P 500 ETF Trust (S&P 500 equities)",
            default_weight_pct: 30,
        },
        Instrument {
            symbol: "EEM",
            name: "iShares MSCI Emerging Markets ETF (emerging markets)",
            default_weight_pct: 20,
        },
    ],
    rationale: "Sectors with high growth potential: technology, the S&P 500 and \
                emerging markets. These instruments tend to be more volatile but \
                offer higher long-run returns.",
};

static MEDIUM_MODEL: AllocationModel = AllocationModel {
    category: RiskCategory::Medium,
    instruments: &[
        Instrument {
            symbol: "VTI",
            name: "Vanguard Total Stock Market ETF (total US market)",
            default_weight_pct: 40,
        },
        Instrument {
            symbol: "LQD",
            name: "iShares iBoxx $ Investment Grade Corporate Bond ETF (corporate bonds)",
            default_weight_pct: 40,
        },
        Instrument {
            symbol: "GLD",
            name: "SPDR Gold Shares (gold)",
            default_weight_pct: 20,
        },
    ],
    rationale: "Diversifies across broad-market equity, investment-grade corporate \
                bonds and gold, balancing risk against return.",
};

static CONSERVATIVE_MODEL: AllocationModel = AllocationModel {
    category: RiskCategory::Conservative,
    instruments: &[
        Instrument {
            symbol: "BND",
            name: "Vanguard Total Bond Market ETF (US bonds)",
            default_weight_pct: 20,
        },
        Instrument {
            symbol: "BNDX",
            name: "Vanguard Total International Bond ETF (international bonds)",
            default_weight_pct: 60,
        },
        Instrument {
            symbol: "VDC",
            name: "Vanguard Consumer Staples ETF (consumer staples)",
            default_weight_pct: 20,
        },
    ],
    rationale: "Prioritizes stability and capital protection through US bonds, \
                international bonds and defensive sectors.",
};

impl AllocationModel {
    /// The model portfolio recommended for a category.
    pub fn for_category(category: RiskCategory) -> &'static Self {
        match category {
            RiskCategory::High => &HIGH_MODEL,
            RiskCategory::Medium => &MEDIUM_MODEL,
            RiskCategory::Conservative => &CONSERVATIVE_MODEL,
        }
    }

    /// Instrument symbols in recommendation order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.instruments.iter().map(|i| i.symbol)
    }

    /// The model's default weights as a ready-to-use allocation.
    pub fn default_allocation(&self) -> Allocation {
        Allocation {
            entries: self
                .instruments
                .iter()
                .map(|i| AllocationEntry {
                    symbol: i.symbol.to_string(),
                    weight_pct: i.default_weight_pct,
                })
                .collect(),
        }
    }
}

/// One instrument's adjusted weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Ticker symbol.
    pub symbol: String,
    /// Weight in percent (0-100).
    pub weight_pct: u8,
}

/// A validated weight-per-instrument mapping summing to exactly 100%.
///
/// Entries keep the model's recommendation order, so the allocation also
/// fixes the instrument ordering used by downstream statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    entries: Vec<AllocationEntry>,
}

impl Allocation {
    /// Apply user weight overrides to a model portfolio.
    ///
    /// Every model instrument must receive a weight, no other symbols are
    /// accepted, and the weights must sum to exactly 100. The sum check is
    /// strict integer equality: the advisory adjusts weights in whole
    /// percentage steps, so no rounding tolerance applies.
    pub fn from_overrides(model: &AllocationModel, weights: &HashMap<String, u8>) -> Result<Self> {
        let mut entries = Vec::with_capacity(model.instruments.len());
        for instrument in model.instruments {
            let weight_pct = weights.get(instrument.symbol).copied().ok_or_else(|| {
                ProfileError::MissingInstrument {
                    symbol: instrument.symbol.to_string(),
                }
            })?;
            entries.push(AllocationEntry {
                symbol: instrument.symbol.to_string(),
                weight_pct,
            });
        }

        if let Some(extraneous) = weights
            .keys()
            .find(|symbol| !model.symbols().any(|s| s == symbol.as_str()))
        {
            return Err(ProfileError::UnknownInstrument {
                symbol: extraneous.clone(),
            });
        }

        let sum: u32 = entries.iter().map(|e| u32::from(e.weight_pct)).sum();
        if sum != TOTAL_WEIGHT_PCT {
            return Err(ProfileError::AllocationSum { sum });
        }

        Ok(Self { entries })
    }

    /// Entries in recommendation order.
    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    /// The weight recorded for a symbol, if any.
    pub fn weight(&self, symbol: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.symbol == symbol)
            .map(|e| e.weight_pct)
    }

    /// Symbols in recommendation order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.symbol.as_str())
    }

    /// Weights as fractions in entry order (percentage / 100).
    pub fn fractions(&self) -> Vec<f64> {
        self.entries
            .iter()
            .map(|e| f64::from(e.weight_pct) / 100.0)
            .collect()
    }

    /// Number of instruments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the allocation holds no instruments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
