use serde::{Deserialize, Serialize};

/// Sector index snapshot: the index name and its session percentage change.
///
/// Produced by the sector fetcher, already filtered to true sector indices
/// and sorted descending by `percent_change`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorRecord {
    pub index: String,
    pub percent_change: f64,
}

impl SectorRecord {
    pub fn new(index: impl Into<String>, percent_change: f64) -> Self {
        Self {
            index: index.into(),
            percent_change,
        }
    }
}

/// Derivative stock snapshot: open-interest change and traded volume.
///
/// At most two are retained per sector query, the pair that dominates the
/// `(oi_change_percent, total_traded_volume)` descending ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockOiRecord {
    pub symbol: String,
    pub oi_change_percent: f64,
    pub total_traded_volume: u64,
}

impl StockOiRecord {
    pub fn new(
        symbol: impl Into<String>,
        oi_change_percent: f64,
        total_traded_volume: u64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            oi_change_percent,
            total_traded_volume,
        }
    }
}
