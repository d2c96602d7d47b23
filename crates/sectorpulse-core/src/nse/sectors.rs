use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::SectorRecord;
use crate::error::FetchError;
use crate::http_client::{HttpClient, HttpRequest};

/// All-indices endpoint; the warm-up against the site root must come first
/// so the session carries the anti-bot cookies.
pub const SECTOR_INDICES_URL: &str =
    "https://www.nseindia.com/api/equity-stockIndices?index=SECURITIES%20IN%20F%26O";

const WARMUP_URL: &str = "https://www.nseindia.com";
const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Broad-market index markers that disqualify an entry as a true sector.
const EXCLUDED_INDEX_MARKERS: [&str; 3] = ["50", "MIDCAP", "SMLCAP"];

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Deserialize)]
struct SectorIndicesPayload {
    data: Vec<SectorIndexEntry>,
}

#[derive(Debug, Deserialize)]
struct SectorIndexEntry {
    index: String,
    #[serde(rename = "pChange")]
    p_change: f64,
}

/// Fetches sector indices and ranks them by session percentage change.
pub struct SectorIndicesClient {
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl SectorIndicesClient {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Fetch every sector index with its percentage change, sorted
    /// descending by change.
    ///
    /// The warm-up response status is not checked; only the cookies it sets
    /// matter. A transport failure during warm-up still aborts the fetch.
    pub async fn fetch_sectors(&self) -> Result<Vec<SectorRecord>, FetchError> {
        let warmup = HttpRequest::get(WARMUP_URL)
            .with_header("user-agent", DESKTOP_USER_AGENT)
            .with_timeout_ms(self.timeout_ms);

        self.http_client.execute(warmup).await.map_err(|e| {
            FetchError::transport(format!("warm-up request failed: {}", e.message()))
        })?;

        let request = HttpRequest::get(SECTOR_INDICES_URL)
            .with_header("user-agent", DESKTOP_USER_AGENT)
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|e| {
            FetchError::transport(format!("sector index request failed: {}", e.message()))
        })?;

        if !response.is_success() {
            return Err(FetchError::status(format!(
                "sector index feed returned status {}",
                response.status
            )));
        }

        let payload: SectorIndicesPayload = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::parse(format!("failed to parse sector index feed: {}", e)))?;

        let sectors = rank_sectors(
            payload
                .data
                .into_iter()
                .filter(|entry| is_sector_index(&entry.index))
                .map(|entry| SectorRecord::new(entry.index, entry.p_change))
                .collect(),
        );

        debug!(count = sectors.len(), "fetched sector indices");
        Ok(sectors)
    }
}

/// True sector indices carry the `NIFTY ` prefix; the broad-market indices
/// that share it are excluded by marker substring.
fn is_sector_index(name: &str) -> bool {
    name.starts_with("NIFTY ")
        && !EXCLUDED_INDEX_MARKERS
            .iter()
            .any(|marker| name.contains(marker))
}

/// Descending by percentage change; the sort is stable so equal changes
/// keep their feed order.
fn rank_sectors(mut sectors: Vec<SectorRecord>) -> Vec<SectorRecord> {
    sectors.sort_by(|a, b| b.percent_change.total_cmp(&a.percent_change));
    sectors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_filter_requires_nifty_prefix() {
        assert!(is_sector_index("NIFTY AUTO"));
        assert!(is_sector_index("NIFTY FMCG"));
        assert!(!is_sector_index("INDIA VIX"));
        assert!(!is_sector_index("NIFTY50 VALUE"));
    }

    #[test]
    fn sector_filter_excludes_broad_market_markers() {
        assert!(!is_sector_index("NIFTY 50"));
        assert!(!is_sector_index("NIFTY MIDCAP 100"));
        assert!(!is_sector_index("NIFTY SMLCAP 250"));
    }

    #[test]
    fn ranking_sorts_descending_by_change() {
        let ranked = rank_sectors(vec![
            SectorRecord::new("NIFTY AUTO", -0.4),
            SectorRecord::new("NIFTY FMCG", 2.1),
            SectorRecord::new("NIFTY METAL", 0.3),
        ]);

        let changes: Vec<f64> = ranked.iter().map(|s| s.percent_change).collect();
        assert_eq!(changes, vec![2.1, 0.3, -0.4]);
    }

    #[test]
    fn ranking_keeps_feed_order_on_ties() {
        let ranked = rank_sectors(vec![
            SectorRecord::new("NIFTY AUTO", 1.0),
            SectorRecord::new("NIFTY FMCG", 1.0),
        ]);

        assert_eq!(ranked[0].index, "NIFTY AUTO");
        assert_eq!(ranked[1].index, "NIFTY FMCG");
    }
}
