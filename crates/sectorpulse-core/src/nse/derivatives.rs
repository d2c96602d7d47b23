use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::domain::StockOiRecord;
use crate::error::FetchError;
use crate::http_client::{HttpClient, HttpRequest};

const DERIVATIVES_URL_BASE: &str = "https://www.nseindia.com/api/liveEquity-derivatives";
const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X)";

/// Number of open-interest leaders retained per sector query.
const OI_LEADER_COUNT: usize = 2;

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Deserialize)]
struct DerivativesPayload {
    data: Vec<DerivativeEntry>,
}

#[derive(Debug, Deserialize)]
struct DerivativeEntry {
    symbol: String,
    #[serde(rename = "changeinOpenInterest")]
    change_in_open_interest: f64,
    #[serde(rename = "totalTradedVolume")]
    total_traded_volume: u64,
}

/// Fetches the open-interest leaders of a sector's derivative universe.
///
/// Unlike the sector feed this endpoint needs no warm-up; it answers to a
/// mobile user-agent on a fresh session.
pub struct DerivativesClient {
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl DerivativesClient {
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

    /// Fetch the top stocks of `sector` under the lexicographic descending
    /// ordering (open-interest change, traded volume), at most
    /// [`OI_LEADER_COUNT`] of them.
    pub async fn fetch_oi_leaders(&self, sector: &str) -> Result<Vec<StockOiRecord>, FetchError> {
        let request = HttpRequest::get(derivatives_url(sector))
            .with_header("user-agent", MOBILE_USER_AGENT)
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|e| {
            FetchError::transport(format!(
                "derivatives request for {sector} failed: {}",
                e.message()
            ))
        })?;

        if !response.is_success() {
            return Err(FetchError::status(format!(
                "derivatives feed for {sector} returned status {}",
                response.status
            )));
        }

        let payload: DerivativesPayload = serde_json::from_str(&response.body).map_err(|e| {
            FetchError::parse(format!("failed to parse derivatives feed for {sector}: {e}"))
        })?;

        let leaders = rank_oi_leaders(
            payload
                .data
                .into_iter()
                .map(|entry| {
                    StockOiRecord::new(
                        entry.symbol,
                        entry.change_in_open_interest,
                        entry.total_traded_volume,
                    )
                })
                .collect(),
        );

        debug!(sector, count = leaders.len(), "fetched open-interest leaders");
        Ok(leaders)
    }
}

fn derivatives_url(sector: &str) -> String {
    format!("{DERIVATIVES_URL_BASE}?index={}", urlencoding::encode(sector))
}

/// Descending by open-interest change, traded volume breaking ties, then
/// truncated to the leader count.
fn rank_oi_leaders(mut stocks: Vec<StockOiRecord>) -> Vec<StockOiRecord> {
    stocks.sort_by(|a, b| {
        b.oi_change_percent
            .total_cmp(&a.oi_change_percent)
            .then_with(|| b.total_traded_volume.cmp(&a.total_traded_volume))
    });
    stocks.truncate(OI_LEADER_COUNT);
    stocks
}
