//! # Sectorpulse Core
//!
//! Fetchers, domain types, and report assembly for the sectorpulse NSE
//! sectoral report pipeline.
//!
//! ## Overview
//!
//! One report generation is a strictly sequential pipeline:
//!
//! 1. Fetch all sector indices, filter to true sectors, rank by change
//! 2. Fetch open-interest leaders for the top gaining and top losing sector
//! 3. Render everything into one Telegram-Markdown text block
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Domain models ([`SectorRecord`], [`StockOiRecord`]) |
//! | [`error`] | Typed fetch errors |
//! | [`http_client`] | HTTP transport abstraction (reqwest and mock) |
//! | [`nse`] | NSE sector-index and derivatives fetchers |
//! | [`report`] | Report orchestration and rendering |
//!
//! ## Error Handling
//!
//! Fetchers return structured [`FetchError`] values so callers can
//! distinguish failure causes:
//!
//! ```rust
//! use sectorpulse_core::{FetchError, FetchErrorKind};
//!
//! fn handle_error(error: FetchError) {
//!     match error.kind() {
//!         FetchErrorKind::Transport => {
//!             // Connection never completed
//!         }
//!         FetchErrorKind::Status => {
//!             // Upstream rejected the request
//!         }
//!         FetchErrorKind::Parse => {
//!             // Payload shape changed underneath us
//!         }
//!     }
//! }
//! ```
//!
//! The report layer converts every fetch failure into degraded output
//! rather than propagating it: a sector-feed failure produces the fixed
//! warning text, an open-interest failure only drops its section.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  CLI / Delivery  │
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ report::generate │
//! └────────┬─────────┘
//!          │
//!    ┌─────┴──────────────────┐
//!    ▼                        ▼
//! ┌─────────────────────┐  ┌────────────────────┐
//! │ SectorIndicesClient │  │ DerivativesClient  │
//! │ (cookie warm-up)    │  │ (own session)      │
//! └──────────┬──────────┘  └─────────┬──────────┘
//!            ▼                       ▼
//! ┌──────────────────────────────────────────────┐
//! │ HttpClient (reqwest / mock)                  │
//! └──────────────────────────────────────────────┘
//! ```

pub mod domain;
pub mod error;
pub mod http_client;
pub mod nse;
pub mod report;

// Domain models
pub use domain::{SectorRecord, StockOiRecord};

// Error types
pub use error::{FetchError, FetchErrorKind};

// Transport
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, MockHttpClient, ReqwestHttpClient,
};

// Fetchers
pub use nse::{DerivativesClient, SectorIndicesClient};

// Report assembly
pub use report::{generate, render, FETCH_FAILURE_TEXT};
