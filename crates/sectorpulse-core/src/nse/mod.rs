//! NSE upstream fetchers.
//!
//! Two independent clients against the public NSE endpoints:
//!
//! | Client | Endpoint | Session |
//! |--------|----------|---------|
//! | [`SectorIndicesClient`] | `equity-stockIndices` | Cookie warm-up against the site root, desktop user-agent |
//! | [`DerivativesClient`] | `liveEquity-derivatives` | No warm-up, mobile user-agent |
//!
//! Each client owns its own transport, so session cookies never leak
//! between the two.

pub mod derivatives;
pub mod sectors;

pub use derivatives::DerivativesClient;
pub use sectors::SectorIndicesClient;
