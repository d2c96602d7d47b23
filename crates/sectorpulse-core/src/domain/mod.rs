//! # Domain Models
//!
//! Canonical domain types for one report generation.
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SectorRecord`] | Sector index with its session percentage change |
//! | [`StockOiRecord`] | Derivative stock with open-interest change and volume |
//!
//! Nothing here persists beyond a single invocation; every collection is
//! built once by a fetcher and then read by the report assembler.

mod models;

pub use models::{SectorRecord, StockOiRecord};
