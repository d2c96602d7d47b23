//! CLI argument definitions for sectorpulse.
//!
//! The binary runs one pipeline pass per invocation; an external trigger
//! (cron, systemd timer) provides the cadence.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--dry-run` | `false` | Print the report to stdout instead of sending |
//! | `--timeout-ms` | `10000` | Per-request HTTP timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! # Generate and deliver the report (TELEGRAM_TOKEN and CHAT_ID required)
//! sectorpulse
//!
//! # Inspect the report locally without a bot token
//! sectorpulse --dry-run
//! ```

use clap::Parser;

/// NSE sectoral snapshot delivered over Telegram.
///
/// Fetches sector indices and open-interest leaders from NSE, ranks them,
/// and sends one Markdown report per run.
#[derive(Debug, Parser)]
#[command(
    name = "sectorpulse",
    author,
    version,
    about = "NSE sectoral report pipeline"
)]
pub struct Cli {
    /// Print the generated report to stdout instead of sending it.
    ///
    /// Telegram configuration is not required in this mode.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Per-request timeout budget in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,
}
