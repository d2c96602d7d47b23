//! Report assembly.
//!
//! [`generate`] drives the pipeline: sector fetch, then one open-interest
//! fetch each for the top gaining and top losing sector, then [`render`].
//! Fetch failures never escape this module; a sector-level failure yields
//! the fixed warning text, an open-interest failure only drops its section.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::warn;

use crate::domain::{SectorRecord, StockOiRecord};
use crate::nse::{DerivativesClient, SectorIndicesClient};

/// Report sent when the sector feed cannot be read at all.
pub const FETCH_FAILURE_TEXT: &str = "⚠️ Failed to fetch sector data";

const GAINER_COUNT: usize = 3;
const LOSER_COUNT: usize = 3;

/// Both open-interest blocks carry this same heading, matching the
/// published message format.
const OI_SECTION_HEADING: &str = "Top OI Gainers";

/// 24-hour clock with an AM/PM marker, matching the published header
/// format, e.g. `14:05 PM, 06-Aug-2026`.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute] [period], [day]-[month repr:short]-[year]");

/// Produce the full report, or the fixed warning text when the sector feed
/// is unavailable or empty.
///
/// The derivatives feed is only consulted once the sector feed has
/// succeeded, and each of its failures degrades to an omitted section.
pub async fn generate(
    sector_client: &SectorIndicesClient,
    derivatives_client: &DerivativesClient,
) -> String {
    let sectors = match sector_client.fetch_sectors().await {
        Ok(sectors) if !sectors.is_empty() => sectors,
        Ok(_) => {
            warn!("sector feed returned no sector indices");
            return FETCH_FAILURE_TEXT.to_string();
        }
        Err(error) => {
            warn!(code = error.code(), "sector fetch failed: {error}");
            return FETCH_FAILURE_TEXT.to_string();
        }
    };

    let gainer_oi = fetch_leaders_or_empty(derivatives_client, &sectors[0].index).await;
    let loser_oi =
        fetch_leaders_or_empty(derivatives_client, &sectors[sectors.len() - 1].index).await;

    render(&sectors, &gainer_oi, &loser_oi, &report_timestamp())
}

async fn fetch_leaders_or_empty(client: &DerivativesClient, sector: &str) -> Vec<StockOiRecord> {
    match client.fetch_oi_leaders(sector).await {
        Ok(leaders) => leaders,
        Err(error) => {
            warn!(code = error.code(), sector, "open-interest fetch failed: {error}");
            Vec::new()
        }
    }
}

/// Render the report text from already-fetched data.
///
/// `sectors` must be non-empty and sorted descending by percentage change;
/// the first entry is the top gainer and the last the top loser.
pub fn render(
    sectors: &[SectorRecord],
    gainer_oi: &[StockOiRecord],
    loser_oi: &[StockOiRecord],
    timestamp: &str,
) -> String {
    let mut lines = Vec::new();
    lines.push(format!("📈 *NSE Sectoral Report - {timestamp}* 📉\n"));

    lines.push("🏆 *Top 3 Gaining Sectors*".to_string());
    for (position, sector) in sectors.iter().take(GAINER_COUNT).enumerate() {
        lines.push(format!(
            "{}. {} ▲ {}%",
            position + 1,
            sector.index,
            sector.percent_change
        ));
    }

    lines.push("\n💣 *Top 3 Losing Sectors*".to_string());
    for (position, sector) in sectors.iter().rev().take(LOSER_COUNT).enumerate() {
        lines.push(format!(
            "{}. {} ▼ {}%",
            position + 1,
            sector.index,
            sector.percent_change.abs()
        ));
    }

    lines.push("\n📊 *All Sectoral Indices*".to_string());
    for sector in sectors {
        lines.push(format!(
            "• {} {} {}%",
            sector.index,
            change_arrow(sector.percent_change),
            sector.percent_change.abs()
        ));
    }

    if let Some(top_gainer) = sectors.first() {
        push_oi_section(
            &mut lines,
            "🔥",
            OI_SECTION_HEADING,
            &top_gainer.index,
            gainer_oi,
        );
    }
    if let Some(top_loser) = sectors.last() {
        push_oi_section(
            &mut lines,
            "💀",
            OI_SECTION_HEADING,
            &top_loser.index,
            loser_oi,
        );
    }

    lines.join("\n")
}

/// Append one labeled open-interest block; nothing is emitted for an empty
/// leader set. The block label is the sector name's last token.
fn push_oi_section(
    lines: &mut Vec<String>,
    emoji: &str,
    heading: &str,
    sector: &str,
    leaders: &[StockOiRecord],
) {
    if leaders.is_empty() {
        return;
    }

    let label = sector.split_whitespace().last().unwrap_or(sector);
    lines.push(format!("\n{emoji} *{heading} ({label} Sector)*"));
    for (position, stock) in leaders.iter().enumerate() {
        lines.push(format!(
            "{}. {} - OI ▲ {}%, Volume: {}M",
            position + 1,
            stock.symbol,
            stock.oi_change_percent,
            format_volume_millions(stock.total_traded_volume)
        ));
    }
}

/// ▬ only at exactly zero.
fn change_arrow(change: f64) -> &'static str {
    if change > 0.0 {
        "▲"
    } else if change < 0.0 {
        "▼"
    } else {
        "▬"
    }
}

/// Traded volume in millions, one decimal place.
fn format_volume_millions(volume: u64) -> String {
    format!("{:.1}", volume as f64 / 1_000_000.0)
}

/// Header timestamp in local time, falling back to UTC when the local
/// offset cannot be determined.
pub fn report_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(TIMESTAMP_FORMAT).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_sectors() -> Vec<SectorRecord> {
        vec![
            SectorRecord::new("NIFTY AUTO", 3.2),
            SectorRecord::new("NIFTY FMCG", 1.1),
            SectorRecord::new("NIFTY PHARMA", 0.0),
            SectorRecord::new("NIFTY METAL", -0.5),
            SectorRecord::new("NIFTY REALTY", -2.7),
        ]
    }

    #[test]
    fn gainers_listed_descending_and_losers_worst_first() {
        let report = render(&synthetic_sectors(), &[], &[], "10:30 AM, 06-Aug-2026");
        let lines: Vec<&str> = report.lines().collect();

        let gainers_at = lines
            .iter()
            .position(|l| l.contains("Top 3 Gaining Sectors"))
            .unwrap();
        assert_eq!(lines[gainers_at + 1], "1. NIFTY AUTO ▲ 3.2%");
        assert_eq!(lines[gainers_at + 2], "2. NIFTY FMCG ▲ 1.1%");
        assert_eq!(lines[gainers_at + 3], "3. NIFTY PHARMA ▲ 0%");

        let losers_at = lines
            .iter()
            .position(|l| l.contains("Top 3 Losing Sectors"))
            .unwrap();
        assert_eq!(lines[losers_at + 1], "1. NIFTY REALTY ▼ 2.7%");
        assert_eq!(lines[losers_at + 2], "2. NIFTY METAL ▼ 0.5%");
        assert_eq!(lines[losers_at + 3], "3. NIFTY PHARMA ▼ 0%");
    }

    #[test]
    fn full_list_uses_flat_arrow_only_at_exactly_zero() {
        let report = render(&synthetic_sectors(), &[], &[], "10:30 AM, 06-Aug-2026");

        assert!(report.contains("• NIFTY AUTO ▲ 3.2%"));
        assert!(report.contains("• NIFTY PHARMA ▬ 0%"));
        assert!(report.contains("• NIFTY METAL ▼ 0.5%"));
        assert!(report.contains("• NIFTY REALTY ▼ 2.7%"));
    }

    #[test]
    fn oi_sections_are_omitted_when_empty() {
        let report = render(&synthetic_sectors(), &[], &[], "10:30 AM, 06-Aug-2026");
        assert!(!report.contains(OI_SECTION_HEADING));
    }

    #[test]
    fn both_oi_sections_share_the_gainers_heading() {
        let leaders = vec![StockOiRecord::new("MARUTI", 9.5, 2_350_000)];
        let report = render(
            &synthetic_sectors(),
            &leaders,
            &leaders,
            "10:30 AM, 06-Aug-2026",
        );

        assert!(report.contains("🔥 *Top OI Gainers (AUTO Sector)*"));
        assert!(report.contains("💀 *Top OI Gainers (REALTY Sector)*"));
    }

    #[test]
    fn oi_lines_show_volume_in_millions_to_one_decimal() {
        let leaders = vec![StockOiRecord::new("MARUTI", 9.5, 2_350_000)];
        let report = render(
            &synthetic_sectors(),
            &leaders,
            &[],
            "10:30 AM, 06-Aug-2026",
        );

        assert!(report.contains("1. MARUTI - OI ▲ 9.5%, Volume: 2.4M"));
    }

    #[test]
    fn volume_formatting_rounds_to_one_decimal() {
        assert_eq!(format_volume_millions(2_350_000), "2.4");
        assert_eq!(format_volume_millions(1_000_000), "1.0");
        assert_eq!(format_volume_millions(40_000), "0.0");
    }

    #[test]
    fn header_carries_the_timestamp() {
        let report = render(&synthetic_sectors(), &[], &[], "10:30 AM, 06-Aug-2026");
        assert!(report.starts_with("📈 *NSE Sectoral Report - 10:30 AM, 06-Aug-2026* 📉"));
    }
}
