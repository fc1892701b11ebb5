//! Simulation engine over the daily Selic series
//!
//! Consumes a date range (and, for simulation, a principal) and derives the
//! three operations offered by the tool: raw history, daily compounding of
//! the principal, and CSV export. All arithmetic uses Decimal.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::warn;

use crate::error::{Result, SelicError};
use crate::sgs::{RateRecord, SgsClient};

/// Business days conventionally used to annualize a daily Selic rate.
const BUSINESS_DAYS_PER_YEAR: u32 = 252;

/// Default file name for the CSV export.
pub const EXPORT_FILENAME: &str = "selic.csv";

/// Final value of a compounded simulation, rounded to 2 fractional digits.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub valorfinal: Decimal,
}

/// Derives history, simulation and CSV export from the fetched series.
pub struct SimulationEngine {
    client: SgsClient,
}

impl SimulationEngine {
    pub fn new(client: SgsClient) -> Self {
        Self { client }
    }

    /// Raw historical series, exactly as returned by the provider.
    pub async fn history(&self, start_date: &str, end_date: &str) -> Result<Vec<RateRecord>> {
        Ok(self.client.fetch_series(start_date, end_date).await?)
    }

    /// Most recent published observation, if any.
    pub async fn latest(&self) -> Result<Option<RateRecord>> {
        Ok(self.client.fetch_latest().await?)
    }

    /// Compound a principal over the series for the range.
    pub async fn simulate(
        &self,
        principal: Decimal,
        start_date: &str,
        end_date: &str,
    ) -> Result<SimulationResult> {
        let series = self.client.fetch_series(start_date, end_date).await?;
        Ok(SimulationResult {
            valorfinal: compound(principal, &series),
        })
    }

    /// Render the series for the range as semicolon-separated CSV.
    pub async fn export_csv(&self, start_date: &str, end_date: &str) -> Result<String> {
        let series = self.client.fetch_series(start_date, end_date).await?;
        render_csv(&series, start_date, end_date)
    }
}

/// Apply each day's annualized rate to the running total, in series order.
///
/// Each record's rate is divided by 100 and converted to a daily factor via
/// the 252 business-day convention: `total *= 1 + fraction/252`. The fold is
/// strictly left-to-right; the provider's chronological order is preserved.
/// The result is rounded to 2 digits, half away from zero.
pub fn compound(principal: Decimal, series: &[RateRecord]) -> Decimal {
    let business_days = Decimal::from(BUSINESS_DAYS_PER_YEAR);
    let hundred = Decimal::from(100u32);

    let mut total = principal;
    for record in series {
        let fraction = match parse_decimal_br(&record.rate) {
            Some(rate) => rate / hundred,
            None => {
                // Legacy behavior: an unparseable rate counts as a zero-rate day.
                warn!(
                    "Unparseable rate '{}' on {}, treating as zero-rate day",
                    record.rate, record.date
                );
                Decimal::ZERO
            }
        };
        total *= Decimal::ONE + fraction / business_days;
    }

    total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render the series as `Data;Valor` CSV with 6-digit comma-decimal values.
///
/// An empty series (or a first record without a date) is a client error that
/// names the requested range rather than an empty or malformed CSV.
pub fn render_csv(
    series: &[RateRecord],
    start_date: &str,
    end_date: &str,
) -> Result<String> {
    let first_date_missing = series
        .first()
        .map(|record| record.date.trim().is_empty())
        .unwrap_or(true);
    if first_date_missing {
        return Err(SelicError::NoDataForRange {
            start: start_date.to_string(),
            end: end_date.to_string(),
        }
        .into());
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    writer.write_record(["Data", "Valor"])?;

    for record in series {
        let value = parse_decimal_br(&record.rate).unwrap_or_else(|| {
            warn!(
                "Unparseable rate '{}' on {}, exporting as zero",
                record.rate, record.date
            );
            Decimal::ZERO
        });
        let formatted = format_rate_6dp(value);
        writer.write_record([record.date.as_str(), formatted.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

/// Parse a Brazilian-style decimal string, accepting either a comma or a
/// dot as the fractional separator.
pub fn parse_decimal_br(input: &str) -> Option<Decimal> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().ok()
}

/// Format a rate with 6 fractional digits and a comma separator: "0,044813"
pub fn format_rate_6dp(value: Decimal) -> String {
    format!("{:.6}", value).replace('.', ",")
}
