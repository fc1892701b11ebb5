//! SGS client - Banco Central time-series API
//!
//! Fetches the daily Selic series (SGS series 11) over HTTP. Date-range
//! parameters are passed through to the upstream query verbatim; the client
//! keeps no state beyond the underlying connection pool and never retries.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::SgsConfig;
use crate::error::SelicError;

/// One daily observation as delivered by the provider.
///
/// Both fields are kept as provider strings: `date` is `DD/MM/YYYY` and
/// `rate` is a decimal with a comma as the fractional separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRecord {
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "valor")]
    pub rate: String,
}

/// HTTP client for the SGS endpoint
pub struct SgsClient {
    http: Client,
    base_url: String,
}

impl SgsClient {
    pub fn new(config: &SgsConfig) -> Result<Self, SelicError> {
        if config.danger_accept_invalid_certs {
            warn!("TLS certificate verification toward the SGS endpoint is disabled");
        }

        let http = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; SelicBot/1.0)")
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs)
            .build()
            .map_err(|e| SelicError::UpstreamUnavailable(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the ordered daily series for a date range.
    ///
    /// Dates are forwarded exactly as given; the provider decides what an
    /// empty or out-of-range request returns (usually an empty array).
    pub async fn fetch_series(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<RateRecord>, SelicError> {
        let url = format!(
            "{}?formato=json&dataInicial={}&dataFinal={}",
            self.base_url, start_date, end_date
        );
        info!("Fetching Selic series from {} to {}", start_date, end_date);

        let body = self.get_body(&url).await?;
        let series = decode_series(&body)?;
        debug!("Fetched {} daily observations", series.len());
        Ok(series)
    }

    /// Fetch the most recent published observation, if any.
    ///
    /// The provider's "ultimos/1" variant returns an array with zero or one
    /// element. An empty array or a body that does not decode as an array
    /// yields `None` rather than an error.
    pub async fn fetch_latest(&self) -> Result<Option<RateRecord>, SelicError> {
        let url = format!("{}/ultimos/1?formato=json", self.base_url);
        info!("Fetching latest Selic observation");

        let body = self.get_body(&url).await?;
        Ok(decode_latest(&body))
    }

    async fn get_body(&self, url: &str) -> Result<String, SelicError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SelicError::UpstreamUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SelicError::UpstreamUnavailable(format!(
                "SGS returned error status: {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SelicError::UpstreamUnavailable(e.to_string()))
    }
}

/// Decode a response body into the ordered series.
pub fn decode_series(body: &str) -> Result<Vec<RateRecord>, SelicError> {
    serde_json::from_str(body).map_err(|e| SelicError::UpstreamMalformedResponse(e.to_string()))
}

/// Decode a "ultimos/1" response body into its single record, if present.
pub fn decode_latest(body: &str) -> Option<RateRecord> {
    serde_json::from_str::<Vec<RateRecord>>(body)
        .ok()
        .and_then(|records| records.into_iter().next())
}
