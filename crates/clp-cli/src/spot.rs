//! Spot USD price lookup from the Binance public data API.
//!
//! Convenience only: the engine takes USD prices as plain inputs, and
//! callers that already have a price feed should pass `--usd0`/`--usd1`
//! instead. Uses the public market-data endpoint
//! (`data-api.binance.vision`) which requires no API key or signature.

use eyre::{eyre, Context, Result};
use serde::Deserialize;
use tracing::warn;

/// Binance public market-data base URL (no API key required).
const BINANCE_BASE_URL: &str = "https://data-api.binance.vision";

#[derive(Debug, Deserialize)]
struct TickerPrice {
    price: String,
}

/// Fetches the last trade price for a symbol (e.g. `"ETHUSDT"`).
///
/// # Errors
/// Returns error if the HTTP request fails, the endpoint rate-limits, or
/// the response is malformed.
#[tracing::instrument]
pub async fn fetch_spot_usd(symbol: &str) -> Result<f64> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .wrap_err("failed to build HTTP client")?;

    let url = format!(
        "{}/api/v3/ticker/price?symbol={}",
        BINANCE_BASE_URL,
        symbol.to_uppercase()
    );

    let response = client
        .get(&url)
        .send()
        .await
        .wrap_err("spot price request failed")?;

    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS
        || status == reqwest::StatusCode::IM_A_TEAPOT
    {
        // 429 or 418 — rate limited or IP banned; do not retry here.
        warn!(status = status.as_u16(), "spot endpoint rate limit hit");
        return Err(eyre!("spot price endpoint rate-limited ({status})"));
    }
    if !status.is_success() {
        return Err(eyre!("spot price HTTP status: {status}"));
    }

    let ticker: TickerPrice = response
        .json()
        .await
        .wrap_err("failed to decode ticker response")?;

    ticker
        .price
        .parse::<f64>()
        .wrap_err_with(|| format!("malformed price in ticker response: {}", ticker.price))
}
