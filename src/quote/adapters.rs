//! Per-source response decoding.
//!
//! Each external service has its own payload shape and its own decoder
//! here; the fetchers carry no format-specific branching.

use serde::Deserialize;
use serde_json::Value;

use crate::currency::Currency;
use crate::quote::error::DecodeError;

/// Ticker symbol CoinMarketCap lists Nano under.
pub(crate) const NANO_TICKER_SYMBOL: &str = "XRB";

// example response (fields besides `last` omitted by serde):
// {"XRB_BTC": {"last": "0.00012345", "high": "...", "low": "...", ...}}
#[derive(Debug, Deserialize)]
struct PairSummary {
    #[serde(rename = "XRB_BTC")]
    xrb_pair: PairStats,
}

#[derive(Debug, Deserialize)]
struct PairStats {
    last: String, // last trade price, quoted as a decimal string
}

/// Decodes the Mercatox 24h pair summary into the last XRB/BTC trade price.
pub(crate) fn decode_trade_pair(payload: &[u8]) -> Result<f64, DecodeError> {
    let summary: PairSummary = serde_json::from_slice(payload)?;
    let last = summary.xrb_pair.last.parse::<f64>()?;
    Ok(last)
}

/// Decodes a ticker list requested with `limit=1` into the top entry's
/// (BTC's) price converted into `currency`.
pub(crate) fn decode_reference_local_price(
    payload: &[u8],
    currency: Currency,
) -> Result<f64, DecodeError> {
    let entries: Vec<Value> = serde_json::from_slice(payload)?;
    let top = entries
        .first()
        .ok_or_else(|| DecodeError::EntryNotFound("top ticker entry".to_string()))?;
    converted_price(top, currency)
}

/// Decodes a ticker list into Nano's price converted into `currency`.
///
/// The request is sized so the Nano entry appears somewhere in the list; it
/// is looked up by symbol, never assumed to sit at a fixed rank.
pub(crate) fn decode_tracked_local_price(
    payload: &[u8],
    currency: Currency,
) -> Result<f64, DecodeError> {
    let entries: Vec<Value> = serde_json::from_slice(payload)?;
    let nano = entries
        .iter()
        .find(|entry| entry.get("symbol").and_then(Value::as_str) == Some(NANO_TICKER_SYMBOL))
        .ok_or_else(|| DecodeError::EntryNotFound(NANO_TICKER_SYMBOL.to_string()))?;
    converted_price(nano, currency)
}

// example entry:
// {"id": "bitcoin", "symbol": "BTC", "rank": "1", "price_usd": "50000.0", ...}
// The converted price field is named after the requested currency, so it is
// read out of the raw JSON rather than a typed struct.
fn converted_price(entry: &Value, currency: Currency) -> Result<f64, DecodeError> {
    let field = currency.price_field();
    match entry.get(&field) {
        Some(Value::String(raw)) => Ok(raw.parse::<f64>()?),
        _ => Err(DecodeError::MissingField(field)),
    }
}
