//! The fetch pipeline shared by the three price fetchers: build the URL,
//! issue the request, decode the payload, publish the result.

use reqwest::{header, Client, Url};
use tracing::{debug, instrument};

use crate::diagnostics::DiagnosticsSink;
use crate::observable::Observed;
use crate::quote::error::{DecodeError, QuoteError};

/// Diagnostics event names for one fetcher's failure modes.
pub(crate) struct FetchEvents {
    pub request: &'static str,
    pub network: &'static str,
    pub decode: &'static str,
}

/// Runs one fetch to completion and publishes the outcome into `target`.
///
/// No error escapes this function. A transport or decode failure is
/// reported to `diagnostics` and publishes the zero sentinel; a URL that
/// cannot be constructed is reported and leaves the state untouched.
#[instrument(skip(client, decode, target, diagnostics, events))]
pub(crate) async fn fetch_and_publish<F>(
    client: &Client,
    url: &str,
    decode: F,
    target: &Observed<f64>,
    diagnostics: &dyn DiagnosticsSink,
    events: &FetchEvents,
) where
    F: FnOnce(&[u8]) -> Result<f64, DecodeError>,
{
    match fetch_quote(client, url, decode).await {
        Ok(price) => {
            debug!(price, "decoded quote");
            target.set(price);
        }
        Err(QuoteError::RequestConstruction(detail)) => {
            diagnostics.event_with(events.request, &[("error_description", detail.as_str())]);
        }
        Err(QuoteError::HttpRequest(err)) => {
            let detail = err.to_string();
            diagnostics.event_with(events.network, &[("error_description", detail.as_str())]);
            target.set(0.0);
        }
        Err(QuoteError::Decode(err)) => {
            let detail = err.to_string();
            diagnostics.event_with(events.decode, &[("error_description", detail.as_str())]);
            target.set(0.0);
        }
    }
}

async fn fetch_quote<F>(client: &Client, url: &str, decode: F) -> Result<f64, QuoteError>
where
    F: FnOnce(&[u8]) -> Result<f64, DecodeError>,
{
    let url = Url::parse(url).map_err(|e| QuoteError::RequestConstruction(e.to_string()))?;

    debug!(%url, "requesting quote");
    let response = client
        .get(url)
        .header(header::ACCEPT, "application/json")
        .send()
        .await?;
    let payload = response.bytes().await?;

    let price = decode(&payload)?;
    Ok(price)
}
