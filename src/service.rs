//! The reactive price state: four observable values, one fetcher per
//! tracked quantity, and the entry points that trigger them.

use std::sync::Arc;

use reqwest::Client;

use crate::config::Endpoints;
use crate::currency::{Currency, CurrencySource};
use crate::diagnostics::DiagnosticsSink;
use crate::observable::Observed;
use crate::quote::adapters;
use crate::quote::fetch::{fetch_and_publish, FetchEvents};

const TRADE_PAIR_EVENTS: FetchEvents = FetchEvents {
    request: "Error building Mercatox price request",
    network: "Error getting Mercatox price data",
    decode: "Error decoding Mercatox price data",
};

const BTC_LOCAL_EVENTS: FetchEvents = FetchEvents {
    request: "Error building CoinMarketCap BTC price request",
    network: "Error getting CoinMarketCap BTC price data",
    decode: "Error decoding CoinMarketCap BTC price data",
};

const NANO_LOCAL_EVENTS: FetchEvents = FetchEvents {
    request: "Error building CoinMarketCap Nano price request",
    network: "Error getting CoinMarketCap Nano price data",
    decode: "Error decoding CoinMarketCap Nano price data",
};

// Entries the ticker request asks for. BTC is always ranked first; Nano sits
// somewhere in the top 50.
const REFERENCE_TICKER_LIMIT: u32 = 1;
const TRACKED_TICKER_LIMIT: u32 = 50;

/// Live price quotes, refreshed on demand and published as observable
/// values.
///
/// Every price starts at `0.0`, the "unavailable" sentinel, and reverts to
/// it whenever its fetch fails; consumers watching the observables never see
/// a distinct error state. Fetch entry points spawn onto the ambient tokio
/// runtime and return immediately.
#[derive(Clone)]
pub struct PriceService {
    inner: Arc<Inner>,
}

struct Inner {
    http: Client,
    endpoints: Endpoints,
    diagnostics: Arc<dyn DiagnosticsSink>,
    local_currency: Observed<Currency>,
    btc_trade_price: Observed<f64>,
    btc_local_price: Observed<f64>,
    nano_local_price: Observed<f64>,
}

impl PriceService {
    /// Builds the service against the production endpoints. The initial
    /// currency is read from `currencies` once, here.
    pub fn new(currencies: &dyn CurrencySource, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        Self::with_endpoints(Endpoints::default(), currencies, diagnostics)
    }

    pub fn with_endpoints(
        endpoints: Endpoints,
        currencies: &dyn CurrencySource,
        diagnostics: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                http: Client::new(),
                endpoints,
                diagnostics,
                local_currency: Observed::new(currencies.local_currency()),
                btc_trade_price: Observed::new(0.0),
                btc_local_price: Observed::new(0.0),
                nano_local_price: Observed::new(0.0),
            }),
        }
    }

    /// The selected local currency.
    pub fn local_currency(&self) -> &Observed<Currency> {
        &self.inner.local_currency
    }

    /// Last XRB/BTC trade price; `0.0` until a fetch succeeds.
    pub fn btc_trade_price(&self) -> &Observed<f64> {
        &self.inner.btc_trade_price
    }

    /// BTC's price in the local currency; `0.0` until a fetch succeeds.
    pub fn btc_local_currency_price(&self) -> &Observed<f64> {
        &self.inner.btc_local_price
    }

    /// Nano's price in the local currency; `0.0` until a fetch succeeds.
    pub fn nano_local_currency_price(&self) -> &Observed<f64> {
        &self.inner.nano_local_price
    }

    /// Replaces the selected local currency.
    ///
    /// Does not trigger a fetch by itself. Fetches already in flight keep
    /// the currency they captured when they started.
    pub fn update(&self, currency: Currency) {
        self.inner.local_currency.set(currency);
    }

    /// Refreshes the trade price and BTC's local-currency price, each on its
    /// own task. Outcomes surface only through the observable values.
    pub fn fetch_latest_prices(&self) {
        self.fetch_latest_btc_trade_price();
        self.fetch_latest_btc_local_currency_price();
    }

    // TODO: add more trade-price sources (Binance, OKEx, KuCoin)
    fn fetch_latest_btc_trade_price(&self) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.fetch_btc_trade_price().await });
    }

    /// Refreshes BTC's local-currency price on its own task.
    pub fn fetch_latest_btc_local_currency_price(&self) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.fetch_btc_local_price().await });
    }

    /// Refreshes Nano's local-currency price on its own task. The owner
    /// calls this on its own cadence, separately from
    /// [`PriceService::fetch_latest_prices`].
    pub fn fetch_latest_nano_local_currency_price(&self) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move { inner.fetch_nano_local_price().await });
    }
}

impl Inner {
    async fn fetch_btc_trade_price(&self) {
        fetch_and_publish(
            &self.http,
            &self.endpoints.trade_pair_url,
            adapters::decode_trade_pair,
            &self.btc_trade_price,
            self.diagnostics.as_ref(),
            &TRADE_PAIR_EVENTS,
        )
        .await;
    }

    async fn fetch_btc_local_price(&self) {
        // Currency is captured once, before the request goes out; both the
        // URL and the decode step use this value, so a concurrent `update`
        // cannot desynchronize them.
        let currency = self.local_currency.get();
        let url = ticker_url(&self.endpoints.ticker_url, currency, REFERENCE_TICKER_LIMIT);
        fetch_and_publish(
            &self.http,
            &url,
            move |payload| adapters::decode_reference_local_price(payload, currency),
            &self.btc_local_price,
            self.diagnostics.as_ref(),
            &BTC_LOCAL_EVENTS,
        )
        .await;
    }

    async fn fetch_nano_local_price(&self) {
        let currency = self.local_currency.get();
        let url = ticker_url(&self.endpoints.ticker_url, currency, TRACKED_TICKER_LIMIT);
        fetch_and_publish(
            &self.http,
            &url,
            move |payload| adapters::decode_tracked_local_price(payload, currency),
            &self.nano_local_price,
            self.diagnostics.as_ref(),
            &NANO_LOCAL_EVENTS,
        )
        .await;
    }
}

fn ticker_url(base: &str, currency: Currency, limit: u32) -> String {
    format!("{}?convert={}&limit={}", base, currency.code(), limit)
}
