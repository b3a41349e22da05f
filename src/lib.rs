//! Live price state for a Nano wallet.
//!
//! [`PriceService`] keeps four observable values fresh on demand: the
//! selected local currency, the last XRB/BTC trade price, and BTC's and
//! Nano's prices in that local currency. Fetches are fire-and-forget tasks
//! against external quote services; failures are reported to a
//! [`DiagnosticsSink`] and published as the `0.0` sentinel, never as errors
//! to the caller.

mod config;
mod currency;
mod diagnostics;
mod observable;
mod quote;
mod service;

pub use config::Endpoints;
pub use currency::{Currency, CurrencySource, FixedCurrencySource};
pub use diagnostics::{DiagnosticsSink, NoopDiagnosticsSink, TracingDiagnosticsSink};
pub use observable::Observed;
pub use quote::error::{DecodeError, QuoteError};
pub use service::PriceService;
