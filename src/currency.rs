use serde::{Deserialize, Serialize};
use std::fmt;

/// A local fiat currency prices can be converted into.
///
/// The set mirrors what the CoinMarketCap ticker accepts as a `convert=`
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Aud,
    Brl,
    Cad,
    Chf,
    Clp,
    Cny,
    Czk,
    Dkk,
    Eur,
    Gbp,
    Hkd,
    Huf,
    Idr,
    Ils,
    Inr,
    Jpy,
    Krw,
    Mxn,
    Myr,
    Nok,
    Nzd,
    Php,
    Pkr,
    Pln,
    Rub,
    Sek,
    Sgd,
    Thb,
    Try,
    Twd,
    Usd,
    Zar,
}

impl Currency {
    pub const ALL: [Currency; 32] = [
        Currency::Aud,
        Currency::Brl,
        Currency::Cad,
        Currency::Chf,
        Currency::Clp,
        Currency::Cny,
        Currency::Czk,
        Currency::Dkk,
        Currency::Eur,
        Currency::Gbp,
        Currency::Hkd,
        Currency::Huf,
        Currency::Idr,
        Currency::Ils,
        Currency::Inr,
        Currency::Jpy,
        Currency::Krw,
        Currency::Mxn,
        Currency::Myr,
        Currency::Nok,
        Currency::Nzd,
        Currency::Php,
        Currency::Pkr,
        Currency::Pln,
        Currency::Rub,
        Currency::Sek,
        Currency::Sgd,
        Currency::Thb,
        Currency::Try,
        Currency::Twd,
        Currency::Usd,
        Currency::Zar,
    ];

    /// The request-parameter form, e.g. `"USD"` for `convert=USD`.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Aud => "AUD",
            Currency::Brl => "BRL",
            Currency::Cad => "CAD",
            Currency::Chf => "CHF",
            Currency::Clp => "CLP",
            Currency::Cny => "CNY",
            Currency::Czk => "CZK",
            Currency::Dkk => "DKK",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Hkd => "HKD",
            Currency::Huf => "HUF",
            Currency::Idr => "IDR",
            Currency::Ils => "ILS",
            Currency::Inr => "INR",
            Currency::Jpy => "JPY",
            Currency::Krw => "KRW",
            Currency::Mxn => "MXN",
            Currency::Myr => "MYR",
            Currency::Nok => "NOK",
            Currency::Nzd => "NZD",
            Currency::Php => "PHP",
            Currency::Pkr => "PKR",
            Currency::Pln => "PLN",
            Currency::Rub => "RUB",
            Currency::Sek => "SEK",
            Currency::Sgd => "SGD",
            Currency::Thb => "THB",
            Currency::Try => "TRY",
            Currency::Twd => "TWD",
            Currency::Usd => "USD",
            Currency::Zar => "ZAR",
        }
    }

    /// Name of the field carrying this currency's converted price in a
    /// ticker entry, e.g. `"price_usd"`.
    pub fn price_field(&self) -> String {
        format!("price_{}", self.code().to_lowercase())
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Supplies the selected local currency when the price service is built.
/// Read once at construction; later changes arrive through `update`.
pub trait CurrencySource {
    fn local_currency(&self) -> Currency;
}

/// A `CurrencySource` that always returns the same currency.
pub struct FixedCurrencySource(pub Currency);

impl CurrencySource for FixedCurrencySource {
    fn local_currency(&self) -> Currency {
        self.0
    }
}
