/// Base URLs of the external quote services.
///
/// `Default` points at the production services; tests substitute a local
/// mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub trade_pair_url: String, // Mercatox 24h pair summary, takes no parameters
    pub ticker_url: String, // CoinMarketCap ticker list, takes convert= and limit= parameters
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            trade_pair_url: "https://mercatox.com/public/json24".to_string(),
            ticker_url: "https://api.coinmarketcap.com/v1/ticker/".to_string(),
        }
    }
}
