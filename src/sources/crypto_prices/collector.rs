use async_trait::async_trait;

use crate::shared::error::CollectError;
use crate::shared::http::get_json;
use crate::shared::traits::SourceAdapter;
use crate::sources::crypto_prices::models::TickerResponse;

const POLONIEX_URL: &str = "https://poloniex.com";

/// Polls the Poloniex public ticker. One call per cycle returns every
/// pair; the tracked pairs are picked out by the mapper.
pub struct PoloniexAdapter {
    http: reqwest::Client,
    base_url: String,
}

impl PoloniexAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(POLONIEX_URL)
    }
}

#[async_trait]
impl SourceAdapter for PoloniexAdapter {
    type Raw = TickerResponse;

    fn name(&self) -> &str {
        "crypto_prices"
    }

    async fn fetch(&mut self) -> Result<TickerResponse, CollectError> {
        let url = format!("{}/public?command=returnTicker", self.base_url);
        get_json(&self.http, &url).await
    }
}
