use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use log::info;

use crate::shared::error::CollectError;
use crate::shared::http::get_json;
use crate::shared::traits::SourceAdapter;
use crate::sources::all_crypto::models::{CoinListing, SpotPrices, SpotQuote, SymbolMap};

const COINGECKO_URL: &str = "https://api.coingecko.com";

/// Polls CoinGecko for USD spot prices of the Kraken asset list.
/// The coin list is fetched once at startup to build the symbol map;
/// after that each cycle is a single `simple/price` call.
pub struct AllCryptoAdapter {
    http: reqwest::Client,
    base_url: String,
    symbols: SymbolMap,
}

impl AllCryptoAdapter {
    pub async fn connect(base_url: impl Into<String>) -> Result<Self, CollectError> {
        let http = reqwest::Client::new();
        let base_url = base_url.into();

        let listings: Vec<CoinListing> =
            get_json(&http, &format!("{}/api/v3/coins/list", base_url)).await?;
        let symbols = SymbolMap::build(&listings);
        if symbols.is_empty() {
            return Err(CollectError::MissingField(
                "coin list matched no tracked assets".to_string(),
            ));
        }
        info!("tracking {} assets", symbols.len());

        Ok(Self {
            http,
            base_url,
            symbols,
        })
    }

    pub async fn from_env() -> Result<Self, CollectError> {
        Self::connect(COINGECKO_URL).await
    }
}

#[async_trait]
impl SourceAdapter for AllCryptoAdapter {
    type Raw = SpotPrices;

    fn name(&self) -> &str {
        "all_crypto"
    }

    async fn fetch(&mut self) -> Result<SpotPrices, CollectError> {
        let ids: Vec<&str> = self.symbols.ids().collect();
        let url = format!(
            "{}/api/v3/simple/price?ids={}&vs_currencies=usd&include_market_cap=true&include_24hr_vol=true",
            self.base_url,
            ids.join(",")
        );
        let prices: HashMap<String, SpotQuote> = get_json(&self.http, &url).await?;

        let mut quotes = BTreeMap::new();
        for (id, quote) in prices {
            if let Some(symbol) = self.symbols.kraken_symbol(&id) {
                quotes.insert(symbol.to_string(), quote);
            }
        }
        Ok(SpotPrices { quotes })
    }
}
