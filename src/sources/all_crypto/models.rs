use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::shared::error::CollectError;
use crate::shared::sink::MetricPoint;
use crate::shared::traits::FieldMapper;

/// Assets tradeable on Kraken that we track prices for.
pub const KRAKEN_ASSETS: &[&str] = &[
    "AAVE", "ALGO", "ANT", "REP", "REPV2", "BAT", "BAL", "XBT", "BCH", "ADA", "LINK", "COMP",
    "ATOM", "CRV", "DAI", "DASH", "MANA", "XDG", "EOS", "ETH", "ETC", "FIL", "FLOW", "GNO", "ICX",
    "KAVA", "KEEP", "KSM", "KNC", "LSK", "LTC", "MLN", "XMR", "NANO", "OMG", "OXT", "PAXG", "DOT",
    "QTUM", "XRP", "SC", "XLM", "STORJ", "SNX", "TBTC", "USDT", "XTZ", "GRT", "TRX", "UNI", "USDC",
    "WAVES", "YFI", "ZEC",
];

#[derive(Debug, Clone, Deserialize)]
pub struct CoinListing {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SpotQuote {
    pub usd: f64,
    pub usd_24h_vol: f64,
    pub usd_market_cap: f64,
}

/// One cycle's quotes, keyed by Kraken asset symbol (lowercase).
#[derive(Debug, Clone)]
pub struct SpotPrices {
    pub quotes: BTreeMap<String, SpotQuote>,
}

/// Maps CoinGecko coin ids to Kraken asset symbols. Built once at startup
/// from the full coin list; Kraken's XBT and XDG tickers differ from the
/// symbols CoinGecko uses, so those two are translated.
#[derive(Debug, Clone)]
pub struct SymbolMap {
    kraken_by_id: HashMap<String, String>,
}

impl SymbolMap {
    pub fn build(listings: &[CoinListing]) -> Self {
        let mut kraken_by_id = HashMap::new();
        for asset in KRAKEN_ASSETS {
            let kraken_symbol = asset.to_lowercase();
            let gecko_symbol = match kraken_symbol.as_str() {
                "xbt" => "btc",
                "xdg" => "doge",
                other => other,
            };
            if let Some(listing) = listings.iter().find(|l| l.symbol == gecko_symbol) {
                kraken_by_id.insert(listing.id.clone(), kraken_symbol);
            }
        }
        Self { kraken_by_id }
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.kraken_by_id.keys().map(String::as_str)
    }

    pub fn kraken_symbol(&self, id: &str) -> Option<&str> {
        self.kraken_by_id.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.kraken_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kraken_by_id.is_empty()
    }
}

pub struct AllCryptoMapper;

impl FieldMapper<SpotPrices> for AllCryptoMapper {
    fn map(&self, raw: &SpotPrices) -> Result<Vec<MetricPoint>, CollectError> {
        if raw.quotes.is_empty() {
            return Err(CollectError::MissingField("no quotes in response".to_string()));
        }

        let mut point = MetricPoint::new("allcrypto");
        for (symbol, quote) in &raw.quotes {
            point = point
                .field(format!("{}.usd", symbol), quote.usd)
                .field(format!("{}.usd_24h_vol", symbol), quote.usd_24h_vol)
                .field(format!("{}.usd_market_cap", symbol), quote.usd_market_cap);
        }
        Ok(vec![point])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sink::FieldValue;

    fn listing(id: &str, symbol: &str, name: &str) -> CoinListing {
        CoinListing {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn symbol_map_translates_kraken_tickers() {
        let listings = vec![
            listing("bitcoin", "btc", "Bitcoin"),
            listing("dogecoin", "doge", "Dogecoin"),
            listing("ethereum", "eth", "Ethereum"),
        ];
        let map = SymbolMap::build(&listings);

        assert_eq!(map.kraken_symbol("bitcoin"), Some("xbt"));
        assert_eq!(map.kraken_symbol("dogecoin"), Some("xdg"));
        assert_eq!(map.kraken_symbol("ethereum"), Some("eth"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn symbol_map_skips_unlisted_assets() {
        let listings = vec![listing("ethereum", "eth", "Ethereum")];
        let map = SymbolMap::build(&listings);

        assert_eq!(map.len(), 1);
        assert_eq!(map.kraken_symbol("bitcoin"), None);
    }

    #[test]
    fn mapper_emits_three_fields_per_asset() {
        let mut quotes = BTreeMap::new();
        quotes.insert(
            "xbt".to_string(),
            SpotQuote {
                usd: 64000.5,
                usd_24h_vol: 1.2e10,
                usd_market_cap: 1.3e12,
            },
        );
        let points = AllCryptoMapper.map(&SpotPrices { quotes }).unwrap();

        assert_eq!(points.len(), 1);
        let point = &points[0];
        assert_eq!(point.measurement(), "allcrypto");
        assert_eq!(
            point.fields().get("xbt.usd"),
            Some(&FieldValue::Float(64000.5))
        );
        assert_eq!(
            point.fields().get("xbt.usd_24h_vol"),
            Some(&FieldValue::Float(1.2e10))
        );
        assert_eq!(
            point.fields().get("xbt.usd_market_cap"),
            Some(&FieldValue::Float(1.3e12))
        );
    }

    #[test]
    fn mapper_rejects_empty_quotes() {
        let raw = SpotPrices {
            quotes: BTreeMap::new(),
        };
        assert!(matches!(
            AllCryptoMapper.map(&raw),
            Err(CollectError::MissingField(_))
        ));
    }
}
