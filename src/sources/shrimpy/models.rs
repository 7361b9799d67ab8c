use std::collections::BTreeMap;

use serde::Deserialize;

use crate::shared::error::CollectError;
use crate::shared::sink::MetricPoint;
use crate::shared::traits::FieldMapper;

#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeAccount {
    pub id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalance {
    pub balances: Vec<AssetBalance>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    pub symbol: String,
    pub usd_value: f64,
}

/// All asset balances across every managed account for one cycle.
#[derive(Debug, Clone)]
pub struct PortfolioSnapshot {
    pub balances: Vec<AssetBalance>,
}

pub struct BalanceMapper;

impl FieldMapper<PortfolioSnapshot> for BalanceMapper {
    fn map(&self, raw: &PortfolioSnapshot) -> Result<Vec<MetricPoint>, CollectError> {
        let mut per_symbol: BTreeMap<String, f64> = BTreeMap::new();
        let mut total = 0.0;
        for balance in &raw.balances {
            *per_symbol
                .entry(format!("kraken_{}_usdValue", balance.symbol))
                .or_insert(0.0) += balance.usd_value;
            total += balance.usd_value;
        }

        let mut point = MetricPoint::new("crypto_balance");
        for (key, value) in per_symbol {
            point = point.field(key, value);
        }
        point = point.field("usd", total);
        Ok(vec![point])
    }
}
