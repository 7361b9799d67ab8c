use serde::Deserialize;

use crate::shared::error::CollectError;
use crate::shared::sink::MetricPoint;
use crate::shared::traits::FieldMapper;

#[derive(Debug, Clone, Deserialize)]
pub struct AccountsResponse {
    pub currencies: Vec<WalletAccount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    pub currency: String,
    pub total_balance: String,
    pub available: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RigsResponse {
    pub total_devices: u32,
    pub total_profitability: f64,
}

/// Everything one cycle needs, derived from three remote calls.
#[derive(Debug, Clone, Copy)]
pub struct MiningSnapshot {
    pub active_devices: u32,
    pub profitability_btc_24h: f64,
    pub usd_rate: f64,
    pub wallet_balance_btc: f64,
}

pub struct MiningMapper;

impl FieldMapper<MiningSnapshot> for MiningMapper {
    fn map(&self, raw: &MiningSnapshot) -> Result<Vec<MetricPoint>, CollectError> {
        let per_month = raw.profitability_btc_24h * raw.usd_rate * 30.0;
        let point = MetricPoint::new("nicehash")
            .field("active_devices", f64::from(raw.active_devices))
            .field("per_month_profitability", per_month)
            .field("nicehash_wallet_balance", raw.wallet_balance_btc)
            .field(
                "nicehash_wallet_balance_usd",
                raw.wallet_balance_btc * raw.usd_rate,
            );
        Ok(vec![point])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sink::FieldValue;

    #[test]
    fn derives_profitability_and_usd_balance() {
        let snapshot = MiningSnapshot {
            active_devices: 3,
            profitability_btc_24h: 0.0002,
            usd_rate: 50000.0,
            wallet_balance_btc: 0.05,
        };
        let points = MiningMapper.map(&snapshot).unwrap();

        assert_eq!(points.len(), 1);
        let point = &points[0];
        assert_eq!(point.measurement(), "nicehash");
        assert_eq!(
            point.fields().get("active_devices"),
            Some(&FieldValue::Float(3.0))
        );
        // 0.0002 BTC/day * 50000 USD/BTC * 30 days
        assert_eq!(
            point.fields().get("per_month_profitability"),
            Some(&FieldValue::Float(300.0))
        );
        assert_eq!(
            point.fields().get("nicehash_wallet_balance"),
            Some(&FieldValue::Float(0.05))
        );
        assert_eq!(
            point.fields().get("nicehash_wallet_balance_usd"),
            Some(&FieldValue::Float(2500.0))
        );
    }
}
