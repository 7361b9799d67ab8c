use std::collections::HashMap;

use serde::Deserialize;

use crate::shared::error::CollectError;
use crate::shared::sink::MetricPoint;
use crate::shared::traits::FieldMapper;

pub const TRACKED_PAIRS: &[&str] = &["USDT_BTC", "USDT_ETH", "USDT_XMR"];

#[derive(Debug, Clone, Deserialize)]
pub struct TickerEntry {
    pub last: String,
}

/// The full `returnTicker` response, keyed by currency pair.
pub type TickerResponse = HashMap<String, TickerEntry>;

pub struct TickerMapper;

impl FieldMapper<TickerResponse> for TickerMapper {
    fn map(&self, raw: &TickerResponse) -> Result<Vec<MetricPoint>, CollectError> {
        let mut point = MetricPoint::new("cryptocurrency");
        for pair in TRACKED_PAIRS {
            let entry = raw
                .get(*pair)
                .ok_or_else(|| CollectError::MissingField(pair.to_string()))?;
            let last = entry
                .last
                .parse::<f64>()
                .map_err(|e| CollectError::Decode(format!("{} last price: {}", pair, e)))?;
            point = point.field(*pair, last);
        }
        Ok(vec![point])
    }
}
