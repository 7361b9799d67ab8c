use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::shared::config::require_env;
use crate::shared::error::{CollectError, ConfigError};
use crate::shared::http::{decode_json, get_json};
use crate::shared::traits::SourceAdapter;
use crate::sources::nicehash::models::{
    AccountsResponse, MiningSnapshot, RigsResponse,
};
use crate::sources::nicehash::signing::{auth_digest, ApiCredentials};

const NICEHASH_URL: &str = "https://api2.nicehash.com";
const ACCOUNTS_PATH: &str = "/main/api/v2/accounting/accounts2/";
const PRICES_PATH: &str = "/exchange/api/v2/info/prices";

/// Polls NiceHash mining statistics: the signed accounts endpoint for the
/// BTC wallet, the public exchange rate, and the public rigs endpoint for
/// device count and 24h profitability.
pub struct NiceHashAdapter {
    http: reqwest::Client,
    base_url: String,
    creds: ApiCredentials,
    mining_address: String,
}

impl NiceHashAdapter {
    pub fn new(
        base_url: impl Into<String>,
        creds: ApiCredentials,
        mining_address: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            creds,
            mining_address: mining_address.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let creds = ApiCredentials {
            key: require_env("NICEHASH_APIKEY")?,
            secret: require_env("NICEHASH_APISECRET")?,
            org_id: require_env("NICEHASH_ORG")?,
        };
        let mining_address = require_env("NICEHASH_MINING_ADDRESS")?;
        Ok(Self::new(NICEHASH_URL, creds, mining_address))
    }

    async fn signed_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CollectError> {
        let time_ms = Utc::now().timestamp_millis();
        let nonce = Uuid::new_v4().to_string();
        let digest = auth_digest(&self.creds, "GET", path, "", time_ms, &nonce)?;

        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header("X-Time", time_ms.to_string())
            .header("X-Nonce", nonce.as_str())
            .header("X-Auth", format!("{}:{}", self.creds.key, digest))
            .header("X-Organization-Id", self.creds.org_id.as_str())
            .header("X-Request-Id", Uuid::new_v4().to_string())
            .header("Content-Type", "application/json")
            .send()
            .await?;
        decode_json(response).await
    }
}

#[async_trait]
impl SourceAdapter for NiceHashAdapter {
    type Raw = MiningSnapshot;

    fn name(&self) -> &str {
        "nicehash"
    }

    async fn fetch(&mut self) -> Result<MiningSnapshot, CollectError> {
        let accounts: AccountsResponse = self.signed_get(ACCOUNTS_PATH).await?;
        let wallet = accounts
            .currencies
            .first()
            .ok_or_else(|| CollectError::MissingField("currencies".to_string()))?;
        let wallet_balance_btc = wallet
            .total_balance
            .parse::<f64>()
            .map_err(|e| CollectError::Decode(format!("totalBalance: {}", e)))?;

        let prices: HashMap<String, f64> =
            get_json(&self.http, &format!("{}{}", self.base_url, PRICES_PATH)).await?;
        let usd_rate = *prices
            .get("BTCUSDC")
            .ok_or_else(|| CollectError::MissingField("BTCUSDC".to_string()))?;

        let rigs: RigsResponse = get_json(
            &self.http,
            &format!(
                "{}/main/api/v2/mining/external/{}/rigs2",
                self.base_url, self.mining_address
            ),
        )
        .await?;

        Ok(MiningSnapshot {
            active_devices: rigs.total_devices,
            profitability_btc_24h: rigs.total_profitability,
            usd_rate,
            wallet_balance_btc,
        })
    }
}
