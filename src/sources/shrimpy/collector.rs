use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use sha2::Sha256;

use crate::shared::config::require_env;
use crate::shared::error::{CollectError, ConfigError};
use crate::shared::http::decode_json;
use crate::shared::traits::SourceAdapter;
use crate::sources::shrimpy::models::{AccountBalance, ExchangeAccount, PortfolioSnapshot};

type HmacSha256 = Hmac<Sha256>;

const SHRIMPY_URL: &str = "https://api.shrimpy.io";

/// Polls Shrimpy for the balances of every managed account. The signature
/// is HMAC-SHA256 over `endpoint + method + nonce` keyed with the
/// base64-decoded API secret, itself base64-encoded into the header.
pub struct ShrimpyAdapter {
    http: reqwest::Client,
    base_url: String,
    key: String,
    secret: Vec<u8>,
}

impl ShrimpyAdapter {
    pub fn new(base_url: impl Into<String>, key: String, secret: Vec<u8>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            key,
            secret,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let key = require_env("SHRIMPY_API_KEY")?;
        let encoded = require_env("SHRIMPY_API_SECRET")?;
        let secret = BASE64
            .decode(encoded.as_bytes())
            .map_err(|e| ConfigError::Invalid {
                var: "SHRIMPY_API_SECRET".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(SHRIMPY_URL, key, secret))
    }

    fn sign(&self, endpoint: &str, nonce: &str) -> Result<String, CollectError> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| CollectError::Decode(e.to_string()))?;
        mac.update(format!("{}GET{}", endpoint, nonce).as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }

    async fn signed_get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, CollectError> {
        // Matches the service's expected nonce resolution: unix time x 10000.
        let nonce = (Utc::now().timestamp_millis() * 10).to_string();
        let signature = self.sign(endpoint, &nonce)?;

        let response = self
            .http
            .get(format!("{}{}", self.base_url, endpoint))
            .header("content-type", "application/json")
            .header("SHRIMPY-API-KEY", self.key.as_str())
            .header("SHRIMPY-API-NONCE", nonce.as_str())
            .header("SHRIMPY-API-SIGNATURE", signature)
            .send()
            .await?;
        decode_json(response).await
    }
}

#[async_trait]
impl SourceAdapter for ShrimpyAdapter {
    type Raw = PortfolioSnapshot;

    fn name(&self) -> &str {
        "shrimpy"
    }

    async fn fetch(&mut self) -> Result<PortfolioSnapshot, CollectError> {
        let accounts: Vec<ExchangeAccount> = self.signed_get("/v1/accounts").await?;

        let mut balances = Vec::new();
        for account in &accounts {
            let detail: AccountBalance = self
                .signed_get(&format!("/v1/accounts/{}/balance", account.id))
                .await?;
            balances.extend(detail.balances);
        }
        Ok(PortfolioSnapshot { balances })
    }
}
