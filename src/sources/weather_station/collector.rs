use async_trait::async_trait;

use crate::shared::config::require_env;
use crate::shared::error::{CollectError, ConfigError};
use crate::shared::traits::SourceAdapter;
use crate::sources::weather_station::models::StationReadings;

/// Scrapes the AmbientWeather station's live-data page on the LAN.
pub struct WeatherStationAdapter {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherStationAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let ip = require_env("WEATHER_STATION_IP")?;
        Ok(Self::new(format!("http://{}", ip)))
    }
}

#[async_trait]
impl SourceAdapter for WeatherStationAdapter {
    type Raw = StationReadings;

    fn name(&self) -> &str {
        "weather_station"
    }

    async fn fetch(&mut self) -> Result<StationReadings, CollectError> {
        let url = format!("{}/livedata.htm", self.base_url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(CollectError::Api {
                status: status.as_u16(),
                reason,
            });
        }
        let body = response.text().await?;
        StationReadings::parse(&body)
    }
}
