use async_trait::async_trait;

use crate::shared::config::require_env;
use crate::shared::error::{CollectError, ConfigError};
use crate::shared::http::get_json;
use crate::shared::traits::SourceAdapter;
use crate::sources::weather_forecast::models::DailyForecast;

const WEATHER_URL: &str = "https://api.weather.com";

/// Polls the weather.com 5-day daily forecast for one geocode.
pub struct WeatherForecastAdapter {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    geocode: String,
}

impl WeatherForecastAdapter {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        geocode: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            geocode: geocode.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(
            WEATHER_URL,
            require_env("WEATHER_API_KEY")?,
            require_env("HOME_LATLONG")?,
        ))
    }
}

#[async_trait]
impl SourceAdapter for WeatherForecastAdapter {
    type Raw = DailyForecast;

    fn name(&self) -> &str {
        "weather_forecast"
    }

    async fn fetch(&mut self) -> Result<DailyForecast, CollectError> {
        let url = format!(
            "{}/v3/wx/forecast/daily/5day?geocode={}&units=e&language=en-US&format=json&apiKey={}",
            self.base_url, self.geocode, self.api_key
        );
        get_json(&self.http, &url).await
    }
}
