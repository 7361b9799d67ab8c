use async_trait::async_trait;
use futures::stream;
use influxdb2::models::DataPoint;
use influxdb2::Client;

use crate::shared::config::require_env;
use crate::shared::error::{ConfigError, SinkError};
use crate::shared::sink::point::{FieldValue, MetricPoint};
use crate::shared::traits::MetricSink;

#[derive(Debug, Clone)]
pub struct InfluxConfig {
    pub url: String,
    pub org: String,
    pub token: String,
    pub bucket: String,
}

impl InfluxConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = require_env("INFLUX_HOSTNAME")?;
        let url = if host.starts_with("http://") || host.starts_with("https://") {
            host
        } else {
            format!("http://{}:8086", host)
        };

        Ok(Self {
            url,
            org: require_env("INFLUX_ORG")?,
            token: require_env("INFLUX_TOKEN")?,
            bucket: require_env("INFLUX_BUCKET")?,
        })
    }
}

pub struct InfluxSink {
    client: Client,
    bucket: String,
}

impl InfluxSink {
    pub fn new(config: &InfluxConfig) -> Self {
        Self {
            client: Client::new(&config.url, &config.org, &config.token),
            bucket: config.bucket.clone(),
        }
    }
}

fn to_data_point(point: &MetricPoint) -> Result<DataPoint, SinkError> {
    let mut builder = DataPoint::builder(point.measurement());
    for (key, value) in point.fields() {
        builder = match value {
            FieldValue::Float(f) => builder.field(key.as_str(), *f),
            FieldValue::Text(s) => builder.field(key.as_str(), s.as_str()),
        };
    }
    builder.build().map_err(|e| SinkError::Point(e.to_string()))
}

#[async_trait]
impl MetricSink for InfluxSink {
    async fn write(&self, points: &[MetricPoint]) -> Result<(), SinkError> {
        let mut data = Vec::with_capacity(points.len());
        for point in points {
            data.push(to_data_point(point)?);
        }

        self.client
            .write(&self.bucket, stream::iter(data))
            .await
            .map_err(|e| SinkError::Write(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_float_and_text_fields() {
        let point = MetricPoint::new("weather")
            .field("temperature", 68.4)
            .field("narrative", "Clear overnight");

        assert!(to_data_point(&point).is_ok());
    }

    #[test]
    fn rejects_point_without_fields() {
        let point = MetricPoint::new("fiber");
        assert!(matches!(to_data_point(&point), Err(SinkError::Point(_))));
    }
}
