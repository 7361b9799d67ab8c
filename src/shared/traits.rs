use async_trait::async_trait;

use crate::shared::error::{CollectError, SinkError};
use crate::shared::sink::MetricPoint;

/// Source-specific fetch. One implementation per external data source;
/// the raw response is decoded into a typed struct at this boundary.
#[async_trait]
pub trait SourceAdapter {
    type Raw: Send;

    fn name(&self) -> &str;

    async fn fetch(&mut self) -> Result<Self::Raw, CollectError>;
}

/// Pure transformation from a raw source response to metric points.
/// No shared state, no side effects.
pub trait FieldMapper<Raw>: Send {
    fn map(&self, raw: &Raw) -> Result<Vec<MetricPoint>, CollectError>;
}

/// Write side of the metrics database. One write call carries exactly
/// one poll cycle's points.
#[async_trait]
pub trait MetricSink: Send + Sync {
    async fn write(&self, points: &[MetricPoint]) -> Result<(), SinkError>;
}
