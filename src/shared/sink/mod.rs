pub mod influx;
pub mod point;

pub use influx::{InfluxConfig, InfluxSink};
pub use point::{FieldValue, MetricPoint};
