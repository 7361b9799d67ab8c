pub mod collector;
pub mod models;

pub use collector::{BandwidthAdapter, SnmpSession, WanLink};
pub use models::{BandwidthMapper, LinkCounters};
