pub mod alerts;
pub mod shared;
pub mod sources;

// Re-export commonly used items from sources
pub use sources::all_crypto::{AllCryptoAdapter, AllCryptoMapper};
pub use sources::bandwidth::{BandwidthAdapter, BandwidthMapper, SnmpSession, WanLink};
pub use sources::crypto_prices::{PoloniexAdapter, TickerMapper};
pub use sources::nicehash::{ApiCredentials, MiningMapper, NiceHashAdapter};
pub use sources::shrimpy::{BalanceMapper, ShrimpyAdapter};
pub use sources::water_level::{EchoSensor, TankMapper, WaterLevelAdapter};
pub use sources::weather_forecast::{ForecastMapper, WeatherForecastAdapter};
pub use sources::weather_station::{StationMapper, WeatherStationAdapter};

// Re-export shared functionality
pub use shared::error::{AlertError, CollectError, ConfigError, PollError, SinkError};
pub use shared::poller::{shutdown_on_ctrl_c, Poller};
pub use shared::sink::{FieldValue, InfluxConfig, InfluxSink, MetricPoint};
pub use shared::traits::{FieldMapper, MetricSink, SourceAdapter};

pub use alerts::{CameraAlertBridge, MqttConfig, Notifier, PushoverClient, TopicFilter};
