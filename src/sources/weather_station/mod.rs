pub mod collector;
pub mod models;

pub use collector::WeatherStationAdapter;
pub use models::{StationMapper, StationReadings};
