pub mod collector;
pub mod models;

pub use collector::WeatherForecastAdapter;
pub use models::{DailyForecast, ForecastMapper};
