//! Polls the weather.com daily forecast, writes narratives to Influx.

use homepulse::shared::config::poll_interval;
use homepulse::{shutdown_on_ctrl_c, ForecastMapper, InfluxConfig, InfluxSink, Poller, WeatherForecastAdapter};
use log::error;

#[tokio::main]
async fn main() {
    env_logger::init();

    let sink = match InfluxConfig::from_env() {
        Ok(config) => InfluxSink::new(&config),
        Err(e) => {
            error!("invalid sink configuration: {}", e);
            std::process::exit(1);
        }
    };
    let adapter = match WeatherForecastAdapter::from_env() {
        Ok(adapter) => adapter,
        Err(e) => {
            error!("invalid forecast configuration: {}", e);
            std::process::exit(1);
        }
    };
    let interval = match poll_interval(600) {
        Ok(interval) => interval,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    Poller::new(adapter, ForecastMapper, sink, interval)
        .run(shutdown_on_ctrl_c())
        .await;
}
