//! Scrapes the AmbientWeather station page, writes conditions to Influx.

use homepulse::shared::config::poll_interval;
use homepulse::{shutdown_on_ctrl_c, InfluxConfig, InfluxSink, Poller, StationMapper, WeatherStationAdapter};
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
    let adapter = match WeatherStationAdapter::from_env() {
        Ok(adapter) => adapter,
        Err(e) => {
            error!("invalid station configuration: {}", e);
            std::process::exit(1);
        }
    };
    let interval = match poll_interval(60) {
        Ok(interval) => interval,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    Poller::new(adapter, StationMapper, sink, interval)
        .run(shutdown_on_ctrl_c())
        .await;
}
