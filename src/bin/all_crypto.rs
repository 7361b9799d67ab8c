//! Polls CoinGecko spot prices for the Kraken asset list, writes to Influx.

use homepulse::shared::config::poll_interval;
use homepulse::{shutdown_on_ctrl_c, AllCryptoAdapter, AllCryptoMapper, InfluxConfig, InfluxSink, Poller};
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
    let adapter = match AllCryptoAdapter::from_env().await {
        Ok(adapter) => adapter,
        Err(e) => {
            error!("failed to initialize CoinGecko adapter: {}", e);
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

    Poller::new(adapter, AllCryptoMapper, sink, interval)
        .run(shutdown_on_ctrl_c())
        .await;
}
