//! Forwards matching camera snapshot events from the MQTT broker to
//! Pushover. Event-driven, not a polling loop.

use homepulse::{shutdown_on_ctrl_c, CameraAlertBridge, MqttConfig, PushoverClient, TopicFilter};
use log::error;

#[tokio::main]
async fn main() {
    env_logger::init();

    let notifier = match PushoverClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!("invalid Pushover configuration: {}", e);
            std::process::exit(1);
        }
    };
    let config = match MqttConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid broker configuration: {}", e);
            std::process::exit(1);
        }
    };

    CameraAlertBridge::new(TopicFilter::default_locations(), notifier)
        .run(&config, shutdown_on_ctrl_c())
        .await;
}
