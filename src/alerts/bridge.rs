use std::time::Duration;

use log::{info, warn};
use rumqttc::{AsyncClient, Event, MqttOptions, Packet, QoS};
use tokio::sync::watch;
use uuid::Uuid;

use crate::alerts::filter::TopicFilter;
use crate::alerts::pushover::Notifier;
use crate::shared::config::{env_or, require_env};
use crate::shared::error::{AlertError, ConfigError};

#[derive(Debug, Clone)]
pub struct MqttConfig {
    pub broker: String,
    pub port: u16,
    pub client_id: String,
}

impl MqttConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let broker = require_env("MQTT_BROKER")?;
        let port = env_or("MQTT_PORT", "1883")
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                var: "MQTT_PORT".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            broker,
            port,
            client_id: format!("homepulse-{}", Uuid::new_v4()),
        })
    }
}

/// Event-driven filter-and-forward: subscribe to the topic wildcard,
/// dispatch one push alert per matching message with the payload as the
/// attachment. Two states only: awaiting a message, dispatching an alert.
pub struct CameraAlertBridge<N> {
    filter: TopicFilter,
    notifier: N,
}

impl<N: Notifier> CameraAlertBridge<N> {
    pub fn new(filter: TopicFilter, notifier: N) -> Self {
        Self { filter, notifier }
    }

    /// Returns true if the message produced an alert.
    pub async fn handle_publish(&self, topic: &str, payload: &[u8]) -> Result<bool, AlertError> {
        match self.filter.evaluate(topic) {
            None => Ok(false),
            Some(event) => {
                let message = event.message();
                self.notifier.notify(&message, payload).await?;
                info!("{}", message);
                Ok(true)
            }
        }
    }

    pub async fn run(&self, config: &MqttConfig, mut shutdown: watch::Receiver<bool>) {
        let mut options =
            MqttOptions::new(config.client_id.clone(), config.broker.clone(), config.port);
        options.set_keep_alive(Duration::from_secs(30));
        let (client, mut eventloop) = AsyncClient::new(options, 16);

        loop {
            tokio::select! {
                event = eventloop.poll() => match event {
                    Ok(Event::Incoming(Packet::ConnAck(_))) => {
                        info!("connected to MQTT broker at {}:{}", config.broker, config.port);
                        if let Err(e) = client.subscribe("#", QoS::AtMostOnce).await {
                            warn!("camera_alerts: subscribe failed: {}", e);
                        }
                    }
                    Ok(Event::Incoming(Packet::Publish(publish))) => {
                        if let Err(e) = self.handle_publish(&publish.topic, &publish.payload).await {
                            warn!("camera_alerts: alert dispatch failed: {}", e);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!("camera_alerts: broker connection error, retrying: {}", e);
                        tokio::time::sleep(Duration::from_secs(5)).await;
                    }
                },
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("camera_alerts: shutting down");
                        break;
                    }
                }
            }
        }
    }
}
