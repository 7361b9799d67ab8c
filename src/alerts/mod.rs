pub mod bridge;
pub mod filter;
pub mod pushover;

pub use bridge::{CameraAlertBridge, MqttConfig};
pub use filter::{CameraEvent, TopicFilter};
pub use pushover::{Notifier, PushoverClient};
