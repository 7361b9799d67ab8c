use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollError {
    #[error("Collection failed: {0}")]
    Collect(#[from] CollectError),

    #[error("Sink write failed: {0}")]
    Sink(#[from] SinkError),
}

#[derive(Error, Debug)]
pub enum CollectError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{status}: {reason}")]
    Api { status: u16, reason: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Missing field in response: {0}")]
    MissingField(String),

    #[error("SNMP read failed: {0}")]
    Snmp(String),

    #[error("Sensor read failed: {0}")]
    Sensor(String),
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Invalid point: {0}")]
    Point(String),

    #[error("Write operation failed: {0}")]
    Write(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

#[derive(Error, Debug)]
pub enum AlertError {
    #[error("Broker error: {0}")]
    Broker(String),

    #[error("Push delivery failed: {0}")]
    Push(String),
}
