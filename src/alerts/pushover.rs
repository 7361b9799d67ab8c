use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::shared::config::require_env;
use crate::shared::error::{AlertError, ConfigError};

const PUSHOVER_URL: &str = "https://api.pushover.net/1/messages.json";

/// Delivers one alert to a push-notification service, optionally with a
/// binary attachment. No delivery confirmation is tracked.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str, attachment: &[u8]) -> Result<(), AlertError>;
}

pub struct PushoverClient {
    http: reqwest::Client,
    endpoint: String,
    app_token: String,
    user_key: String,
}

impl PushoverClient {
    pub fn new(app_token: impl Into<String>, user_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: PUSHOVER_URL.to_string(),
            app_token: app_token.into(),
            user_key: user_key.into(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(
            require_env("PUSHOVER_APP_TOKEN")?,
            require_env("PUSHOVER_CLIENT_ID")?,
        ))
    }
}

#[async_trait]
impl Notifier for PushoverClient {
    async fn notify(&self, message: &str, attachment: &[u8]) -> Result<(), AlertError> {
        let mut form = Form::new()
            .text("token", self.app_token.clone())
            .text("user", self.user_key.clone())
            .text("message", message.to_string());

        if !attachment.is_empty() {
            let part = Part::bytes(attachment.to_vec())
                .file_name("snapshot.jpg")
                .mime_str("image/jpeg")
                .map_err(|e| AlertError::Push(e.to_string()))?;
            form = form.part("attachment", part);
        }

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AlertError::Push(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AlertError::Push(format!("{}: {}", status, body)));
        }
        Ok(())
    }
}
