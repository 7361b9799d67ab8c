//! Shared HTTP response handling for the REST sources. A non-200 status
//! surfaces the status code and response body as an API error.

use serde::de::DeserializeOwned;

use crate::shared::error::CollectError;

pub async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, CollectError> {
    let status = response.status();
    if !status.is_success() {
        let reason = response.text().await.unwrap_or_default();
        return Err(CollectError::Api {
            status: status.as_u16(),
            reason,
        });
    }

    let body = response.text().await?;
    serde_json::from_str::<T>(&body).map_err(|e| CollectError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
) -> Result<T, CollectError> {
    let response = http.get(url).send().await?;
    decode_json(response).await
}
