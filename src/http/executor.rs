use serde::de::DeserializeOwned;

use crate::error::ApiError;
use super::client::ApiClient;

/// `GET path` and decode a JSON body. Non-2xx responses become
/// `ApiError::Status` carrying the body text.
pub async fn get_json<T: DeserializeOwned>(client: &ApiClient, path: &str) -> Result<T, ApiError> {
    let response = client.get(path).send().await?;

    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        tracing::warn!(%status, path, "api request failed");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}
