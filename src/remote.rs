use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::AUTH_HEADER;
use crate::error::{CatalogError, Result};
use crate::models::{ActionRequest, ActionResponse};

/// Posts `{action, params}` to the single remote endpoint and returns the
/// decoded `result` field.
#[derive(Clone, Debug)]
pub struct RemoteInvoker {
    http: Client,
    base_url: String,
}

impl RemoteInvoker {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn invoke<P, T>(&self, action: &str, params: &P, credential: &str) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let body = ActionRequest { action, params };
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "invoking {} with params {}",
                action,
                serde_json::to_string(params).unwrap_or_default()
            );
        }

        let response = self
            .http
            .post(&self.base_url)
            .header(AUTH_HEADER, credential)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} failed with status {}", action, status);
            return Err(CatalogError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        decode_result(&bytes)
    }
}

/// Decodes `{"result": ...}`; a malformed body or a missing `result` is a
/// parse error.
pub fn decode_result<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let envelope: ActionResponse<T> = serde_json::from_slice(bytes)?;
    Ok(envelope.result)
}
