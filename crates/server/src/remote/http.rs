use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use super::{ConfigClient, ConfigError};

/// Client for a config store exposing the usual HTTP config API
/// (`GET`/`POST /v1/cs/configs` addressed by `dataId` and `group`).
pub struct HttpConfigClient {
    base_url: String,
    http: reqwest::Client,
}

impl HttpConfigClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn configs_url(&self) -> String {
        format!("{}/v1/cs/configs", self.base_url)
    }
}

fn map_transport(e: reqwest::Error) -> ConfigError {
    if e.is_timeout() {
        ConfigError::Timeout
    } else {
        ConfigError::Transport(e.to_string())
    }
}

#[async_trait]
impl ConfigClient for HttpConfigClient {
    async fn get_config(
        &self,
        data_id: &str,
        group: &str,
        timeout_ms: u64,
    ) -> Result<Option<String>, ConfigError> {
        let resp = self
            .http
            .get(self.configs_url())
            .query(&[("dataId", data_id), ("group", group)])
            .timeout(Duration::from_millis(timeout_ms))
            .send()
            .await
            .map_err(map_transport)?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(ConfigError::Rejected(resp.status().as_u16()));
        }
        let body = resp.text().await.map_err(map_transport)?;
        Ok(Some(body))
    }

    async fn publish_config(
        &self,
        data_id: &str,
        group: &str,
        content: &str,
    ) -> Result<(), ConfigError> {
        let resp = self
            .http
            .post(self.configs_url())
            .form(&[("dataId", data_id), ("group", group), ("content", content)])
            .send()
            .await
            .map_err(map_transport)?;

        if !resp.status().is_success() {
            return Err(ConfigError::Rejected(resp.status().as_u16()));
        }
        Ok(())
    }
}
