use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use flowgate_common::keys;

use super::{ConfigClient, ConfigError};

/// Bounded wait for a remote fetch.
pub const FETCH_TIMEOUT_MS: u64 = 3000;

/// Reads the current rule set for an application from the remote store.
#[async_trait]
pub trait DynamicRuleProvider<T>: Send + Sync {
    async fn get_rules(&self, app: &str) -> Result<Vec<T>, ConfigError>;
}

/// Config-store-backed provider for one rule kind, selected by data-id suffix.
pub struct ConfigRuleProvider<T> {
    client: Arc<dyn ConfigClient>,
    data_id_suffix: &'static str,
    _kind: PhantomData<fn() -> T>,
}

impl<T> ConfigRuleProvider<T> {
    pub fn new(client: Arc<dyn ConfigClient>, data_id_suffix: &'static str) -> Self {
        Self {
            client,
            data_id_suffix,
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<T: DeserializeOwned + Send + Sync + 'static> DynamicRuleProvider<T> for ConfigRuleProvider<T> {
    async fn get_rules(&self, app: &str) -> Result<Vec<T>, ConfigError> {
        let data_id = keys::data_id(app, self.data_id_suffix);
        let raw = self
            .client
            .get_config(&data_id, keys::GROUP_ID, FETCH_TIMEOUT_MS)
            .await?;
        tracing::debug!(%data_id, group = keys::GROUP_ID, found = raw.is_some(), "fetched rules");

        match raw {
            None => Ok(Vec::new()),
            Some(content) if content.trim().is_empty() => Ok(Vec::new()),
            Some(content) => {
                serde_json::from_str(&content).map_err(|e| ConfigError::Deserialize(e.to_string()))
            }
        }
    }
}
