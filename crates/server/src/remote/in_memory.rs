use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use super::{ConfigClient, ConfigError};

/// Config-store double backed by a map keyed on (group, data id).
///
/// Used for tests and for running the console without an external store.
#[derive(Clone, Default)]
pub struct InMemoryConfigClient {
    entries: Arc<DashMap<(String, String), String>>,
}

impl InMemoryConfigClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw record content, bypassing the client trait. Test hook.
    pub fn content(&self, data_id: &str, group: &str) -> Option<String> {
        self.entries
            .get(&(group.to_string(), data_id.to_string()))
            .map(|v| v.clone())
    }
}

#[async_trait]
impl ConfigClient for InMemoryConfigClient {
    async fn get_config(
        &self,
        data_id: &str,
        group: &str,
        _timeout_ms: u64,
    ) -> Result<Option<String>, ConfigError> {
        Ok(self.content(data_id, group))
    }

    async fn publish_config(
        &self,
        data_id: &str,
        group: &str,
        content: &str,
    ) -> Result<(), ConfigError> {
        self.entries
            .insert((group.to_string(), data_id.to_string()), content.to_string());
        Ok(())
    }
}
