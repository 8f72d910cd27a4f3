use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use flowgate_common::keys;

use super::{ConfigClient, ConfigError};

/// Writes the complete rule set for an application to the remote store.
///
/// `rules` must already be the full current set for the (app, kind) pair:
/// the remote record is overwritten wholesale, never patched, so a partial
/// set would be observed as the whole truth by concurrent readers.
#[async_trait]
pub trait DynamicRulePublisher<T>: Send + Sync {
    /// `None` is a silent no-op — there is no "clear the remote rules"
    /// operation. An empty set must be passed as `Some(vec![])`.
    async fn publish(&self, app: &str, rules: Option<Vec<T>>) -> Result<(), ConfigError>;
}

pub struct ConfigRulePublisher<T> {
    client: Arc<dyn ConfigClient>,
    data_id_suffix: &'static str,
    _kind: PhantomData<fn() -> T>,
}

impl<T> ConfigRulePublisher<T> {
    pub fn new(client: Arc<dyn ConfigClient>, data_id_suffix: &'static str) -> Self {
        Self {
            client,
            data_id_suffix,
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Serialize + Send + Sync + 'static> DynamicRulePublisher<T> for ConfigRulePublisher<T> {
    async fn publish(&self, app: &str, rules: Option<Vec<T>>) -> Result<(), ConfigError> {
        assert!(!app.trim().is_empty(), "app name cannot be empty");
        let Some(rules) = rules else {
            return Ok(());
        };

        let content =
            serde_json::to_string(&rules).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        let data_id = keys::data_id(app, self.data_id_suffix);
        tracing::debug!(%data_id, group = keys::GROUP_ID, count = rules.len(), "publishing rules");
        self.client
            .publish_config(&data_id, keys::GROUP_ID, &content)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::InMemoryConfigClient;
    use flowgate_common::entity::DegradeRuleEntity;

    fn publisher(client: &InMemoryConfigClient) -> ConfigRulePublisher<DegradeRuleEntity> {
        ConfigRulePublisher::new(Arc::new(client.clone()), keys::DEGRADE_DATA_ID_SUFFIX)
    }

    #[tokio::test]
    async fn none_rules_is_a_no_op() {
        let client = InMemoryConfigClient::new();
        publisher(&client).publish("orderSvc", None).await.unwrap();
        assert!(client.content("orderSvc-degrade-rules", keys::GROUP_ID).is_none());
    }

    #[tokio::test]
    async fn empty_set_overwrites_the_record() {
        let client = InMemoryConfigClient::new();
        let publisher = publisher(&client);
        publisher
            .publish("orderSvc", Some(vec![DegradeRuleEntity::default()]))
            .await
            .unwrap();
        publisher.publish("orderSvc", Some(Vec::new())).await.unwrap();
        assert_eq!(
            client.content("orderSvc-degrade-rules", keys::GROUP_ID).as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    #[should_panic(expected = "app name cannot be empty")]
    async fn empty_app_is_a_contract_violation() {
        let client = InMemoryConfigClient::new();
        let _ = publisher(&client).publish("  ", Some(Vec::new())).await;
    }
}
