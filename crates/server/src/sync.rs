//! Orchestration between the local repository and the remote store.
//!
//! Reads pull the remote set and overwrite the local view; every successful
//! mutation recomputes the complete set for the affected application and
//! republishes it. When the republish fails the mutation is reported as
//! failed even though the local write stuck — the local store keeps serving
//! the console and the divergence is surfaced through the returned error.

use std::sync::Arc;

use flowgate_common::entity::RuleEntity;

use crate::error::RuleError;
use crate::remote::{DynamicRuleProvider, DynamicRulePublisher};
use crate::repository::RuleRepository;

pub struct RuleService<T: RuleEntity> {
    repo: Arc<dyn RuleRepository<T>>,
    provider: Arc<dyn DynamicRuleProvider<T>>,
    publisher: Arc<dyn DynamicRulePublisher<T>>,
}

impl<T: RuleEntity> Clone for RuleService<T> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            provider: Arc::clone(&self.provider),
            publisher: Arc::clone(&self.publisher),
        }
    }
}

impl<T: RuleEntity> RuleService<T> {
    pub fn new(
        repo: Arc<dyn RuleRepository<T>>,
        provider: Arc<dyn DynamicRuleProvider<T>>,
        publisher: Arc<dyn DynamicRulePublisher<T>>,
    ) -> Self {
        Self {
            repo,
            provider,
            publisher,
        }
    }

    /// Fetches the remote set, stamps the owning app on every entity (remote
    /// data may lack it or be stale) and overwrites the local view. Local
    /// ids are reassigned on every call; the remote record is the source of
    /// truth here, not local identity.
    pub async fn query_rules(&self, app: &str) -> Result<Vec<T>, RuleError> {
        let mut rules = self.provider.get_rules(app).await?;
        if !rules.is_empty() {
            for rule in &mut rules {
                rule.set_app(app);
            }
        }
        Ok(self.repo.save_all(rules)?)
    }

    /// Persists a new rule (any caller-supplied id or timestamps are
    /// discarded) and republishes the full set for its app.
    pub async fn create(&self, mut entity: T) -> Result<T, RuleError> {
        entity.set_id(None);
        entity.set_gmt_create(None);
        entity.set_gmt_modified(None);
        let entity = self.repo.save(entity)?;
        self.publish_app(entity.app()).await?;
        Ok(entity)
    }

    /// Replaces the rule stored under `id`. The owning app and creation
    /// timestamp always come from the stored entity; an update cannot move
    /// a rule to a different app.
    pub async fn update(&self, id: i64, mut entity: T) -> Result<T, RuleError> {
        let old = self.repo.find_by_id(id)?.ok_or(RuleError::NotFound(id))?;
        entity.set_id(Some(id));
        entity.set_app(old.app());
        entity.set_gmt_create(old.gmt_create());
        let entity = self.repo.save(entity)?;
        self.publish_app(entity.app()).await?;
        Ok(entity)
    }

    /// Deletes by id and republishes the remaining set. An absent id is a
    /// success with no remote side effect.
    pub async fn delete(&self, id: i64) -> Result<Option<i64>, RuleError> {
        let Some(old) = self.repo.find_by_id(id)? else {
            return Ok(None);
        };
        self.repo.delete(id)?;
        self.publish_app(old.app()).await?;
        Ok(Some(id))
    }

    /// Full-set republish: always the complete current set for the app,
    /// never a delta.
    async fn publish_app(&self, app: &str) -> Result<(), RuleError> {
        let rules = self.repo.find_all_by_app(app)?;
        self.publisher.publish(app, Some(rules)).await?;
        Ok(())
    }
}
