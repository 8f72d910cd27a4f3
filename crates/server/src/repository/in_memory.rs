use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use flowgate_common::entity::RuleEntity;

use super::{RepositoryError, RuleRepository};

/// DashMap-backed repository with a monotonic id sequence per instance.
pub struct InMemoryRuleRepository<T> {
    rules: Arc<DashMap<i64, T>>,
    seq: Arc<AtomicI64>,
}

impl<T> Clone for InMemoryRuleRepository<T> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
            seq: Arc::clone(&self.seq),
        }
    }
}

impl<T> Default for InMemoryRuleRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryRuleRepository<T> {
    pub fn new() -> Self {
        Self {
            rules: Arc::new(DashMap::new()),
            seq: Arc::new(AtomicI64::new(0)),
        }
    }

    fn next_id(&self) -> i64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}

fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

impl<T: RuleEntity> RuleRepository<T> for InMemoryRuleRepository<T> {
    fn save(&self, mut entity: T) -> Result<T, RepositoryError> {
        let app = entity.app().trim().to_string();
        entity.set_app(&app);

        let now = now_ms();
        match entity.id() {
            None => {
                entity.set_id(Some(self.next_id()));
                entity.set_gmt_create(Some(now));
            }
            Some(id) => {
                // gmt_create is fixed at first save; prefer the stored value.
                let created = self
                    .rules
                    .get(&id)
                    .and_then(|old| old.gmt_create())
                    .or(entity.gmt_create())
                    .unwrap_or(now);
                entity.set_gmt_create(Some(created));
            }
        }
        entity.set_gmt_modified(Some(now));

        let id = entity.id().ok_or_else(|| RepositoryError("missing id after assignment".into()))?;
        self.rules.insert(id, entity.clone());
        Ok(entity)
    }

    fn save_all(&self, entities: Vec<T>) -> Result<Vec<T>, RepositoryError> {
        entities.into_iter().map(|e| self.save(e)).collect()
    }

    fn find_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError> {
        Ok(self.rules.get(&id).map(|r| r.clone()))
    }

    fn find_all_by_app(&self, app: &str) -> Result<Vec<T>, RepositoryError> {
        Ok(self
            .rules
            .iter()
            .filter(|r| r.value().app() == app)
            .map(|r| r.value().clone())
            .collect())
    }

    fn delete(&self, id: i64) -> Result<Option<T>, RepositoryError> {
        Ok(self.rules.remove(&id).map(|(_, v)| v))
    }
}
