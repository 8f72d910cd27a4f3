//! Local system-of-record for rule entities, keyed by id per application.

mod in_memory;

pub use in_memory::InMemoryRuleRepository;

use flowgate_common::entity::RuleEntity;

/// Opaque storage failure. The caller reports it and does not retry.
#[derive(Debug)]
pub struct RepositoryError(pub String);

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "repository: {}", self.0)
    }
}

impl std::error::Error for RepositoryError {}

/// Keyed store of rule entities for one rule kind.
///
/// The repository owns identity and timestamps: `save` assigns an id when
/// absent, fixes `gmt_create` at first save, and refreshes `gmt_modified`
/// on every save. The application name is trimmed before persistence.
pub trait RuleRepository<T: RuleEntity>: Send + Sync {
    fn save(&self, entity: T) -> Result<T, RepositoryError>;

    /// Bulk variant used when reconciling a freshly fetched remote set.
    /// Each entity goes through the same id/timestamp assignment as `save`.
    fn save_all(&self, entities: Vec<T>) -> Result<Vec<T>, RepositoryError>;

    fn find_by_id(&self, id: i64) -> Result<Option<T>, RepositoryError>;

    fn find_all_by_app(&self, app: &str) -> Result<Vec<T>, RepositoryError>;

    /// Removes if present. Deleting an absent id is not an error.
    fn delete(&self, id: i64) -> Result<Option<T>, RepositoryError>;
}
