//! Failure taxonomy for the synchronization core.
//!
//! Every failure is terminal for the current request: nothing retries and
//! nothing rolls back. The only silent no-ops are the explicitly specified
//! ones (publishing `None`, deleting an absent id, an empty remote fetch).

use crate::remote::ConfigError;
use crate::repository::RepositoryError;
use crate::validator::ValidationError;

#[derive(Debug)]
pub enum RuleError {
    Validation(ValidationError),
    NotFound(i64),
    Repository(RepositoryError),
    Remote(ConfigError),
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{e}"),
            Self::NotFound(id) => write!(f, "id {id} does not exist"),
            Self::Repository(e) => write!(f, "{e}"),
            Self::Remote(e) => write!(f, "config store: {e}"),
        }
    }
}

impl std::error::Error for RuleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::NotFound(_) => None,
            Self::Repository(e) => Some(e),
            Self::Remote(e) => Some(e),
        }
    }
}

impl From<ValidationError> for RuleError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<RepositoryError> for RuleError {
    fn from(e: RepositoryError) -> Self {
        Self::Repository(e)
    }
}

impl From<ConfigError> for RuleError {
    fn from(e: ConfigError) -> Self {
        Self::Remote(e)
    }
}
