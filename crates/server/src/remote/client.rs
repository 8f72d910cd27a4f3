use async_trait::async_trait;

/// Key/namespace-addressed config store, opaque beyond get/set.
#[async_trait]
pub trait ConfigClient: Send + Sync {
    /// Fetches the record content, bounded by `timeout_ms`. Absent records
    /// yield `Ok(None)`.
    async fn get_config(
        &self,
        data_id: &str,
        group: &str,
        timeout_ms: u64,
    ) -> Result<Option<String>, ConfigError>;

    /// Overwrites the record wholesale.
    async fn publish_config(
        &self,
        data_id: &str,
        group: &str,
        content: &str,
    ) -> Result<(), ConfigError>;
}

#[derive(Debug)]
pub enum ConfigError {
    Transport(String),
    Timeout,
    Rejected(u16),
    Serialize(String),
    Deserialize(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::Timeout => write!(f, "config store timed out"),
            Self::Rejected(code) => write!(f, "rejected with status {code}"),
            Self::Serialize(e) => write!(f, "serialize: {e}"),
            Self::Deserialize(e) => write!(f, "deserialize: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
