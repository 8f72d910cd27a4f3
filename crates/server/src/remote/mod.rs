//! Read/write access to the shared config store the applications poll.

mod client;
mod http;
mod in_memory;
mod provider;
mod publisher;

pub use client::{ConfigClient, ConfigError};
pub use http::HttpConfigClient;
pub use in_memory::InMemoryConfigClient;
pub use provider::{ConfigRuleProvider, DynamicRuleProvider, FETCH_TIMEOUT_MS};
pub use publisher::{ConfigRulePublisher, DynamicRulePublisher};
