use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub rest_addr: SocketAddr,
    /// Base URL of the external config store. `None` selects the in-memory
    /// client (standalone mode, nothing leaves the process).
    pub config_store_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            rest_addr: "0.0.0.0:8080".parse().unwrap(),
            config_store_url: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(addr) = std::env::var("FLOWGATE_REST_ADDR") {
            if let Ok(addr) = addr.parse() {
                cfg.rest_addr = addr;
            }
        }
        if let Ok(url) = std::env::var("FLOWGATE_CONFIG_URL") {
            if !url.trim().is_empty() {
                cfg.config_store_url = Some(url);
            }
        }
        cfg
    }
}
