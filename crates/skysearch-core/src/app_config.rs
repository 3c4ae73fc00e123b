use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub ai_base_url: String,
    pub ai_api_key: Option<String>,
    pub ai_timeout_secs: u64,
    pub ai_max_attempts: u32,
    pub geo_timeout_secs: u64,
    pub geo_cache_secs: u64,
    pub airport_radius_km: f64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("ai_base_url", &self.ai_base_url)
            .field(
                "ai_api_key",
                &self.ai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("ai_timeout_secs", &self.ai_timeout_secs)
            .field("ai_max_attempts", &self.ai_max_attempts)
            .field("geo_timeout_secs", &self.geo_timeout_secs)
            .field("geo_cache_secs", &self.geo_cache_secs)
            .field("airport_radius_km", &self.airport_radius_km)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
