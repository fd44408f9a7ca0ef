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

/// Runtime settings shared by the upstream clients and the binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Photon endpoint used for both geocoding and keyword search.
    pub photon_url: String,
    pub open_meteo_url: String,
    pub translate_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Additional attempts after a transient upstream failure.
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}
