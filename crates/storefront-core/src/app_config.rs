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
    /// CSV export of the catalog spreadsheet.
    pub sheet_url: String,
    pub refresh_interval_secs: u64,
    pub fetch_timeout_secs: u64,
    pub fetch_max_retries: u32,
    pub fetch_backoff_base_secs: u64,
    pub user_agent: String,
    /// Messaging deep-link base, e.g. `https://wa.me/<number>`.
    pub contact_base_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Contact number stays out of logs.
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("sheet_url", &self.sheet_url)
            .field("refresh_interval_secs", &self.refresh_interval_secs)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("fetch_max_retries", &self.fetch_max_retries)
            .field("fetch_backoff_base_secs", &self.fetch_backoff_base_secs)
            .field("user_agent", &self.user_agent)
            .field("contact_base_url", &"[redacted]")
            .finish()
    }
}
