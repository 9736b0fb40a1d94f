use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Local,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Local => write!(f, "local"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which response header carries the store's total page count.
///
/// Development and local stores expose the lowercase `x-wp-totalpages`;
/// every other deployment uses `X-WP-TotalPages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCountHeader {
    Legacy,
    Standard,
}

impl PageCountHeader {
    /// Header name as configured for this deployment.
    #[must_use]
    pub fn header_name(self) -> &'static str {
        match self {
            PageCountHeader::Legacy => "x-wp-totalpages",
            PageCountHeader::Standard => "X-WP-TotalPages",
        }
    }

    /// Default header variant for an environment.
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development | Environment::Local => PageCountHeader::Legacy,
            Environment::Test | Environment::Production => PageCountHeader::Standard,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub store_url: String,
    pub store_key: String,
    pub store_secret: String,
    pub store_api_version: String,
    pub page_count_header: PageCountHeader,
    pub storage_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub feed_schedule: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("store_url", &self.store_url)
            .field("store_key", &"[redacted]")
            .field("store_secret", &"[redacted]")
            .field("store_api_version", &self.store_api_version)
            .field("page_count_header", &self.page_count_header)
            .field("storage_dir", &self.storage_dir)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("feed_schedule", &self.feed_schedule)
            .finish()
    }
}
