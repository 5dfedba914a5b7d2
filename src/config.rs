use chrono::FixedOffset;

/// Application-level constants
pub const APP_NAME: &str = "Diadash";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info,diadash=debug"
}

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the history API listens on.
    pub bind_addr: String,
    /// Base URL of the hospital record services gateway.
    pub upstream_base_url: String,
    pub request_timeout_secs: u64,
    /// Display offset for day grouping, in whole hours east of UTC.
    /// Defaults to +7 (WIB); the hospital's wall clock.
    pub display_offset_hours: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8310".into(),
            upstream_base_url: "http://localhost:8300".into(),
            request_timeout_secs: 10,
            display_offset_hours: 7,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("DIADASH_BIND").unwrap_or(defaults.bind_addr),
            upstream_base_url: std::env::var("DIADASH_UPSTREAM_URL")
                .unwrap_or(defaults.upstream_base_url),
            request_timeout_secs: std::env::var("DIADASH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            display_offset_hours: std::env::var("DIADASH_UTC_OFFSET_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.display_offset_hours),
        }
    }

    pub fn display_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.display_offset_hours * 3600)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"))
    }
}
