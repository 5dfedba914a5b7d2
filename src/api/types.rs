//! Shared state for the history API.

use std::sync::Arc;

use chrono::FixedOffset;

use crate::config::AppConfig;
use crate::sources::SourceClient;

/// Shared context for all API routes.
#[derive(Clone)]
pub struct ApiContext {
    pub client: Arc<SourceClient>,
    /// Fixed display offset used for day keys, range endpoints and lab
    /// session buckets (see `config::AppConfig::display_offset`).
    pub display_offset: FixedOffset,
}

impl ApiContext {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Arc::new(SourceClient::new(
                &config.upstream_base_url,
                config.request_timeout_secs,
            )),
            display_offset: config.display_offset(),
        }
    }
}
