//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::pagination::MAX_PAGE_LIMIT;

fn default_max_page_limit() -> usize {
    MAX_PAGE_LIMIT
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Upper bound applied to the `limit` parameter of list endpoints.
    #[serde(default = "default_max_page_limit")]
    pub max_page_limit: usize,
}
