//! Client-wide constants.

/// Application name, used for config and log directories.
pub const APP_NAME: &str = "bookstack";

/// Client version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Path prefix under which the REST API is mounted.
pub const API_PREFIX: &str = "/api";

/// Default outbound request rate (requests per second).
pub const DEFAULT_RATE_LIMIT: u32 = 180;

/// Default request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Date layout used by the search grammar's date filters.
pub const SEARCH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Content types.
pub mod mime {
    pub const JSON: &str = "application/json";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}
