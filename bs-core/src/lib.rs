//! BookStack Core - Foundation types, error handling, configuration, and logging.
//!
//! This crate provides the shared foundation used by the other BookStack crates:
//! - Client configuration (site URL, API token, rate limit, TLS settings)
//! - A single error type covering encoding, transport, API and decode failures
//! - Structured logging with tracing
//! - Platform directory lookup and common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod platform;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, ServerConfig};
pub use error::{BsError, BsResult};
pub use logging::init_logging;
pub use platform::Platform;
