//! Application configuration
//!
//! The configuration is a fixed, in-memory value. It is built once by the
//! entry point and handed to whatever needs it; nothing reads it from a
//! global.

use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "Golang Hub";
pub const APP_VERSION: &str = "1.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Application settings record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub app_name: String,
    pub version: String,
    pub port: u16,
}

impl Config {
    /// Returns the application configuration. Always succeeds.
    pub fn load() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load()
    }
}
