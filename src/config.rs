//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and defaults that reproduce the classic movie store behavior.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// API behavior configuration
    pub api: ApiConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// API behavior configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// How handlers treat unknown ids and malformed bodies
    pub mode: ApiMode,
    /// Whether the store starts with the two seed movies
    pub seed: bool,
}

/// How handlers react to unknown ids and malformed request bodies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiMode {
    /// Unknown ids answer 200 with an empty body, malformed bodies decode
    /// to an empty movie, generated ids are not checked for collisions
    #[default]
    Compat,
    /// Unknown ids answer 404, malformed bodies answer 400, generated ids
    /// are redrawn until unused
    Strict,
}

impl ApiMode {
    /// Whether this is the strict mode
    pub fn is_strict(self) -> bool {
        self == ApiMode::Strict
    }
}

impl FromStr for ApiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compat" => Ok(ApiMode::Compat),
            "strict" => Ok(ApiMode::Strict),
            other => Err(format!("unknown API mode: {}", other)),
        }
    }
}

impl fmt::Display for ApiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiMode::Compat => write!(f, "compat"),
            ApiMode::Strict => write!(f, "strict"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8000,
                host: "0.0.0.0".to_string(),
            },
            api: ApiConfig {
                mode: ApiMode::Compat,
                seed: true,
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
                host: env::var("HOST").unwrap_or(defaults.server.host),
            },
            api: ApiConfig {
                mode: env::var("MOVIES_MODE")
                    .ok()
                    .and_then(|m| m.parse().ok())
                    .unwrap_or(defaults.api.mode),
                seed: env::var("MOVIES_SEED")
                    .ok()
                    .and_then(|s| parse_bool(&s))
                    .unwrap_or(defaults.api.seed),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
