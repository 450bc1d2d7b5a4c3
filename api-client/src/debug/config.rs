//! Logging configuration from environment variables

use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "api_client=info,warn";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log level filter (e.g., "api_client=debug,info")
    pub log_level: String,
    /// Directory for the daily-rotated log file; stderr only when `None`
    pub log_dir: Option<PathBuf>,
    /// ANSI colors on the stderr layer
    pub ansi: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
            ansi: true,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: std::env::var("API_CLIENT_LOG_DIR").ok().map(PathBuf::from),
            ansi: std::env::var("API_CLIENT_LOG_ANSI")
                .map(|v| v != "0")
                .unwrap_or(true),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stderr_only() {
        let config = DebugConfig::default();
        assert_eq!(config.log_level, "api_client=info,warn");
        assert!(config.log_dir.is_none());
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_debug_detection() {
        let config = DebugConfig {
            log_level: "api_client=trace".to_string(),
            ..DebugConfig::default()
        };
        assert!(config.is_debug_enabled());
    }
}
