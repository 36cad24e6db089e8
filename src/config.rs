use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::env;
use tracing::warn;

// Import logging macros
use crate::{log_system_event, log_validation};

/// Dashboard views that can serve as the root redirect target.
pub const DASHBOARD_VIEWS: &[&str] = &["tasks", "flashcards", "quizzes", "groups"];

/// Complete application configuration loaded from environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

/// Database connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Dashboard shell configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Sub-view a bare dashboard-root visit is redirected to.
    pub default_view: String,
}

/// Logging system configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_enabled: bool,
    pub log_directory: String,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults
    pub fn from_env() -> Result<Self> {
        log_system_event!(config, "Loading application configuration from environment variables");

        let config = Config {
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            dashboard: DashboardConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        };

        log_system_event!(config, "Configuration loaded successfully");
        config.log_configuration_summary();

        Ok(config)
    }

    /// Log a summary of loaded configuration (without sensitive data)
    fn log_configuration_summary(&self) {
        tracing::info!(
            database_url_masked = %mask_sensitive_data(&self.database.url),
            server_address = %format!("{}:{}", self.server.host, self.server.port),
            default_view = %self.dashboard.default_view,
            log_level = %self.logging.level,
            "Configuration summary"
        );
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate database URL format
        if !self.database.url.contains("sqlite:") && !self.database.url.contains("postgres://") {
            return Err(anyhow!("DATABASE_URL must start with 'sqlite:' or 'postgres://'"));
        }

        // Validate server port range
        if self.server.port == 0 {
            return Err(anyhow!("Server port must be greater than 0"));
        }

        // An empty or path-shaped default view would make the redirect target
        // resolve back to the dashboard root, so refuse it outright.
        if self.dashboard.default_view.is_empty() {
            return Err(anyhow!("DASHBOARD_DEFAULT_VIEW must not be empty"));
        }
        if self.dashboard.default_view.contains('/') {
            return Err(anyhow!(
                "DASHBOARD_DEFAULT_VIEW must be a bare view name, got '{}'",
                self.dashboard.default_view
            ));
        }
        if !DASHBOARD_VIEWS.contains(&self.dashboard.default_view.as_str()) {
            warn!(
                default_view = %self.dashboard.default_view,
                known_views = ?DASHBOARD_VIEWS,
                "DASHBOARD_DEFAULT_VIEW is not a known dashboard view"
            );
        }

        // Validate log level
        if !["trace", "debug", "info", "warn", "error"]
            .contains(&self.logging.level.to_lowercase().as_str())
        {
            warn!("Invalid log level '{}', using 'info' as fallback", self.logging.level);
        }

        log_validation!(success, "configuration", "Configuration validation completed successfully");
        Ok(())
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self> {
        let url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:study_dashboard.db".to_string());

        Ok(DatabaseConfig { url })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        let port = port_str.parse::<u16>().map_err(|_| {
            anyhow!("Invalid PORT value: '{}'. Must be a number between 1-65535", port_str)
        })?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(ServerConfig { port, host })
    }
}

impl DashboardConfig {
    fn from_env() -> Result<Self> {
        let default_view = env::var("DASHBOARD_DEFAULT_VIEW")
            .unwrap_or_else(|_| "tasks".to_string());

        Ok(DashboardConfig { default_view })
    }
}

impl LoggingConfig {
    fn from_env() -> Result<Self> {
        let level = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info,study_dashboard=debug".to_string());

        let file_enabled = env::var("LOG_FILE_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);

        let log_directory = env::var("LOG_DIRECTORY").unwrap_or_else(|_| "logs".to_string());

        Ok(LoggingConfig {
            level,
            file_enabled,
            log_directory,
        })
    }
}

/// Mask sensitive data in configuration for safe logging
fn mask_sensitive_data(data: &str) -> String {
    if data.len() <= 8 {
        "*".repeat(data.len())
    } else {
        format!("{}***{}", &data[..4], &data[data.len() - 4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
            },
            server: ServerConfig {
                port: 3000,
                host: "0.0.0.0".to_string(),
            },
            dashboard: DashboardConfig {
                default_view: "tasks".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_enabled: true,
                log_directory: "logs".to_string(),
            },
        }
    }

    #[test]
    fn test_mask_sensitive_data() {
        assert_eq!(mask_sensitive_data("short"), "*****");
        assert_eq!(mask_sensitive_data("sqlite:study_dashboard.db"), "sqli***d.db");
    }

    #[test]
    fn test_config_validation() {
        assert!(test_config().validate().is_ok());

        let mut invalid = test_config();
        invalid.server.port = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = test_config();
        invalid.database.url = "mysql://localhost".to_string();
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_default_view_loop_prevention() {
        // An empty default view would redirect the root to itself.
        let mut config = test_config();
        config.dashboard.default_view = String::new();
        assert!(config.validate().is_err());

        // A path-shaped value could escape the dashboard subtree.
        let mut config = test_config();
        config.dashboard.default_view = "tasks/../..".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_default_view_is_allowed_with_warning() {
        let mut config = test_config();
        config.dashboard.default_view = "notes".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_port_parsing() {
        unsafe { env::set_var("PORT", "not-a-number"); }
        let result = ServerConfig::from_env();
        assert!(result.is_err());

        unsafe { env::remove_var("PORT"); }
    }

    #[test]
    fn test_dashboard_config_default() {
        unsafe { env::remove_var("DASHBOARD_DEFAULT_VIEW"); }

        let config = DashboardConfig::from_env().unwrap();
        assert_eq!(config.default_view, "tasks");
    }
}
