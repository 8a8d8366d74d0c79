// Configuration module for doxq
// Reads from environment variables with sensible defaults

use std::env;
use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Default database file name (DOXQ_DBNAME)
    pub db_name: String,

    /// Maximum regex pattern length in bytes (DOXQ_PATTERN_MAX_LENGTH)
    pub pattern_max_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_name: "doxygen_sqlite3.db".to_string(),
            pattern_max_length: 10_000,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("DOXQ_DBNAME") {
            if val.is_empty() {
                eprintln!(
                    "doxq: Warning: Empty DOXQ_DBNAME value, using default: {}",
                    config.db_name
                );
            } else {
                config.db_name = val;
            }
        }

        if let Ok(val) = env::var("DOXQ_PATTERN_MAX_LENGTH") {
            if let Ok(parsed) = val.parse() {
                config.pattern_max_length = parsed;
            } else {
                eprintln!(
                    "doxq: Warning: Invalid DOXQ_PATTERN_MAX_LENGTH value: {}, using default: {}",
                    val, config.pattern_max_length
                );
            }
        }

        config
    }

    /// Get the global configuration instance
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(Config::from_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.db_name, "doxygen_sqlite3.db");
        assert_eq!(config.pattern_max_length, 10_000);
    }
}
