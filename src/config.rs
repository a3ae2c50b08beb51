use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Requests per batch printed by the main binary
    pub request_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { request_count: 3 }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "reqgen.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            enable_tracing: true,
            generator: GeneratorConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
log_level: "debug"
log_dir: "logs"
log_file: "reqgen.log"
use_json: true
rotation: "hourly"
enable_tracing: true

generator:
  request_count: 10
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.use_json);
        assert_eq!(config.rotation, "hourly");
        assert_eq!(config.generator.request_count, 10);
    }

    #[test]
    fn test_missing_generator_section_takes_default() {
        let yaml = r#"
log_level: "info"
log_dir: "logs"
log_file: "reqgen.log"
use_json: false
rotation: "daily"
enable_tracing: false
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.generator.request_count, 3);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load("no_such_env").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
