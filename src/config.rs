use crate::download::{DEFAULT_TIMEOUT, MAX_DOWNLOAD_SIZE};
use crate::error::{Result, TnccError};
use crate::paths::home::{DEFAULT_PLUGIN_JAR, config_path};
use crate::user_agent;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_LOG_LEVEL: u32 = 100;
const DEFAULT_POST_RETRIES: u32 = 6;
const DEFAULT_TIMEOUT_SECS: u64 = DEFAULT_TIMEOUT.as_secs();
const DEFAULT_MAX_DOWNLOAD_SIZE: u64 = MAX_DOWNLOAD_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TnccConfig {
    /// Explicit Java interpreter; JAVA_HOME and PATH are searched when unset
    #[serde(default)]
    pub java: Option<PathBuf>,

    #[serde(default = "default_plugin_jar")]
    pub plugin_jar: PathBuf,

    #[serde(default)]
    pub host_checker: HostCheckerConfig,

    #[serde(default)]
    pub download: DownloadConfig,
}

/// Parameters handed to the host checker on its command line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostCheckerConfig {
    #[serde(default = "default_log_level")]
    pub log_level: u32,

    #[serde(default = "default_post_retries")]
    pub post_retries: u32,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_max_size")]
    pub max_size: u64,

    /// Gateways commonly present self-signed certificates
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
}

impl Default for TnccConfig {
    fn default() -> Self {
        Self {
            java: None,
            plugin_jar: default_plugin_jar(),
            host_checker: HostCheckerConfig::default(),
            download: DownloadConfig::default(),
        }
    }
}

impl Default for HostCheckerConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            post_retries: DEFAULT_POST_RETRIES,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_size: DEFAULT_MAX_DOWNLOAD_SIZE,
            accept_invalid_certs: default_accept_invalid_certs(),
        }
    }
}

fn default_plugin_jar() -> PathBuf {
    PathBuf::from(DEFAULT_PLUGIN_JAR)
}

fn default_log_level() -> u32 {
    DEFAULT_LOG_LEVEL
}

fn default_post_retries() -> u32 {
    DEFAULT_POST_RETRIES
}

fn default_user_agent() -> String {
    user_agent::HOST_CHECKER.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_size() -> u64 {
    DEFAULT_MAX_DOWNLOAD_SIZE
}

fn default_accept_invalid_certs() -> bool {
    true
}

impl TnccConfig {
    pub fn load(tncc_home: &Path) -> Result<Self> {
        let config_path = config_path(tncc_home);

        if !config_path.exists() {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: TnccConfig = toml::from_str(&contents)
            .map_err(|e| TnccError::ConfigError(format!("Failed to parse config.toml: {e}")))?;

        log::debug!("Loaded config from {config_path:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TnccConfig::default();
        assert_eq!(config.java, None);
        assert_eq!(config.plugin_jar, PathBuf::from(DEFAULT_PLUGIN_JAR));
        assert_eq!(config.host_checker.log_level, 100);
        assert_eq!(config.host_checker.post_retries, 6);
        assert_eq!(config.host_checker.user_agent, user_agent::HOST_CHECKER);
        assert!(config.download.accept_invalid_certs);
        assert_eq!(config.download.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = TnccConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.host_checker.post_retries, DEFAULT_POST_RETRIES);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            config_path(temp_dir.path()),
            r#"java = "/opt/jre/bin/java""#,
        )
        .unwrap();

        let loaded = TnccConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.java, Some(PathBuf::from("/opt/jre/bin/java")));
        assert_eq!(loaded.host_checker.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(loaded.download.max_size, DEFAULT_MAX_DOWNLOAD_SIZE);
    }

    #[test]
    fn test_config_with_sections() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            config_path(temp_dir.path()),
            r#"
plugin_jar = "/usr/lib/icedtea/plugin.jar"

[host_checker]
log_level = 10
post_retries = 2

[download]
timeout_secs = 30
accept_invalid_certs = false
"#,
        )
        .unwrap();

        let loaded = TnccConfig::load(temp_dir.path()).unwrap();
        assert_eq!(
            loaded.plugin_jar,
            PathBuf::from("/usr/lib/icedtea/plugin.jar")
        );
        assert_eq!(loaded.host_checker.log_level, 10);
        assert_eq!(loaded.host_checker.post_retries, 2);
        assert_eq!(loaded.host_checker.user_agent, user_agent::HOST_CHECKER);
        assert_eq!(loaded.download.timeout_secs, 30);
        assert!(!loaded.download.accept_invalid_certs);
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(config_path(temp_dir.path()), "java = [").unwrap();

        let err = TnccConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, TnccError::ConfigError(msg) if msg.contains("config.toml")));
    }
}
