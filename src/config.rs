//! Server configuration.
//!
//! Priority: environment variables > config file > defaults.
//!
//! Environment variables:
//! - `FOLIO_PORT`: Port to listen on (default: 8080)
//! - `FOLIO_DATA_DIR`: Directory holding `content.json`
//!   (default: ~/.local/share/folio-server)
//! - `FOLIO_CONFIG`: Path to config file
//!   (default: ~/.config/folio-server/config.yaml)
//! - `FOLIO_ADMIN_USERNAME` / `FOLIO_ADMIN_PASSWORD`: admin credentials
//!
//! Config file format:
//!
//! ```yaml
//! admin_username: "admin"
//! admin_password: "admin123"
//! session_ttl_days: 7
//! ```

use serde::Deserialize;
use std::path::PathBuf;

/// Admin credentials checked by the login endpoint.
///
/// A single fixed username/password pair. This mirrors the credential
/// model of the original site and is a placeholder, not real
/// authentication - see DESIGN.md.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Optional settings read from the YAML config file.
#[derive(Debug, Clone, Deserialize, Default)]
struct ConfigFile {
    admin_username: Option<String>,
    admin_password: Option<String>,
    session_ttl_days: Option<u64>,
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Directory holding the content document.
    pub data_dir: PathBuf,
    /// Admin login credentials.
    pub admin: AdminCredentials,
    /// Session cookie lifetime in days.
    pub session_ttl_days: u64,
}

impl Config {
    /// Loads configuration from the environment and the config file.
    ///
    /// `config_path` overrides the `FOLIO_CONFIG` env var; when neither
    /// is set the default path is used. A missing config file is fine
    /// (defaults apply); a present but unreadable or invalid one is an
    /// error.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let port = std::env::var("FOLIO_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let data_dir = std::env::var("FOLIO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("folio-server")
            });

        let path = config_path
            .or_else(|| std::env::var("FOLIO_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(Self::default_config_path);

        let mut file = ConfigFile::default();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::Read(path.clone(), e))?;
            file = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::Parse(path.clone(), e))?;
        }

        let mut admin = AdminCredentials {
            username: file.admin_username.unwrap_or_else(|| "admin".to_string()),
            password: file.admin_password.unwrap_or_else(|| "admin123".to_string()),
        };

        // Env vars win over the file.
        if let Ok(username) = std::env::var("FOLIO_ADMIN_USERNAME") {
            admin.username = username;
        }
        if let Ok(password) = std::env::var("FOLIO_ADMIN_PASSWORD") {
            admin.password = password;
        }

        Ok(Self {
            port,
            data_dir,
            admin,
            session_ttl_days: file.session_ttl_days.unwrap_or(7),
        })
    }

    /// Path of the content document inside the data directory.
    pub fn content_path(&self) -> PathBuf {
        self.data_dir.join("content.json")
    }

    /// Default config file path: ~/.config/folio-server/config.yaml
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio-server")
            .join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read(PathBuf, std::io::Error),
    Parse(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::Parse(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_no_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();

        assert_eq!(config.admin.password, "admin123");
        assert_eq!(config.session_ttl_days, 7);
        assert!(config
            .content_path()
            .to_string_lossy()
            .ends_with("content.json"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "admin_password: hunter2").unwrap();
        writeln!(file, "session_ttl_days: 1").unwrap();

        let config = Config::load(Some(config_path)).unwrap();

        assert_eq!(config.admin.password, "hunter2");
        assert_eq!(config.session_ttl_days, 1);
    }

    #[test]
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "admin_username: fromfile").unwrap();

        std::env::set_var("FOLIO_ADMIN_USERNAME", "fromenv");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.admin.username, "fromenv");

        std::env::remove_var("FOLIO_ADMIN_USERNAME");
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(Some(config_path));

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
