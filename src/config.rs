use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use crate::error::{OradevError, Result};

pub const CONFIG_FILE: &str = "oradev.toml";

/// Settings for reaching the database, loaded once at startup.
///
/// Values come from `oradev.toml` in the working directory; environment
/// variables override the file so credentials can stay out of it entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OradevConfig {
    /// Database account name
    pub username: Option<String>,

    /// Database account password
    pub password: Option<String>,

    /// Net service name resolved through tnsnames.ora (takes precedence over connect_string)
    pub tns_alias: Option<String>,

    /// Easy-connect string, e.g. "dbhost:1521/ORCLPDB1"
    pub connect_string: Option<String>,

    /// Directory holding the Oracle Client libraries
    pub client_lib_dir: Option<PathBuf>,

    /// Directory holding tnsnames.ora / sqlnet.ora
    pub tns_admin: Option<PathBuf>,
}

/// Fully resolved connection credentials, ready to hand to the driver.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub connect_target: String,
}

impl OradevConfig {
    /// Load configuration from oradev.toml in the current directory
    pub fn load_from_file() -> Result<Option<Self>> {
        let config_path = PathBuf::from(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&config_path).map_err(|e| OradevError::ConfigLoad {
            path: config_path.clone(),
            message: e.to_string(),
        })?;
        let config: OradevConfig =
            toml::from_str(&content).map_err(|e| OradevError::ConfigLoad {
                path: config_path,
                message: e.to_string(),
            })?;

        Ok(Some(config))
    }

    /// Load the file config (if any) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let base = Self::load_from_file()?.unwrap_or_default();
        Ok(base.with_overrides(|name| std::env::var(name).ok()))
    }

    /// Apply overrides from a variable lookup. Environment values take
    /// precedence over file values; empty strings are treated as unset.
    pub fn with_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            username: get("DB_USER").or(self.username),
            password: get("DB_PASSWORD").or(self.password),
            tns_alias: get("DB_TNS_ALIAS").or(self.tns_alias),
            connect_string: get("DB_DSN").or(self.connect_string),
            client_lib_dir: get("ORACLE_LIB_DIR").map(PathBuf::from).or(self.client_lib_dir),
            tns_admin: get("TNS_ADMIN").map(PathBuf::from).or(self.tns_admin),
        }
    }

    /// Resolve the credentials needed to open a connection.
    ///
    /// The TNS alias wins over the connect string when both are present.
    pub fn credentials(&self) -> Result<Credentials> {
        let username = self
            .username
            .clone()
            .ok_or(OradevError::MissingSetting("username"))?;
        let password = self
            .password
            .clone()
            .ok_or(OradevError::MissingSetting("password"))?;
        let connect_target = self
            .tns_alias
            .clone()
            .or_else(|| self.connect_string.clone())
            .ok_or(OradevError::MissingSetting("tns_alias or connect_string"))?;

        Ok(Credentials {
            username,
            password,
            connect_target,
        })
    }

    /// Create a sample configuration file
    pub fn write_sample_config() -> Result<PathBuf> {
        let sample_config = OradevConfig {
            username: Some("scott".to_string()),
            password: Some("tiger".to_string()),
            tns_alias: Some("ORCLDEV".to_string()),
            connect_string: Some("localhost:1521/ORCLPDB1".to_string()),
            client_lib_dir: None,
            tns_admin: None,
        };

        let content = toml::to_string_pretty(&sample_config)
            .map_err(|e| OradevError::Internal(e.to_string()))?;
        let path = PathBuf::from("oradev.toml.example");
        fs::write(&path, content).map_err(|e| OradevError::FileWrite {
            path: path.clone(),
            message: e.to_string(),
            source: e,
        })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| map.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_config_roundtrip() {
        let config = OradevConfig {
            username: Some("scott".to_string()),
            password: Some("tiger".to_string()),
            tns_alias: Some("DEVDB".to_string()),
            connect_string: Some("host:1521/svc".to_string()),
            client_lib_dir: Some(PathBuf::from("/opt/instantclient")),
            tns_admin: Some(PathBuf::from("/etc/oracle")),
        };

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: OradevConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.username, parsed.username);
        assert_eq!(config.password, parsed.password);
        assert_eq!(config.tns_alias, parsed.tns_alias);
        assert_eq!(config.connect_string, parsed.connect_string);
        assert_eq!(config.client_lib_dir, parsed.client_lib_dir);
        assert_eq!(config.tns_admin, parsed.tns_admin);
    }

    #[test]
    fn test_env_overrides_file_values() {
        let file_config = OradevConfig {
            username: Some("file_user".to_string()),
            password: Some("file_pass".to_string()),
            tns_alias: Some("FILEDB".to_string()),
            ..Default::default()
        };

        let mut env = HashMap::new();
        env.insert("DB_USER", "env_user");
        env.insert("DB_DSN", "envhost:1521/env");

        let merged = file_config.with_overrides(lookup(&env));

        assert_eq!(merged.username, Some("env_user".to_string()));
        assert_eq!(merged.password, Some("file_pass".to_string()));
        assert_eq!(merged.tns_alias, Some("FILEDB".to_string()));
        assert_eq!(merged.connect_string, Some("envhost:1521/env".to_string()));
    }

    #[test]
    fn test_empty_env_value_is_ignored() {
        let file_config = OradevConfig {
            username: Some("file_user".to_string()),
            ..Default::default()
        };

        let mut env = HashMap::new();
        env.insert("DB_USER", "");

        let merged = file_config.with_overrides(lookup(&env));
        assert_eq!(merged.username, Some("file_user".to_string()));
    }

    #[test]
    fn test_credentials_prefers_tns_alias() {
        let config = OradevConfig {
            username: Some("scott".to_string()),
            password: Some("tiger".to_string()),
            tns_alias: Some("DEVDB".to_string()),
            connect_string: Some("host:1521/svc".to_string()),
            ..Default::default()
        };

        let creds = config.credentials().unwrap();
        assert_eq!(creds.connect_target, "DEVDB");
    }

    #[test]
    fn test_credentials_falls_back_to_connect_string() {
        let config = OradevConfig {
            username: Some("scott".to_string()),
            password: Some("tiger".to_string()),
            connect_string: Some("host:1521/svc".to_string()),
            ..Default::default()
        };

        let creds = config.credentials().unwrap();
        assert_eq!(creds.connect_target, "host:1521/svc");
    }

    #[test]
    fn test_credentials_missing_user_fails() {
        let config = OradevConfig {
            password: Some("tiger".to_string()),
            tns_alias: Some("DEVDB".to_string()),
            ..Default::default()
        };

        let err = config.credentials().unwrap_err();
        assert!(matches!(err, OradevError::MissingSetting("username")));
    }

    #[test]
    fn test_credentials_missing_target_fails() {
        let config = OradevConfig {
            username: Some("scott".to_string()),
            password: Some("tiger".to_string()),
            ..Default::default()
        };

        assert!(config.credentials().is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp_dir.path()).unwrap();

        let result = OradevConfig::load_from_file().unwrap();
        assert!(result.is_none());

        let _ = std::env::set_current_dir(original_dir);
    }

    #[test]
    fn test_write_sample_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp_dir.path()).unwrap();

        let path = OradevConfig::write_sample_config().unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("username"));
        assert!(content.contains("tns_alias"));
        assert!(content.contains("connect_string"));

        let _ = std::env::set_current_dir(original_dir);
    }
}
