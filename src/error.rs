use std::path::PathBuf;
use thiserror::Error;

/// Main error type for oradev
#[derive(Error, Debug)]
pub enum OradevError {
    // Configuration Errors
    #[error("Missing required setting: {0} (set it in oradev.toml or the environment)")]
    MissingSetting(&'static str),

    #[error("Failed to load configuration from {path}: {message}")]
    ConfigLoad {
        path: PathBuf,
        message: String,
    },

    // Database Connection Errors
    #[error("Failed to connect to database as {user}: {message}")]
    Connection {
        user: String,
        message: String,
        #[source]
        source: oracle::Error,
    },

    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: oracle::Error,
    },

    // File System Errors
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read {path}: {message}")]
    FileRead {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {message}")]
    FileWrite {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    // Source Content Errors
    #[error("File {0} contains no executable statements")]
    EmptySource(PathBuf),

    // General Errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for OradevError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => OradevError::FileNotFound(PathBuf::from("unknown")),
            _ => OradevError::Other(err.to_string()),
        }
    }
}

impl From<oracle::Error> for OradevError {
    fn from(err: oracle::Error) -> Self {
        OradevError::Database {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Result type alias for oradev operations
pub type Result<T> = std::result::Result<T, OradevError>;

/// Helper function to format an error with all its causes
pub fn format_error_chain(err: &OradevError) -> String {
    use std::error::Error;

    let mut output = format!("Error: {}", err);

    let mut current_err: &dyn Error = err;
    while let Some(source) = current_err.source() {
        output.push_str(&format!("\n  Caused by: {}", source));
        current_err = source;
    }

    output
}

/// Helper function to suggest fixes for common errors
pub fn suggest_fix(err: &OradevError) -> Option<String> {
    match err {
        OradevError::Connection { message, .. } => {
            if message.contains("DPI-1047") {
                Some(
                    "Oracle Client libraries could not be loaded.\n\
                     - Install Oracle Instant Client\n\
                     - Set client_lib_dir in oradev.toml (or ORACLE_LIB_DIR) to its directory\n\
                     - Ensure the directory is on the library search path".to_string()
                )
            } else if message.contains("ORA-12154") || message.contains("ORA-12541") {
                Some(
                    "The connect target could not be resolved.\n\
                     - Check tns_alias against your tnsnames.ora\n\
                     - Set tns_admin in oradev.toml (or TNS_ADMIN) to the directory holding it\n\
                     - Or use connect_string with host:port/service form".to_string()
                )
            } else if message.contains("ORA-01017") {
                Some(
                    "Invalid username or password.\n\
                     - Check the username/password settings in oradev.toml\n\
                     - DB_USER and DB_PASSWORD environment variables override the file".to_string()
                )
            } else {
                Some(
                    "Suggestions:\n\
                     - Check that the database is reachable\n\
                     - Verify tns_alias or connect_string is correct\n\
                     - Try: sqlplus <user>@<target> to test the connection".to_string()
                )
            }
        }
        OradevError::MissingSetting(name) => Some(format!(
            "Run `oradev init` to generate a sample oradev.toml, then fill in {}.", name
        )),
        OradevError::FileNotFound(path) => Some(format!(
            "File not found: {}\n\
             - Check if the path is correct\n\
             - Ensure you're running oradev from the right directory", path.display()
        )),
        OradevError::EmptySource(path) => Some(format!(
            "{} holds no statements after removing '/' terminator lines.\n\
             - Check that the file contains a CREATE statement", path.display()
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_chain_single() {
        let err = OradevError::MissingSetting("username");
        let formatted = format_error_chain(&err);
        assert!(formatted.starts_with("Error: Missing required setting: username"));
        assert!(!formatted.contains("Caused by"));
    }

    #[test]
    fn test_format_error_chain_with_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = OradevError::FileRead {
            path: PathBuf::from("pkg.pkb"),
            message: "permission denied".to_string(),
            source: io_err,
        };
        let formatted = format_error_chain(&err);
        assert!(formatted.contains("Failed to read pkg.pkb"));
        assert!(formatted.contains("Caused by: denied"));
    }

    #[test]
    fn test_suggest_fix_missing_setting() {
        let err = OradevError::MissingSetting("password");
        let suggestion = suggest_fix(&err).unwrap();
        assert!(suggestion.contains("oradev init"));
        assert!(suggestion.contains("password"));
    }

    #[test]
    fn test_io_not_found_maps_to_file_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: OradevError = io_err.into();
        assert!(matches!(err, OradevError::FileNotFound(_)));
    }
}
