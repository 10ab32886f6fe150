use oracle::sql_type::ToSql;
use oracle::Connection;
use std::path::Path;

use crate::config::OradevConfig;
use crate::error::{OradevError, Result};

/// A materialized result row: one stringified value per column, NULL as None.
pub type SqlRow = Vec<Option<String>>;

/// The capability surface the compile and dependency workflows need from a
/// database session. Implemented by [`OracleSession`] for a live database and
/// by `test_utils::FakeSession` for tests.
pub trait DbSession {
    /// Execute a DDL or PL/SQL statement.
    fn execute(&self, sql: &str) -> Result<()>;

    /// Run a query with string binds, returning all rows.
    fn query(&self, sql: &str, binds: &[&str]) -> Result<Vec<SqlRow>>;

    /// Commit the current transaction.
    fn commit(&self) -> Result<()>;
}

/// Blocking session over the Oracle driver. One per CLI invocation, used
/// sequentially for every statement within it.
pub struct OracleSession {
    conn: Connection,
}

impl OracleSession {
    /// Open a connection using resolved configuration.
    pub fn connect(config: &OradevConfig) -> Result<Self> {
        let creds = config.credentials()?;
        prepare_client_environment(config);

        tracing::info!(
            user = %creds.username,
            target = %creds.connect_target,
            "connecting to database"
        );
        let conn = Connection::connect(&creds.username, &creds.password, &creds.connect_target)
            .map_err(|e| OradevError::Connection {
                user: creds.username.clone(),
                message: e.to_string(),
                source: e,
            })?;
        tracing::debug!("database connection established");

        Ok(Self { conn })
    }
}

impl DbSession for OracleSession {
    fn execute(&self, sql: &str) -> Result<()> {
        self.conn.execute(sql, &[])?;
        Ok(())
    }

    fn query(&self, sql: &str, binds: &[&str]) -> Result<Vec<SqlRow>> {
        let owned: Vec<String> = binds.iter().map(|b| b.to_string()).collect();
        let bind_values: Vec<&dyn ToSql> = owned.iter().map(|b| b as &dyn ToSql).collect();
        let rows = self.conn.query(sql, &bind_values)?;

        let mut out = Vec::new();
        for row in rows {
            let row = row?;
            let column_count = row.sql_values().len();
            let mut columns = Vec::with_capacity(column_count);
            for i in 0..column_count {
                columns.push(row.get::<usize, Option<String>>(i)?);
            }
            out.push(columns);
        }
        Ok(out)
    }

    fn commit(&self) -> Result<()> {
        self.conn.commit()?;
        Ok(())
    }
}

/// Point the Oracle client at the configured TNS directory and client
/// libraries before the first connect. TNS_ADMIN is honored directly by the
/// driver; the library directory has to be on the loader search path, which
/// on Windows means PATH.
fn prepare_client_environment(config: &OradevConfig) {
    if let Some(tns_admin) = &config.tns_admin {
        if std::env::var_os("TNS_ADMIN").is_none() {
            if tns_admin.is_dir() {
                std::env::set_var("TNS_ADMIN", tns_admin);
                tracing::debug!(dir = %tns_admin.display(), "TNS_ADMIN set from configuration");
            } else {
                tracing::warn!(
                    dir = %tns_admin.display(),
                    "configured tns_admin directory does not exist"
                );
            }
        }
    }

    if let Some(lib_dir) = &config.client_lib_dir {
        if lib_dir.is_dir() {
            prepend_to_path(lib_dir);
        } else {
            tracing::warn!(
                dir = %lib_dir.display(),
                "configured client_lib_dir does not exist, relying on system search path"
            );
        }
    }
}

fn prepend_to_path(dir: &Path) {
    if cfg!(windows) {
        let current = std::env::var_os("PATH").unwrap_or_default();
        let mut paths: Vec<_> = vec![dir.to_path_buf()];
        paths.extend(std::env::split_paths(&current));
        if let Ok(joined) = std::env::join_paths(paths) {
            std::env::set_var("PATH", joined);
            tracing::debug!(dir = %dir.display(), "client library directory prepended to PATH");
        }
    } else {
        // Dynamic loader paths are fixed at process start on Unix
        tracing::warn!(
            dir = %dir.display(),
            "client_lib_dir must be on LD_LIBRARY_PATH before launch on this platform"
        );
    }
}
