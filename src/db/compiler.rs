use std::fs;
use std::path::{Path, PathBuf};

use crate::db::connection::DbSession;
use crate::error::{OradevError, Result};
use crate::sql::objects::{extract_object, strip_terminator_lines};

/// Severity of a USER_ERRORS row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single compiler diagnostic, as reported by the data dictionary.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// 1-based source line
    pub line: u32,
    /// 1-based position within the line
    pub position: u32,
    pub text: String,
    pub severity: Severity,
    /// Oracle message number (the NNNNN in PLS-NNNNN / ORA-NNNNN)
    pub message_number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    Success,
    SuccessWithWarnings,
    Failed,
}

/// Per-file result of the compile workflow.
#[derive(Debug)]
pub struct CompileOutcome {
    pub path: PathBuf,
    pub object_name: Option<String>,
    pub object_kind: Option<String>,
    pub status: CompileStatus,
    pub diagnostics: Vec<Diagnostic>,
    /// Read or execution failure detail, when the compiler never produced
    /// dictionary diagnostics (missing file, unreachable statement, ...)
    pub failure: Option<String>,
}

impl CompileOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(self.status, CompileStatus::Failed)
    }

    fn failed(path: &Path, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            object_name: None,
            object_kind: None,
            status: CompileStatus::Failed,
            diagnostics: Vec::new(),
            failure: Some(message),
        }
    }
}

const USER_ERRORS_SQL: &str = "SELECT line, position, text, attribute, message_number \
     FROM user_errors WHERE name = :1 ORDER BY sequence";

/// Compile a single source file against the database.
///
/// Reads the file, strips SQL*Plus `/` terminator lines, executes the DDL and
/// collects any USER_ERRORS rows for the object. File-level problems (missing,
/// empty, statement rejected outright) become a `Failed` outcome rather than
/// an error; only dictionary lookups that themselves fail propagate as `Err`,
/// since at that point the session is in doubt.
pub fn compile_file(session: &dyn DbSession, path: &Path) -> Result<CompileOutcome> {
    tracing::info!(file = %path.display(), "compiling");

    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "skipping file");
            return Ok(CompileOutcome::failed(path, e.to_string()));
        }
    };

    let object = extract_object(&source, path);
    if object.is_none() {
        tracing::warn!(
            file = %path.display(),
            "could not determine object name, dictionary diagnostics unavailable"
        );
    }
    let object_name = object.as_ref().map(|o| o.name.clone());
    let object_kind = object.as_ref().and_then(|o| o.kind.clone());

    if let Err(e) = session.execute(&source) {
        tracing::error!(file = %path.display(), error = %e, "statement execution failed");
        return Ok(CompileOutcome {
            path: path.to_path_buf(),
            object_name,
            object_kind,
            status: CompileStatus::Failed,
            diagnostics: Vec::new(),
            failure: Some(e.to_string()),
        });
    }

    let diagnostics = match &object_name {
        Some(name) => fetch_diagnostics(session, name)?,
        None => Vec::new(),
    };

    let status = if diagnostics.iter().any(|d| d.severity == Severity::Error) {
        CompileStatus::Failed
    } else if diagnostics.is_empty() {
        CompileStatus::Success
    } else {
        CompileStatus::SuccessWithWarnings
    };

    match status {
        CompileStatus::Failed => {
            tracing::error!(
                object = object_name.as_deref().unwrap_or("?"),
                errors = diagnostics.iter().filter(|d| d.severity == Severity::Error).count(),
                "compilation failed"
            );
        }
        _ => {
            session.commit()?;
            tracing::info!(
                object = object_name.as_deref().unwrap_or("?"),
                warnings = diagnostics.len(),
                "compilation succeeded"
            );
        }
    }

    Ok(CompileOutcome {
        path: path.to_path_buf(),
        object_name,
        object_kind,
        status,
        diagnostics,
        failure: None,
    })
}

/// Read a source file and reduce it to the executable statement.
fn read_source(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(OradevError::FileNotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|e| OradevError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
        source: e,
    })?;
    if bytes.is_empty() {
        return Err(OradevError::EmptySource(path.to_path_buf()));
    }
    // Legacy single-byte encodings are common in old PL/SQL repositories;
    // decode lossily rather than refuse the file.
    let source = strip_terminator_lines(&String::from_utf8_lossy(&bytes));
    if source.is_empty() {
        return Err(OradevError::EmptySource(path.to_path_buf()));
    }
    Ok(source)
}

fn fetch_diagnostics(session: &dyn DbSession, object_name: &str) -> Result<Vec<Diagnostic>> {
    let rows = session.query(USER_ERRORS_SQL, &[object_name])?;
    let mut diagnostics = Vec::with_capacity(rows.len());
    for row in rows {
        diagnostics.push(diagnostic_from_row(&row));
    }
    Ok(diagnostics)
}

fn diagnostic_from_row(row: &[Option<String>]) -> Diagnostic {
    let col = |i: usize| row.get(i).and_then(|v| v.as_deref()).unwrap_or("");
    let num = |i: usize| col(i).trim().parse::<u32>().unwrap_or(0);

    let severity = if col(3).eq_ignore_ascii_case("ERROR") {
        Severity::Error
    } else {
        Severity::Warning
    };

    Diagnostic {
        line: num(0),
        position: num(1),
        text: col(2).trim().to_string(),
        severity,
        message_number: num(4),
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        write!(
            f,
            "{} at line {}, position {}: {} (ORA-{:05})",
            label, self.line, self.position, self.text, self.message_number
        )
    }
}
