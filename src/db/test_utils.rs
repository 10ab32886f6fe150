//! Scriptable stand-in for a live database session, used by unit and
//! integration tests. Compiled unconditionally so integration tests can
//! reach it through the library crate.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::db::connection::{DbSession, SqlRow};
use crate::error::{OradevError, Result};

type DiagnosticRow = (u32, u32, &'static str, &'static str, u32);

/// In-memory [`DbSession`] that answers the dictionary queries the workflows
/// issue and records every executed statement.
#[derive(Default)]
pub struct FakeSession {
    executed: RefCell<Vec<String>>,
    queried: RefCell<Vec<String>>,
    commits: RefCell<usize>,
    /// USER_ERRORS rows keyed by object name
    diagnostics: HashMap<String, Vec<DiagnosticRow>>,
    dependents: Vec<(String, String, String, String)>,
    current_schema: Option<String>,
    fail_execute_pattern: Option<String>,
}

impl FakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script USER_ERRORS rows `(line, position, text, attribute,
    /// message_number)` for an object name.
    pub fn with_diagnostics(mut self, object_name: &str, rows: Vec<DiagnosticRow>) -> Self {
        self.diagnostics.insert(object_name.to_string(), rows);
        self
    }

    /// Script ALL_DEPENDENCIES rows `(owner, name, type, dependency_type)`.
    pub fn with_dependents(mut self, rows: Vec<(&str, &str, &str, &str)>) -> Self {
        self.dependents = rows
            .into_iter()
            .map(|(o, n, t, d)| (o.to_string(), n.to_string(), t.to_string(), d.to_string()))
            .collect();
        self
    }

    pub fn with_current_schema(mut self, schema: &str) -> Self {
        self.current_schema = Some(schema.to_string());
        self
    }

    /// Make `execute` fail for any statement containing `pattern`.
    pub fn fail_execute_containing(mut self, pattern: &str) -> Self {
        self.fail_execute_pattern = Some(pattern.to_string());
        self
    }

    pub fn executed_statements(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }

    pub fn issued_queries(&self) -> Vec<String> {
        self.queried.borrow().clone()
    }

    pub fn commit_count(&self) -> usize {
        *self.commits.borrow()
    }

    fn internal_error(message: String) -> OradevError {
        OradevError::Internal(message)
    }
}

impl DbSession for FakeSession {
    fn execute(&self, sql: &str) -> Result<()> {
        if let Some(pattern) = &self.fail_execute_pattern {
            if sql.contains(pattern) {
                return Err(Self::internal_error(format!(
                    "ORA-00900: invalid SQL statement near {pattern}"
                )));
            }
        }
        self.executed.borrow_mut().push(sql.to_string());
        Ok(())
    }

    fn query(&self, sql: &str, binds: &[&str]) -> Result<Vec<SqlRow>> {
        self.queried.borrow_mut().push(sql.to_string());

        if sql.contains("user_errors") {
            let object_name = binds
                .first()
                .ok_or_else(|| Self::internal_error("user_errors query without bind".into()))?;
            let rows = self
                .diagnostics
                .get(*object_name)
                .map(|rows| {
                    rows.iter()
                        .map(|(line, position, text, attribute, number)| {
                            vec![
                                Some(line.to_string()),
                                Some(position.to_string()),
                                Some(text.to_string()),
                                Some(attribute.to_string()),
                                Some(number.to_string()),
                            ]
                        })
                        .collect()
                })
                .unwrap_or_default();
            return Ok(rows);
        }

        if sql.contains("USERENV") {
            // no scripted schema means the database reports none
            return match &self.current_schema {
                Some(schema) => Ok(vec![vec![Some(schema.clone())]]),
                None => Ok(Vec::new()),
            };
        }

        if sql.contains("all_dependencies") {
            let rows = self
                .dependents
                .iter()
                .map(|(owner, name, object_type, kind)| {
                    vec![
                        Some(owner.clone()),
                        Some(name.clone()),
                        Some(object_type.clone()),
                        Some(kind.clone()),
                    ]
                })
                .collect();
            return Ok(rows);
        }

        Err(Self::internal_error(format!("unexpected query: {sql}")))
    }

    fn commit(&self) -> Result<()> {
        *self.commits.borrow_mut() += 1;
        Ok(())
    }
}
