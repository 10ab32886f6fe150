use crate::db::connection::DbSession;
use crate::error::Result;

/// Filter for the dependency lookup. `schema` and `object_type` are optional
/// narrowing criteria; all three are matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct DependencyFilter {
    pub object_name: String,
    pub schema: Option<String>,
    pub object_type: Option<String>,
}

/// One dependent object, as reported by ALL_DEPENDENCIES.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRow {
    pub owner: String,
    pub name: String,
    pub object_type: String,
    pub dependency_kind: String,
}

const CURRENT_SCHEMA_SQL: &str =
    "SELECT sys_context('USERENV', 'CURRENT_SCHEMA') FROM dual";

/// Build the ALL_DEPENDENCIES query for a filter. Bind values are upper-cased
/// here so the SQL stays free of per-bind UPPER() calls and the behavior is
/// visible to tests without a database. With no schema the owner filter is
/// omitted and dependents across all visible schemas are returned.
pub fn build_query(
    filter: &DependencyFilter,
    effective_schema: Option<&str>,
) -> (String, Vec<String>) {
    let mut sql = String::from(
        "SELECT owner, name, type, dependency_type \
         FROM all_dependencies \
         WHERE referenced_name = :1",
    );
    let mut binds = vec![filter.object_name.to_uppercase()];

    if let Some(schema) = effective_schema {
        binds.push(schema.to_uppercase());
        sql.push_str(&format!(" AND referenced_owner = :{}", binds.len()));
    }

    if let Some(object_type) = &filter.object_type {
        binds.push(object_type.to_uppercase());
        sql.push_str(&format!(" AND referenced_type = :{}", binds.len()));
    }

    sql.push_str(" ORDER BY owner, name, type");
    (sql, binds)
}

/// Resolve the schema the session currently operates in, if the database
/// reports one.
pub fn current_schema(session: &dyn DbSession) -> Result<Option<String>> {
    let rows = session.query(CURRENT_SCHEMA_SQL, &[])?;
    Ok(rows.first().and_then(|row| row.first()).and_then(|v| v.clone()))
}

/// Look up every object that depends on the filtered object. When no schema
/// is given, the session's current schema is used; if the database reports
/// none, the query runs without an owner filter. The schema actually applied
/// is returned alongside the rows so callers can report it.
pub fn find_dependents(
    session: &dyn DbSession,
    filter: &DependencyFilter,
) -> Result<(Option<String>, Vec<DependencyRow>)> {
    let effective_schema = match &filter.schema {
        Some(schema) => Some(schema.to_uppercase()),
        None => {
            let resolved = current_schema(session)?;
            if resolved.is_none() {
                tracing::warn!(
                    object = %filter.object_name,
                    "current schema could not be determined, searching all schemas"
                );
            }
            resolved
        }
    };
    tracing::debug!(
        object = %filter.object_name,
        schema = effective_schema.as_deref().unwrap_or("*"),
        "querying dependents"
    );

    let (sql, binds) = build_query(filter, effective_schema.as_deref());
    let bind_refs: Vec<&str> = binds.iter().map(String::as_str).collect();
    let rows = session.query(&sql, &bind_refs)?;

    let mut dependents = Vec::with_capacity(rows.len());
    for row in rows {
        let col = |i: usize| {
            row.get(i)
                .and_then(|v| v.as_deref())
                .unwrap_or("")
                .to_string()
        };
        dependents.push(DependencyRow {
            owner: col(0),
            name: col(1),
            object_type: col(2),
            dependency_kind: col(3),
        });
    }

    tracing::info!(
        object = %filter.object_name,
        schema = effective_schema.as_deref().unwrap_or("*"),
        count = dependents.len(),
        "dependency lookup complete"
    );
    Ok((effective_schema, dependents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::FakeSession;

    fn filter(name: &str, schema: Option<&str>, object_type: Option<&str>) -> DependencyFilter {
        DependencyFilter {
            object_name: name.to_string(),
            schema: schema.map(str::to_string),
            object_type: object_type.map(str::to_string),
        }
    }

    #[test]
    fn test_build_query_name_and_schema_only() {
        let (sql, binds) = build_query(&filter("my_pkg", None, None), Some("HR"));
        assert!(sql.contains("referenced_name = :1"));
        assert!(sql.contains("referenced_owner = :2"));
        assert!(!sql.contains("referenced_type"));
        assert!(sql.ends_with("ORDER BY owner, name, type"));
        assert_eq!(binds, vec!["MY_PKG".to_string(), "HR".to_string()]);
    }

    #[test]
    fn test_build_query_with_type() {
        let (sql, binds) = build_query(&filter("emp", Some("hr"), Some("table")), Some("HR"));
        assert!(sql.contains("referenced_type = :3"));
        assert_eq!(
            binds,
            vec!["EMP".to_string(), "HR".to_string(), "TABLE".to_string()]
        );
    }

    #[test]
    fn test_build_query_without_schema_omits_owner_filter() {
        let (sql, binds) = build_query(&filter("emp", None, Some("table")), None);
        assert!(!sql.contains("referenced_owner"));
        assert!(sql.contains("referenced_type = :2"));
        assert_eq!(binds, vec!["EMP".to_string(), "TABLE".to_string()]);
    }

    #[test]
    fn test_filters_are_case_insensitive() {
        let lower = build_query(&filter("emp", Some("hr"), Some("table")), Some("HR"));
        let upper = build_query(&filter("EMP", Some("HR"), Some("TABLE")), Some("HR"));
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_find_dependents_uses_current_schema_when_unset() {
        let session = FakeSession::new().with_current_schema("APP_OWNER");
        let (schema, rows) = find_dependents(&session, &filter("my_pkg", None, None)).unwrap();
        assert_eq!(schema.as_deref(), Some("APP_OWNER"));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_find_dependents_explicit_schema_skips_lookup() {
        let session = FakeSession::new();
        let (schema, _) = find_dependents(&session, &filter("my_pkg", Some("hr"), None)).unwrap();
        assert_eq!(schema.as_deref(), Some("HR"));
        assert!(!session
            .issued_queries()
            .iter()
            .any(|sql| sql.contains("USERENV")));
    }

    #[test]
    fn test_missing_current_schema_searches_all_schemas() {
        // session reports no current schema; lookup degrades to an
        // owner-unfiltered query instead of failing
        let session = FakeSession::new().with_dependents(vec![
            ("HR", "EMP_MGMT", "PACKAGE BODY", "HARD"),
            ("APP", "EMP_SYNC", "PROCEDURE", "HARD"),
        ]);
        let (schema, rows) = find_dependents(&session, &filter("employees", None, None)).unwrap();
        assert!(schema.is_none());
        assert_eq!(rows.len(), 2);

        let dependency_sql = session
            .issued_queries()
            .into_iter()
            .find(|sql| sql.contains("all_dependencies"))
            .unwrap();
        assert!(!dependency_sql.contains("referenced_owner"));
    }

    #[test]
    fn test_find_dependents_maps_rows() {
        let session = FakeSession::new()
            .with_current_schema("HR")
            .with_dependents(vec![
                ("HR", "EMP_MGMT", "PACKAGE BODY", "HARD"),
                ("HR", "SALARY_VIEW", "VIEW", "HARD"),
            ]);
        let (_, rows) = find_dependents(&session, &filter("employees", None, None)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "EMP_MGMT");
        assert_eq!(rows[0].object_type, "PACKAGE BODY");
        assert_eq!(rows[1].dependency_kind, "HARD");
    }

    #[test]
    fn test_zero_dependents_is_not_an_error() {
        let session = FakeSession::new().with_current_schema("HR");
        let (_, rows) =
            find_dependents(&session, &filter("unreferenced_seq", None, None)).unwrap();
        assert!(rows.is_empty());
    }
}
