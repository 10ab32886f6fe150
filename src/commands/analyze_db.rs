use crate::db::connection::DbSession;
use crate::db::dependencies::{find_dependents, DependencyFilter, DependencyRow};
use crate::error::Result;

/// Result of a dependency lookup, including the schema that was actually
/// queried. None means the lookup ran across all visible schemas.
#[derive(Debug)]
pub struct DependencyReport {
    pub filter: DependencyFilter,
    pub effective_schema: Option<String>,
    pub rows: Vec<DependencyRow>,
}

pub fn execute_analyze_db(
    session: &dyn DbSession,
    filter: DependencyFilter,
) -> Result<DependencyReport> {
    let (effective_schema, rows) = find_dependents(session, &filter)?;
    Ok(DependencyReport {
        filter,
        effective_schema,
        rows,
    })
}

#[cfg(feature = "cli")]
pub fn print_dependency_summary(report: &DependencyReport) {
    use owo_colors::OwoColorize;

    println!();
    let target = match &report.effective_schema {
        Some(schema) => format!("{}.{}", schema, report.filter.object_name.to_uppercase()),
        None => report.filter.object_name.to_uppercase(),
    };
    if report.rows.is_empty() {
        println!("No objects depend on {}", target.bold());
        return;
    }

    println!("{}", format!("Objects depending on {}:", target).bold());
    for row in &report.rows {
        let object_type = format!("{:<20}", row.object_type);
        println!(
            "  {:<30} {} {} ({})",
            format!("{}.{}", row.owner, row.name),
            object_type.cyan(),
            "dependency:".dimmed(),
            row.dependency_kind
        );
    }
    println!();
    println!("{} dependent object(s)", report.rows.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::FakeSession;

    #[test]
    fn test_report_carries_effective_schema() {
        let session = FakeSession::new()
            .with_current_schema("APP")
            .with_dependents(vec![("APP", "CALLER_PKG", "PACKAGE BODY", "HARD")]);
        let filter = DependencyFilter {
            object_name: "shared_fnc".to_string(),
            schema: None,
            object_type: None,
        };
        let report = execute_analyze_db(&session, filter).unwrap();
        assert_eq!(report.effective_schema.as_deref(), Some("APP"));
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].name, "CALLER_PKG");
    }
}
