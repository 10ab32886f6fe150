use std::path::Path;

use crate::error::Result;
use crate::sql::scanner::{scan_file, ReferenceMatch};

/// Scan a source file for object references, sorted by line then name.
pub fn execute_analyze_file(path: &Path) -> Result<Vec<ReferenceMatch>> {
    let mut references = scan_file(path)?;
    references.sort_by(|a, b| a.line.cmp(&b.line).then_with(|| a.text.cmp(&b.text)));
    tracing::info!(
        file = %path.display(),
        count = references.len(),
        "reference scan complete"
    );
    Ok(references)
}

#[cfg(feature = "cli")]
pub fn print_reference_summary(path: &Path, references: &[ReferenceMatch]) {
    use crate::sql::scanner::ReferenceKind;
    use owo_colors::OwoColorize;

    println!();
    if references.is_empty() {
        println!("No object references found in {}", path.display());
        return;
    }

    println!("{}", format!("References in {}:", path.display()).bold());
    for reference in references {
        let marker = match reference.kind {
            ReferenceKind::Qualified => "●".cyan().to_string(),
            ReferenceKind::Bare => "○".to_string(),
        };
        let line = format!("{:>5}", reference.line);
        println!("  {}  {} {}", line.dimmed(), marker, reference.text);
    }
    println!();
    println!("{} reference(s)", references.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;

    #[test]
    fn test_references_sorted_by_line_then_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proc.prc");
        fs::write(
            &path,
            indoc! {"
                BEGIN
                  SELECT * FROM zeta_tab, alpha_tab;
                  hr.emp_mgmt.hire(1);
                END;
            "},
        )
        .unwrap();

        let references = execute_analyze_file(&path).unwrap();
        let names: Vec<&str> = references.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(names, vec!["alpha_tab", "zeta_tab", "hr.emp_mgmt.hire"]);
        assert_eq!(references[0].line, 2);
        assert_eq!(references[2].line, 3);
    }
}
