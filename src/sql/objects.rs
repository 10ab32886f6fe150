use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Object identity pulled out of a CREATE statement, used to look up
/// compilation errors in USER_ERRORS afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedObject {
    /// Upper-cased object name, as the data dictionary stores it
    pub name: String,
    /// Normalized object kind keyword (e.g. "PACKAGE BODY", "VIEW"), when known
    pub kind: Option<String>,
}

fn create_stmt_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"(?im)^\s*CREATE(?:\s+OR\s+REPLACE)?\s+(?:NONEDITIONABLE\s+)?((?:PACKAGE|TYPE)\s+BODY|PUBLIC\s+SYNONYM|PACKAGE|FUNCTION|PROCEDURE|TYPE|VIEW|TRIGGER|SEQUENCE|MATERIALIZED\s+VIEW|SYNONYM)\s+(?:"?([A-Za-z0-9_$#]+)"?\.)?"?([A-Za-z0-9_$#]+)"?"#,
        )
        .expect("invalid CREATE statement regex")
    })
}

fn filename_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(R__|V__|T__|PKS__|PKB__|FNC__|PRC__|TRG__)")
            .expect("invalid filename prefix regex")
    })
}

/// Extract the object name (and kind, when determinable) from DDL source.
///
/// Looks for the leading `CREATE [OR REPLACE] <kind> [schema.]name` statement;
/// when none is present, falls back to the file name with common repository
/// prefixes (`R__`, `V__`, ...) stripped.
pub fn extract_object(source: &str, path: &Path) -> Option<ExtractedObject> {
    if let Some(caps) = create_stmt_regex().captures(source) {
        if let Some(name) = caps.get(3) {
            let kind = caps.get(1).map(|k| normalize_kind(k.as_str()));
            tracing::debug!(
                name = name.as_str(),
                file = %path.display(),
                "extracted object name from CREATE statement"
            );
            return Some(ExtractedObject {
                name: name.as_str().to_ascii_uppercase(),
                kind,
            });
        }
    }

    tracing::debug!(file = %path.display(), "no CREATE statement found, falling back to file name");
    let stem = path.file_stem()?.to_str()?.to_ascii_uppercase();
    let name = filename_prefix_regex().replace(&stem, "").to_string();
    if name.is_empty() {
        return None;
    }
    Some(ExtractedObject { name, kind: None })
}

/// Collapse internal whitespace and upper-case a kind keyword so
/// "package   body" becomes "PACKAGE BODY".
fn normalize_kind(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_uppercase()
}

/// Drop SQL*Plus statement-terminator lines (a lone `/`) and surrounding
/// whitespace, leaving the bare DDL the driver can execute.
pub fn strip_terminator_lines(source: &str) -> String {
    source
        .lines()
        .filter(|line| line.trim() != "/")
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn extract(source: &str, path: &str) -> Option<ExtractedObject> {
        extract_object(source, &PathBuf::from(path))
    }

    #[test]
    fn test_extract_from_create_statements() {
        let cases = [
            ("CREATE OR REPLACE PACKAGE my_pkg AS END;", "MY_PKG", Some("PACKAGE")),
            ("create function my_func RETURN NUMBER IS BEGIN RETURN 1; END;", "MY_FUNC", Some("FUNCTION")),
            (" CREATE\tVIEW my_view AS SELECT * FROM dual;", "MY_VIEW", Some("VIEW")),
            ("CREATE OR REPLACE PACKAGE BODY app_schema.my_body AS END;", "MY_BODY", Some("PACKAGE BODY")),
            ("create or replace type \"My_Type\" as object (id number);", "MY_TYPE", Some("TYPE")),
            ("CREATE PUBLIC SYNONYM public_syn FOR other_schema.tbl;", "PUBLIC_SYN", Some("PUBLIC SYNONYM")),
            ("CREATE SEQUENCE my_seq START WITH 1;", "MY_SEQ", Some("SEQUENCE")),
            ("CREATE TRIGGER my_trg BEFORE INSERT ON employees FOR EACH ROW BEGIN NULL; END;", "MY_TRG", Some("TRIGGER")),
        ];

        for (code, expected_name, expected_kind) in cases {
            let obj = extract(code, "dummy_path.sql").unwrap();
            assert_eq!(obj.name, expected_name, "source: {}", code);
            assert_eq!(obj.kind.as_deref(), expected_kind, "source: {}", code);
        }
    }

    #[test]
    fn test_extract_falls_back_to_file_name() {
        let code = "SELECT * FROM some_table;";
        let cases = [
            ("my_object.pks", "MY_OBJECT"),
            ("/path/to/V__MY_VIEW.vw", "MY_VIEW"),
            ("R__proc_name.prc", "PROC_NAME"),
            ("no_extension", "NO_EXTENSION"),
            ("complex.name.with.dots.sql", "COMPLEX.NAME.WITH.DOTS"),
        ];

        for (path, expected) in cases {
            let obj = extract(code, path).unwrap();
            assert_eq!(obj.name, expected, "path: {}", path);
            assert_eq!(obj.kind, None);
        }
    }

    #[test]
    fn test_alter_statement_uses_fallback() {
        let code = "ALTER TABLE my_table ADD CONSTRAINT pk_id PRIMARY KEY (id);";
        let obj = extract(code, "alter_script.sql").unwrap();
        assert_eq!(obj.name, "ALTER_SCRIPT");
    }

    #[test]
    fn test_materialized_view() {
        let code = "CREATE MATERIALIZED VIEW mv_sales AS SELECT * FROM sales;";
        let obj = extract(code, "mv.sql").unwrap();
        assert_eq!(obj.name, "MV_SALES");
        assert_eq!(obj.kind.as_deref(), Some("MATERIALIZED VIEW"));
    }

    #[test]
    fn test_strip_terminator_lines() {
        let source = "CREATE OR REPLACE VIEW v AS\nSELECT 1 FROM dual;\n/\n";
        assert_eq!(
            strip_terminator_lines(source),
            "CREATE OR REPLACE VIEW v AS\nSELECT 1 FROM dual;"
        );
    }

    #[test]
    fn test_strip_terminator_lines_slash_only() {
        assert_eq!(strip_terminator_lines("/\n/\n"), "");
        assert_eq!(strip_terminator_lines("  /  \n"), "");
    }
}
