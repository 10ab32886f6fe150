use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{OradevError, Result};
use crate::sql::keywords::is_keyword;

/// How a candidate reference was written in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `schema.object` or `package.member` form
    Qualified,
    /// bare identifier
    Bare,
}

/// A potential database object reference found by static scanning.
///
/// Matches are heuristic: keywords and declarations are filtered out, but
/// local variables and column names can still slip through. That is accepted;
/// this is a lexical scan, not a parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMatch {
    /// The reference text as written in the source
    pub text: String,
    /// 1-based line number in the original file
    pub line: usize,
    pub kind: ReferenceKind,
}

fn identifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // schema (optional) . object . members (zero or more), quotes optional
        Regex::new(
            r#"(?i)(?:"?([A-Za-z0-9_$#]+)"?\.)?"?([A-Za-z0-9_$#]{2,})"?((?:\."?[A-Za-z0-9_$#]+"?)*)"#,
        )
        .expect("invalid identifier regex")
    })
}

fn declaration_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // local variable/constant/cursor declarations by naming convention
        Regex::new(
            r#"(?i)^\s*(?:[lgcprt]_|v_)[A-Za-z0-9_$#]+\s+(?:CONSTANT\s+)?(?:[A-Za-z0-9._"%]+|TABLE\s+OF|RECORD|CURSOR|REF\s+CURSOR)"#,
        )
        .expect("invalid declaration regex")
    })
}

fn block_comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").expect("invalid block comment regex"))
}

fn line_comment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)[ \t]*--.*$").expect("invalid line comment regex"))
}

/// Remove `/* */` and `--` comments from PL/SQL source.
///
/// Block comments are replaced by their newlines rather than deleted outright,
/// so line numbers in subsequent scanning stay aligned with the original file.
pub fn remove_comments(code: &str) -> String {
    let without_blocks = block_comment_regex().replace_all(code, |caps: &regex::Captures| {
        "\n".repeat(caps[0].matches('\n').count())
    });
    line_comment_regex()
        .replace_all(&without_blocks, "")
        .into_owned()
}

/// Scan PL/SQL source text for candidate object references.
pub fn scan_source(source: &str) -> Vec<ReferenceMatch> {
    let cleaned = remove_comments(source);
    let mut references = Vec::new();
    let mut seen: HashSet<(String, usize)> = HashSet::new();

    for (idx, line) in cleaned.lines().enumerate() {
        let line_number = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        if declaration_line_regex().is_match(line) {
            continue;
        }

        for caps in identifier_regex().captures_iter(line) {
            let full = caps.get(0).expect("group 0 always present");
            let schema = caps.get(1).map(|m| m.as_str());
            let object = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

            if !context_allows(line, full.start(), full.end()) {
                continue;
            }

            let full_upper = full.as_str().to_ascii_uppercase();

            // Unqualified keywords and built-ins are language syntax, not
            // object references. A schema prefix (e.g. SYS.DUAL) keeps them.
            if is_keyword(&full_upper) {
                continue;
            }
            if let Some(s) = schema {
                if is_keyword(s) {
                    continue;
                }
            } else if is_keyword(object) {
                continue;
            }

            // Numeric literals satisfy the identifier alphabet; drop them
            if object.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }

            if !seen.insert((full_upper, line_number)) {
                continue;
            }

            let kind = if schema.is_some() {
                ReferenceKind::Qualified
            } else {
                ReferenceKind::Bare
            };
            tracing::debug!(reference = full.as_str(), line = line_number, "potential reference");
            references.push(ReferenceMatch {
                text: full.as_str().to_string(),
                line: line_number,
                kind,
            });
        }
    }

    references
}

/// Reject matches whose surrounding text marks them as something other than
/// an object reference: string literal content, bind variables, assignment
/// targets, named-parameter values, and labels.
fn context_allows(line: &str, start: usize, end: usize) -> bool {
    let before = &line[..start];
    if let Some(prev) = before.chars().last() {
        if matches!(prev, ':' | '=' | '<' | '>' | '!' | '\'') {
            return false;
        }
    }
    if before.trim_end().ends_with(":=") || before.trim_end().ends_with("=>") {
        return false;
    }

    let after = &line[end..];
    match after.chars().next() {
        None => {}
        Some(c) if c.is_whitespace() || matches!(c, '.' | '(' | '%' | '@' | ';' | ',' | ')') => {}
        _ => {
            // named-parameter syntax abutting the identifier is still fine
            if !after.starts_with("=>") {
                return false;
            }
        }
    }

    // a following ':' marks an assignment target or a label
    let after_trimmed = after.trim_start();
    if after_trimmed.starts_with(':') {
        return false;
    }

    true
}

/// Scan a file on disk for candidate object references.
///
/// The whole file is read up front; files that are not valid UTF-8 are
/// decoded lossily rather than rejected, since vendor PL/SQL sources are
/// frequently in legacy single-byte encodings.
pub fn scan_file(path: &Path) -> Result<Vec<ReferenceMatch>> {
    if !path.is_file() {
        return Err(OradevError::FileNotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|e| OradevError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
        source: e,
    })?;
    let source = String::from_utf8_lossy(&bytes);
    Ok(scan_source(&source))
}
