use std::fs;
use std::path::{Path, PathBuf};

use crate::commands::compile::{execute_compile, CompileReport};
use crate::db::connection::DbSession;
use crate::error::{OradevError, Result};

/// Extensions compiled when the user gives none.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "sql", "pks", "pkb", "pck", "fnc", "prc", "trg", "vw", "tps", "tpb",
];

/// Compile every matching file under `directory`, recursively. Files are
/// compiled in sorted path order so runs are reproducible.
pub fn execute_compile_dir(
    session: &dyn DbSession,
    directory: &Path,
    extensions: Option<&[String]>,
    stop_on_error: bool,
) -> Result<CompileReport> {
    let files = collect_source_files(directory, extensions)?;
    tracing::info!(
        directory = %directory.display(),
        count = files.len(),
        "collected source files"
    );
    execute_compile(session, &files, stop_on_error)
}

/// Walk a directory tree and gather source files with a matching extension,
/// sorted by path.
pub fn collect_source_files(
    directory: &Path,
    extensions: Option<&[String]>,
) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(OradevError::DirectoryNotFound(directory.to_path_buf()));
    }

    let normalized: Vec<String> = match extensions {
        Some(list) => list
            .iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect(),
        None => DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
    };

    let mut files = Vec::new();
    walk(directory, &normalized, &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(directory: &Path, extensions: &[String], files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(&path, extensions, files)?;
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)) {
                files.push(path);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::FakeSession;
    use std::fs;

    #[test]
    fn test_collect_recurses_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("zz.pks"), "x").unwrap();
        fs::write(dir.path().join("nested/aa.pkb"), "x").unwrap();
        fs::write(dir.path().join("readme.md"), "x").unwrap();

        let files = collect_source_files(dir.path(), None).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("nested/aa.pkb"));
        assert!(files[1].ends_with("zz.pks"));
    }

    #[test]
    fn test_collect_custom_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.pks"), "x").unwrap();
        fs::write(dir.path().join("b.custom"), "x").unwrap();

        let exts = vec![".CUSTOM".to_string()];
        let files = collect_source_files(dir.path(), Some(&exts)).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("b.custom"));
    }

    #[test]
    fn test_missing_directory_errors() {
        let err = collect_source_files(Path::new("no_such_dir_here"), None).unwrap_err();
        assert!(matches!(err, OradevError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_compile_dir_runs_collected_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("one.prc"),
            "CREATE OR REPLACE PROCEDURE one_prc IS BEGIN NULL; END;",
        )
        .unwrap();
        fs::write(
            dir.path().join("two.prc"),
            "CREATE OR REPLACE PROCEDURE two_prc IS BEGIN NULL; END;",
        )
        .unwrap();

        let session = FakeSession::new();
        let report = execute_compile_dir(&session, dir.path(), None, false).unwrap();
        assert_eq!(report.outcomes.len(), 2);
        assert!(report.all_succeeded());
    }
}
