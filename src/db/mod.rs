pub mod compiler;
pub mod connection;
pub mod dependencies;
pub mod test_utils;

pub use compiler::{compile_file, CompileOutcome, CompileStatus, Diagnostic, Severity};
pub use connection::{DbSession, OracleSession, SqlRow};
pub use dependencies::{find_dependents, DependencyFilter, DependencyRow};
