pub mod analyze_db;
pub mod analyze_file;
pub mod compile;
pub mod compile_dir;
pub mod init;

pub use analyze_db::{execute_analyze_db, DependencyReport};
pub use analyze_file::execute_analyze_file;
pub use compile::{execute_compile, CompileReport};
pub use compile_dir::{execute_compile_dir, DEFAULT_EXTENSIONS};
pub use init::execute_init;

#[cfg(feature = "cli")]
pub use analyze_db::print_dependency_summary;
#[cfg(feature = "cli")]
pub use analyze_file::print_reference_summary;
#[cfg(feature = "cli")]
pub use compile::print_compile_summary;
#[cfg(feature = "cli")]
pub use init::print_init_summary;
