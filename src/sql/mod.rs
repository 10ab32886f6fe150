pub mod keywords;
pub mod objects;
pub mod scanner;

pub use keywords::is_keyword;
pub use objects::{extract_object, ExtractedObject};
pub use scanner::{scan_file, scan_source, ReferenceKind, ReferenceMatch};
