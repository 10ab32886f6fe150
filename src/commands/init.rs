use std::path::PathBuf;

use crate::config::OradevConfig;
use crate::error::Result;

/// Write a sample configuration file next to the current directory and
/// return its path.
pub fn execute_init() -> Result<PathBuf> {
    let path = OradevConfig::write_sample_config()?;
    tracing::info!(path = %path.display(), "wrote sample configuration");
    Ok(path)
}

#[cfg(feature = "cli")]
pub fn print_init_summary(path: &std::path::Path) {
    use owo_colors::OwoColorize;

    println!("{} {}", "Created".green(), path.display());
    println!();
    println!("Next steps:");
    println!("  1. Rename it to {}", crate::config::CONFIG_FILE);
    println!("  2. Fill in username, password and tns_alias (or connect_string)");
    println!("  3. Credentials can also come from DB_USER / DB_PASSWORD / DB_TNS_ALIAS");
}
