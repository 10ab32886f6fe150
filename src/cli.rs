use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "oradev")]
#[command(about = "Oracle PL/SQL developer utilities", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile one or more PL/SQL source files against the database
    Compile {
        /// Files to compile, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Stop at the first file that fails to compile
        #[arg(long)]
        stop_on_error: bool,
    },

    /// Compile every source file under a directory, recursively
    CompileDir {
        /// Directory to scan
        directory: PathBuf,

        /// File extension to include (repeatable; defaults to the usual
        /// PL/SQL extensions)
        #[arg(long = "ext")]
        extensions: Option<Vec<String>>,

        /// Stop at the first file that fails to compile
        #[arg(long)]
        stop_on_error: bool,
    },

    /// Scan a source file for referenced object names (no database needed)
    AnalyzeFile {
        /// File to scan
        file_path: PathBuf,
    },

    /// List objects that depend on a database object
    AnalyzeDb {
        /// Name of the referenced object
        object_name: String,

        /// Schema owning the object (defaults to the session's current schema)
        #[arg(short, long)]
        schema: Option<String>,

        /// Object type to narrow the match (TABLE, PACKAGE, VIEW, ...)
        #[arg(short = 't', long = "type")]
        object_type: Option<String>,
    },

    /// Write a sample oradev.toml.example to the current directory
    Init,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
