//! Developer utilities for Oracle PL/SQL codebases: compile source files
//! against a live database and report dictionary diagnostics, scan sources
//! for referenced object names, and query ALL_DEPENDENCIES for dependents.

#[cfg(feature = "cli")]
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod sql;

pub use config::OradevConfig;
pub use error::{OradevError, Result};
