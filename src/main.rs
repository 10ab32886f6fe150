use std::process::ExitCode;

use oradev::cli::{parse_args, Commands};
use oradev::commands;
use oradev::config::OradevConfig;
use oradev::db::connection::OracleSession;
use oradev::db::dependencies::DependencyFilter;
use oradev::error::{format_error_chain, suggest_fix, OradevError};
use oradev::logging;

fn main() -> ExitCode {
    let cli = parse_args();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(success) => {
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("{}", format_error_chain(&e));
            if let Some(suggestion) = suggest_fix(&e) {
                eprintln!("\n{}", suggestion);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<bool, OradevError> {
    match command {
        Commands::Compile { files, stop_on_error } => {
            let session = connect()?;
            let report = commands::execute_compile(&session, &files, stop_on_error)?;
            commands::print_compile_summary(&report);
            Ok(report.all_succeeded())
        }
        Commands::CompileDir { directory, extensions, stop_on_error } => {
            let session = connect()?;
            let report = commands::execute_compile_dir(
                &session,
                &directory,
                extensions.as_deref(),
                stop_on_error,
            )?;
            commands::print_compile_summary(&report);
            Ok(report.all_succeeded())
        }
        Commands::AnalyzeFile { file_path } => {
            let references = commands::execute_analyze_file(&file_path)?;
            commands::print_reference_summary(&file_path, &references);
            Ok(true)
        }
        Commands::AnalyzeDb { object_name, schema, object_type } => {
            let session = connect()?;
            let filter = DependencyFilter {
                object_name,
                schema,
                object_type,
            };
            let report = commands::execute_analyze_db(&session, filter)?;
            commands::print_dependency_summary(&report);
            Ok(true)
        }
        Commands::Init => {
            let path = commands::execute_init()?;
            commands::print_init_summary(&path);
            Ok(true)
        }
    }
}

fn connect() -> Result<OracleSession, OradevError> {
    let config = OradevConfig::load()?;
    OracleSession::connect(&config)
}
