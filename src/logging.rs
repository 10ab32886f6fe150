use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::{
    fmt::{format::FmtSpan, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize the logging and error reporting infrastructure
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Install color-eyre panic and error handlers if available
    #[cfg(feature = "cli")]
    color_eyre::install()?;

    // Set up the logging level based on verbosity
    let log_level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Create the env filter, allowing RUST_LOG to override
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("oradev={}", log_level)));

    // Check if we're running in a terminal for color output
    let is_terminal = std::io::stdout().is_terminal();

    // Set up the formatting layer
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(is_terminal)
        .with_timer(UtcTime::rfc_3339())
        .with_span_events(FmtSpan::CLOSE);

    // Combine layers and set as global subscriber
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

/// Helper to format durations in human-readable format
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{:03}s", secs, millis)
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}
