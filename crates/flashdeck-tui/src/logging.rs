use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize file-based tracing.
///
/// The terminal is in raw mode while the UI runs, so diagnostics go to a
/// rolling log file under the user's data directory instead of stderr.
/// Returns the appender guard, which must be kept alive for the lifetime of
/// the process; returns None (and logs nowhere) if no data directory exists.
pub fn init() -> Option<WorkerGuard> {
    let dir = dirs::data_local_dir()?.join("flashdeck").join("logs");
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::daily(dir, "flashdeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
