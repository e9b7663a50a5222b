use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file path.
pub const LOG_ENV_VAR: &str = "LEXICON_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so the embedding view owns the
/// terminal or console. Set `LEXICON_LOG` to a file path to enable it.
///
/// Log files get a `{path}.{timestamp}.{pid}` name so concurrent
/// instances never share a file. Returns the path written to, if any.
pub fn init_tracing() -> Option<String> {
    let log_path = std::env::var(LOG_ENV_VAR).ok()?;

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    // A subscriber may already be installed by the host application.
    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }
    Some(unique_path)
}
