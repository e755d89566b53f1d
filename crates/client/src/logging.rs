//! File logging for the interactive client.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Session id, given or derived from the current time.
pub fn session_id(configured: Option<&str>) -> String {
    match configured {
        Some(id) => id.to_owned(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{}", timestamp)
        }
    }
}

/// Setup logging to a per-session file and return the session directory.
///
/// Nothing is written to the terminal: stdout belongs to the battle view.
pub fn setup_logging(session_id: &str) -> Result<PathBuf> {
    let session_log_dir = get_log_directory().join(session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    // Setup file appender
    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins; otherwise info
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(_guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file(&session_log_dir).display());

    Ok(session_log_dir)
}

pub fn log_file(session_log_dir: &Path) -> PathBuf {
    session_log_dir.join("client.log")
}

/// Get the platform-specific log directory
fn get_log_directory() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Caches")
                .join("arena")
                .join("logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(xdg_cache).join("arena").join("logs");
        } else if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".cache").join("arena").join("logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(local_appdata).join("arena").join("logs");
        }
    }

    // Fallback
    std::env::temp_dir().join("arena").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_session_id_is_kept() {
        assert_eq!(session_id(Some("demo")), "demo");
        assert!(session_id(None).starts_with("session_"));
    }
}
