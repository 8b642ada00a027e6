//! Tracing setup for `mds`.
//!
//! Configured levels apply to this binary and `mdstore_core` only; other
//! crates stay at `warn`. `MDS_LOG` takes full `EnvFilter` directives and
//! overrides the config for both outputs.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use mdstore_core::config::types::ResolvedConfig;
use tracing::debug;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const ENV_VAR: &str = "MDS_LOG";

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

pub fn init(cfg: &ResolvedConfig) -> io::Result<()> {
    let stderr_level = parse_level(&cfg.logging.level).unwrap_or(LevelFilter::INFO);

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .without_time()
        .with_filter(filter_for(stderr_level));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    match cfg.logging.file {
        Some(ref path) => {
            let file_level = cfg
                .logging
                .file_level
                .as_deref()
                .and_then(parse_level)
                .unwrap_or(stderr_level);

            let (non_blocking, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            if let Ok(mut g) = LOG_GUARD.lock() {
                *g = Some(guard);
            }

            let file_layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_for(file_level));

            registry.with(file_layer).init();
        }
        None => registry.init(),
    }

    debug!(
        profile = %cfg.active_profile,
        data_root = %cfg.data_root.display(),
        "mds {} starting",
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

/// Flush the file writer. Must run before the process exits, because the
/// guard held in `LOG_GUARD` is never dropped on its own.
pub fn shutdown() {
    if let Ok(mut g) = LOG_GUARD.lock() {
        g.take();
    }
}

/// Appends across runs, so one file can collect the history of many commands.
fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn filter_for(level: LevelFilter) -> EnvFilter {
    match std::env::var(ENV_VAR) {
        Ok(spec) if !spec.trim().is_empty() => EnvFilter::new(spec),
        _ => EnvFilter::new(directives(level)),
    }
}

fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    format!("warn,mds={level},mdstore_core={level}")
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn levels_accept_aliases_and_reject_noise() {
        assert_eq!(parse_level("Warning"), Some(LevelFilter::WARN));
        assert_eq!(parse_level(" debug "), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn configured_level_only_reaches_our_crates() {
        assert_eq!(directives(LevelFilter::DEBUG), "warn,mds=debug,mdstore_core=debug");
        assert_eq!(directives(LevelFilter::OFF), "warn,mds=off,mdstore_core=off");
    }

    #[test]
    fn log_file_is_appended_and_parent_created() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("logs").join("mds.log");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "earlier run\n").unwrap();

        drop(open_log_file(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "earlier run\n");

        let fresh = tmp.path().join("new").join("dir").join("mds.log");
        drop(open_log_file(&fresh).unwrap());
        assert!(fresh.exists());
    }
}
