use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing::debug;
use tracing_subscriber::{
    Layer,
    filter::{LevelFilter, Targets},
    fmt::{self},
    prelude::*,
    registry::LookupSpan,
};

/// Target prefix shared by the library and the binary.
const CRATE_TARGET: &str = "protdesc";

/// Console filter: `-v` raises the descriptor engine's level, other crates stay at warnings.
fn console_targets(verbosity: u8, quiet: bool) -> Targets {
    let level = if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    Targets::new()
        .with_target(CRATE_TARGET, level)
        .with_default(level.min(LevelFilter::WARN))
}

/// The log file keeps per-family detail for every record, independent of `-v` and `-q`.
fn file_layer<S>(file: File) -> impl Layer<S> + Send + Sync
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(
            Targets::new()
                .with_target(CRATE_TARGET, LevelFilter::DEBUG)
                .with_default(LevelFilter::WARN),
        )
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let file = log_file
        .as_ref()
        .map(|path| File::create(path).map_err(CliError::Io))
        .transpose()?;

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .with_filter(console_targets(verbosity, quiet));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file.map(file_layer))
        .init();

    debug!(verbosity, quiet, log_file = ?log_file, "Logging initialized.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Once;
    use tracing::{Level, info, warn};

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("Failed to set up global logger for tests");
        });
    }

    #[test]
    fn verbosity_raises_only_the_descriptor_engine_level() {
        let info = console_targets(1, false);
        assert!(info.would_enable("protdesc::workflows::profile", &Level::INFO));
        assert!(!info.would_enable("protdesc::workflows::profile", &Level::DEBUG));
        assert!(!info.would_enable("needletail", &Level::INFO));
        assert!(info.would_enable("needletail", &Level::WARN));

        let trace = console_targets(7, false);
        assert!(trace.would_enable("protdesc::engine::tasks::ctd", &Level::TRACE));
        assert!(!trace.would_enable("toml", &Level::INFO));
    }

    #[test]
    fn quiet_silences_every_target() {
        let quiet = console_targets(3, true);
        assert!(!quiet.would_enable("protdesc", &Level::ERROR));
        assert!(!quiet.would_enable("needletail", &Level::ERROR));
    }

    #[test]
    #[serial]
    fn global_logger_accepts_descriptor_events() {
        ensure_global_logger_is_set();

        info!(family = "ctd", descriptors = 147, "Family finished.");
        warn!(family = "paac", weight = 0.9, "Weight outside the conventional range.");
    }

    #[test]
    #[serial]
    fn file_layer_keeps_engine_detail_and_drops_foreign_chatter() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("profile.log");

        let subscriber = tracing_subscriber::registry()
            .with(file_layer(File::create(&log_path).unwrap()));
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(
                target: "protdesc::workflows::profile",
                family = "paac",
                descriptors = 30,
                "Family finished."
            );
            tracing::debug!(target: "needletail::parser", "Buffer refilled.");
        });

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("protdesc::workflows::profile"));
        assert!(content.contains("family=\"paac\""));
        assert!(content.contains("descriptors=30"));
        assert!(content.contains("ThreadId"));
        assert!(!content.contains("Buffer refilled."));
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let invalid_path = PathBuf::from("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = setup_logging(0, false, Some(invalid_path));
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
