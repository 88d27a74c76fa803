//! Stderr logger installed by the `superpixel-rag` CLI.
//!
//! Lines look like `[  0.012s DEBUG rag_region::rag] message`. The CLI's
//! `-v` count picks the level for the segmentation crates; records from any
//! other crate (image decoding and the like) are held at `warn` or quieter.
//! The library crates only emit through the `log` facade.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

const WORKSPACE_TARGETS: [&str; 4] = ["rag_core", "rag_region", "rag_watershed", "superpixel_rag"];

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

impl StderrLogger {
    fn new(level: LevelFilter) -> Self {
        Self {
            level,
            started: Instant::now(),
        }
    }

    fn level_for(&self, target: &str) -> LevelFilter {
        let crate_name = target.split("::").next().unwrap_or(target);
        if WORKSPACE_TARGETS.contains(&crate_name) {
            self.level
        } else {
            self.level.min(LevelFilter::Warn)
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = self.started.elapsed().as_secs_f64();
        let _ = writeln!(
            std::io::stderr().lock(),
            "[{:7.3}s {:>5} {}] {}",
            elapsed,
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Level for a repeated `-v` flag: none is `info`, one `debug`, more `trace`.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger with `level`.
///
/// Only the first call installs anything; later calls return `Ok(())`.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = LOGGER.get_or_init(|| StderrLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Install a `tracing` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Span close events are printed so `instrument`ed stages report their timing.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE);
    let _ = if json {
        builder.json().flatten_event(true).finish().try_init()
    } else {
        builder
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    fn allows(logger: &StderrLogger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(LevelFilter::Info, level_for_verbosity(0));
        assert_eq!(LevelFilter::Debug, level_for_verbosity(1));
        assert_eq!(LevelFilter::Trace, level_for_verbosity(5));
    }

    #[test]
    fn other_crates_are_capped_at_warn() {
        let logger = StderrLogger::new(LevelFilter::Debug);
        assert!(allows(&logger, "rag_region::rag", Level::Debug));
        assert!(allows(&logger, "superpixel_rag", Level::Debug));
        assert!(!allows(&logger, "rag_watershed::engine", Level::Trace));
        assert!(!allows(&logger, "png::decoder", Level::Info));
        assert!(allows(&logger, "png::decoder", Level::Warn));

        let quiet = StderrLogger::new(LevelFilter::Error);
        assert!(!allows(&quiet, "image", Level::Warn));
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        init_with_level(LevelFilter::Warn).expect("first install");
        init_with_level(LevelFilter::Trace).expect("second call is ignored");
        assert_eq!(LevelFilter::Warn, log::max_level());
    }
}
