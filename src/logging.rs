//! Logging bootstrap. The process entry point builds a [`LogConfig`] from its
//! flags and configuration file and calls [`init_logs`] exactly once; there is
//! no module-level logging state.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Deserialize;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::{Result, SiftError};

/// Minimum level to emit. Ordered from quietest to noisiest, so combining
/// several sources of a level (flags, configuration file) is a plain `max`.
/// `Verbose` sits between `Info` and `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warning,
    Info,
    Verbose,
    Debug,
}

impl LogLevel {
    fn as_filter(self) -> Option<LevelFilter> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(LevelFilter::ERROR),
            LogLevel::Warning => Some(LevelFilter::WARN),
            LogLevel::Info => Some(LevelFilter::INFO),
            LogLevel::Verbose => Some(LevelFilter::DEBUG),
            LogLevel::Debug => Some(LevelFilter::TRACE),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Install the global log subscriber described by `config`.
///
/// `Off` installs nothing and succeeds. At `Debug` the output switches to the
/// detailed format (target and line numbers) and the startup arguments are
/// logged. Calling this twice, or after another subscriber is set, fails with
/// [`SiftError::Config`].
pub fn init_logs(config: &LogConfig) -> Result<()> {
    let Some(filter) = config.level.as_filter() else {
        return Ok(());
    };
    let detailed = config.level == LogLevel::Debug;

    match &config.file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            install(filter, detailed, Mutex::new(file))?;
        }
        None => install(filter, detailed, io::stderr)?,
    }

    if detailed {
        debug!(args = ?std::env::args().collect::<Vec<_>>(), "startup");
    }
    Ok(())
}

fn install<W>(filter: LevelFilter, detailed: bool, writer: W) -> Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(detailed)
        .with_line_number(detailed)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(|e| SiftError::Config(format!("logging already initialized: {e}")))
}
