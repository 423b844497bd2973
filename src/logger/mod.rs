//! Logging initialisation built on tracing and tracing-subscriber.
//!
//! Supports text or JSON output to the console and/or a log file, with an
//! env-filter level that can be changed at runtime through the returned
//! [`LogLevelHandle`].

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, reload};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output
    Text,
    /// Structured JSON output
    Json,
}

/// Console output configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub enabled: bool,
}

/// File output configuration.
#[derive(Debug, Clone)]
pub struct FileConfig {
    pub enabled: bool,
    pub path: PathBuf,
    pub append: bool,
}

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Env-filter directive, e.g. "info" or "atlas_rs=debug,info"
    pub level: String,
    pub format: LogFormat,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            console: ConsoleConfig { enabled: true },
            file: FileConfig {
                enabled: false,
                path: PathBuf::from("logs/atlas.log"),
                append: true,
            },
        }
    }
}

/// Logger initialisation and reload errors.
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Invalid log level directive '{0}'")]
    InvalidLevel(String),

    #[error("Failed to open log file {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install logger: {0}")]
    Init(String),
}

type FilteredRegistry = Layered<reload::Layer<EnvFilter, Registry>, Registry>;

/// Handle for changing the log level filter at runtime.
pub struct LogLevelHandle {
    handle: reload::Handle<EnvFilter, Registry>,
}

impl LogLevelHandle {
    /// Replace the active level filter with a new directive.
    pub fn set_level(&self, level: &str) -> Result<(), LoggerError> {
        let filter = EnvFilter::try_new(level)
            .map_err(|_| LoggerError::InvalidLevel(level.to_string()))?;
        self.handle
            .reload(filter)
            .map_err(|e| LoggerError::Init(e.to_string()))
    }
}

/// Initialise the global tracing subscriber from the given configuration.
///
/// Returns a [`LogLevelHandle`] for runtime level changes. Can only be called
/// once per process; a second call fails with [`LoggerError::Init`].
pub fn init_logger(config: LoggerConfig) -> Result<LogLevelHandle, LoggerError> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|_| LoggerError::InvalidLevel(config.level.clone()))?;
    let (filter_layer, handle) = reload::Layer::new(filter);

    let mut layers: Vec<Box<dyn Layer<FilteredRegistry> + Send + Sync>> = Vec::new();

    if config.console.enabled {
        let layer = tracing_subscriber::fmt::layer();
        match config.format {
            LogFormat::Text => layers.push(layer.boxed()),
            LogFormat::Json => layers.push(layer.json().boxed()),
        }
    }

    if config.file.enabled {
        if let Some(parent) = config.file.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| LoggerError::File {
                path: config.file.path.clone(),
                source,
            })?;
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if config.file.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        let file = options.open(&config.file.path).map_err(|source| LoggerError::File {
            path: config.file.path.clone(),
            source,
        })?;

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false);
        match config.format {
            LogFormat::Text => layers.push(layer.boxed()),
            LogFormat::Json => layers.push(layer.json().boxed()),
        }
    }

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(layers)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))?;

    Ok(LogLevelHandle { handle })
}
