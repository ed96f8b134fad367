use serde::Deserialize;
use std::path::PathBuf;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub window: WindowConfig,
    pub replay: ReplayConfig,
}

/// Logging output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    pub level: String,
    pub console: bool,
    /// Directory for rolling log files. No file output when absent.
    pub path: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
    /// Extra directives such as `park_event_bus=trace`.
    pub filter: Option<String>,
}

/// Logical window resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

/// Scripted input source used by the headless shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub frames: u32,
    pub frame_millis: u64,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: true,
            path: None,
            json: false,
            max_files: 10,
            filter: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { title: "ParkLogic".to_owned(), width: 1280, height: 720 }
    }
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self { frames: 120, frame_millis: 16 }
    }
}
