use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DetectError
pub type DetectResult<T> = Result<T, DetectError>;

#[derive(Debug, Error)]
pub enum DetectError {
    /// The external probe tool could not be started
    #[error("Failed to start {program}, make sure it is installed and in your PATH: {source}")]
    ProbeLaunch {
        program: String,
        #[source]
        source: io::Error,
    },
    /// Every applicable probe ran but none reported a device
    #[error("No audio or video devices found on this system")]
    NoDevicesFound,
    /// The device list could not be written to disk
    #[error("Failed to write {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DetectError {
    pub fn probe_launch(program: impl Into<String>, source: io::Error) -> Self {
        DetectError::ProbeLaunch {
            program: program.into(),
            source,
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DetectError::Output {
            path: path.into(),
            source,
        }
    }

    /// True when the failure means a tool is missing rather than no devices present
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, DetectError::ProbeLaunch { .. })
    }
}
