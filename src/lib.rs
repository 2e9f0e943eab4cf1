//! avdevices: cross-platform audio and video capture device detection
//!
//! Enumerates capture devices by running the host's native listing tools and
//! parsing their text output into one [`Device`] record shape.
//!
//! # Backends
//! - Linux: `v4l2-ctl --list-devices` for video, `ffmpeg -sources` for audio
//! - Windows: `ffmpeg -f dshow -list_devices true -i dummy`
//! - macOS: `ffmpeg -f avfoundation -list_devices true -i dummy`
//!
//! # Usage
//! ```rust,no_run
//! # async fn run() -> Result<(), avdevices::DetectError> {
//! let devices = avdevices::detect_devices().await?;
//! for device in &devices {
//!     println!("{}", device);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Captured probe output can also be parsed directly:
//! ```rust
//! use avdevices::platform::parse_avfoundation_devices;
//!
//! let devices = parse_avfoundation_devices("AVFoundation audio devices:\n[0] MacBook Microphone");
//! assert_eq!(devices[0].id, Some(0));
//! ```
pub mod config;
pub mod detector;
pub mod errors;
pub mod output;
pub mod platform;
pub mod probe;
pub mod types;

pub use config::AvDevicesConfig;
pub use detector::{detect_devices, DeviceDetector};
pub use errors::{DetectError, DetectResult};
pub use output::{detect_and_save, to_json, write_devices};
pub use platform::Backend;
pub use probe::{Probe, ProbeRunner, ProbeStream, SystemProbeRunner};
pub use types::{Device, DeviceKind, Platform};

/// Detect the current platform
pub fn current_platform() -> Platform {
    Platform::current()
}

/// Initialize logging, defaulting to info level for this crate
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "avdevices=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    let platform = Platform::current();
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
        platform,
        backends: Backend::for_platform(platform)
            .iter()
            .map(|b| b.as_str().to_string())
            .collect(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub platform: Platform,
    pub backends: Vec<String>,
}
