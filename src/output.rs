//! Device list serialization and persistence

use crate::config::AvDevicesConfig;
use crate::detector::DeviceDetector;
use crate::errors::{DetectError, DetectResult};
use crate::probe::ProbeRunner;
use crate::types::{Device, Platform};
use std::fs;
use std::path::{Path, PathBuf};

/// Render devices as a JSON array
pub fn to_json(devices: &[Device], pretty: bool) -> DetectResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(devices)?
    } else {
        serde_json::to_string(devices)?
    };
    Ok(json)
}

/// Write devices as JSON to `path`, returning the path written
pub fn write_devices<P: AsRef<Path>>(devices: &[Device], path: P, pretty: bool) -> DetectResult<PathBuf> {
    let path = path.as_ref();
    let json = to_json(devices, pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DetectError::output(parent, e))?;
    }

    fs::write(path, json).map_err(|e| DetectError::output(path, e))?;

    log::info!("Wrote {} device(s) to {:?}", devices.len(), path);
    Ok(path.to_path_buf())
}

/// Detect devices and save them into `dir` under the configured file name
pub async fn detect_and_save<R: ProbeRunner>(
    detector: &DeviceDetector<R>,
    platform: Platform,
    dir: &Path,
) -> DetectResult<PathBuf> {
    let devices = detector.detect(platform).await?;
    let config: &AvDevicesConfig = detector.config();
    write_devices(&devices, dir.join(&config.output.file_name), config.output.pretty)
}
