//! Device detection dispatch
//!
//! Runs the probes that apply to a host one after another, parses each
//! probe's output with the matching backend parser and concatenates the
//! results.

use crate::config::AvDevicesConfig;
use crate::errors::{DetectError, DetectResult};
use crate::platform::Backend;
use crate::probe::{ProbeRunner, SystemProbeRunner};
use crate::types::{Device, Platform};

pub struct DeviceDetector<R: ProbeRunner> {
    runner: R,
    config: AvDevicesConfig,
}

impl<R: ProbeRunner> DeviceDetector<R> {
    pub fn new(runner: R, config: AvDevicesConfig) -> Self {
        Self { runner, config }
    }

    pub fn config(&self) -> &AvDevicesConfig {
        &self.config
    }

    /// Detect every device reported by the backends for `platform`.
    ///
    /// # Errors
    /// Fails on the first probe that cannot be started, and with
    /// [`DetectError::NoDevicesFound`] when all probes together report nothing.
    pub async fn detect(&self, platform: Platform) -> DetectResult<Vec<Device>> {
        let mut devices = Vec::new();

        for backend in Backend::for_platform(platform) {
            let found = self.detect_backend(*backend).await?;
            devices.extend(found);
        }

        if devices.is_empty() {
            return Err(DetectError::NoDevicesFound);
        }

        Ok(devices)
    }

    /// Run a single backend probe and parse its output
    pub async fn detect_backend(&self, backend: Backend) -> DetectResult<Vec<Device>> {
        let probe = backend.probe(&self.config.probes);
        let output = self.runner.run(&probe).await?;
        let devices = backend.parse(&output);
        log::info!("{} probe reported {} device(s)", backend, devices.len());
        Ok(devices)
    }
}

impl DeviceDetector<SystemProbeRunner> {
    pub fn system(config: AvDevicesConfig) -> Self {
        Self::new(SystemProbeRunner, config)
    }
}

/// Detect devices on this host using the default configuration file
pub async fn detect_devices() -> DetectResult<Vec<Device>> {
    DeviceDetector::system(AvDevicesConfig::load_or_default())
        .detect(Platform::current())
        .await
}
