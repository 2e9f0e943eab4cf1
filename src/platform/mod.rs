//! Probe backends and their output parsers
//!
//! Every parser is a pure function over the captured probe text, compiled on
//! all hosts so captured output can be parsed anywhere. [`Backend`] ties a
//! parser to the probe command that produces its input.

pub mod linux;
pub mod macos;
pub mod windows;

use crate::config::ProbeConfig;
use crate::probe::{Probe, ProbeStream};
use crate::types::{Device, Platform};
use std::fmt;
use std::str::FromStr;

pub use linux::{parse_audio_sources, parse_v4l2_devices};
pub use macos::parse_avfoundation_devices;
pub use windows::parse_dshow_devices;

/// A device enumeration backend with its own text format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// `v4l2-ctl --list-devices` (Linux video)
    V4l2,
    /// `ffmpeg -sources` (Linux audio: alsa, pulse, pipewire)
    AudioSources,
    /// `ffmpeg -f dshow -list_devices true` (Windows)
    DirectShow,
    /// `ffmpeg -f avfoundation -list_devices true` (macOS)
    AvFoundation,
}

impl Backend {
    pub const ALL: [Backend; 4] = [
        Backend::V4l2,
        Backend::AudioSources,
        Backend::DirectShow,
        Backend::AvFoundation,
    ];

    /// Backends to probe on the given host, in the order they are run
    pub fn for_platform(platform: Platform) -> &'static [Backend] {
        match platform {
            Platform::Linux => &[Backend::V4l2, Backend::AudioSources],
            Platform::Windows => &[Backend::DirectShow],
            Platform::MacOS | Platform::Unknown => &[Backend::AvFoundation],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::V4l2 => "v4l2",
            Backend::AudioSources => "sources",
            Backend::DirectShow => "dshow",
            Backend::AvFoundation => "avfoundation",
        }
    }

    /// Build the probe command for this backend from the configured tool paths
    pub fn probe(&self, config: &ProbeConfig) -> Probe {
        match self {
            Backend::V4l2 => Probe::new(&config.v4l2_ctl_path, &["--list-devices"], ProbeStream::Stdout),
            Backend::AudioSources => Probe::new(&config.ffmpeg_path, &["-sources"], ProbeStream::Stderr),
            Backend::DirectShow => Probe::new(
                &config.ffmpeg_path,
                &["-f", "dshow", "-list_devices", "true", "-i", "dummy"],
                ProbeStream::Stderr,
            ),
            Backend::AvFoundation => Probe::new(
                &config.ffmpeg_path,
                &["-f", "avfoundation", "-list_devices", "true", "-i", "dummy"],
                ProbeStream::Stderr,
            ),
        }
    }

    /// Parse captured probe output into device records
    pub fn parse(&self, output: &str) -> Vec<Device> {
        match self {
            Backend::V4l2 => parse_v4l2_devices(output),
            Backend::AudioSources => parse_audio_sources(output),
            Backend::DirectShow => parse_dshow_devices(output),
            Backend::AvFoundation => parse_avfoundation_devices(output),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v4l2" => Ok(Backend::V4l2),
            "sources" | "audio-sources" => Ok(Backend::AudioSources),
            "dshow" | "directshow" => Ok(Backend::DirectShow),
            "avfoundation" => Ok(Backend::AvFoundation),
            other => Err(format!(
                "Unknown backend '{}' (expected v4l2, sources, dshow or avfoundation)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backends_per_platform() {
        assert_eq!(
            Backend::for_platform(Platform::Linux),
            &[Backend::V4l2, Backend::AudioSources]
        );
        assert_eq!(Backend::for_platform(Platform::Windows), &[Backend::DirectShow]);
        assert_eq!(Backend::for_platform(Platform::MacOS), &[Backend::AvFoundation]);
        assert_eq!(Backend::for_platform(Platform::Unknown), &[Backend::AvFoundation]);
    }

    #[test]
    fn test_probe_streams() {
        let config = ProbeConfig::default();
        assert_eq!(Backend::V4l2.probe(&config).stream, ProbeStream::Stdout);
        for backend in [Backend::AudioSources, Backend::DirectShow, Backend::AvFoundation] {
            let probe = backend.probe(&config);
            assert_eq!(probe.stream, ProbeStream::Stderr);
            assert_eq!(probe.program, "ffmpeg");
        }
    }

    #[test]
    fn test_dshow_probe_args() {
        let probe = Backend::DirectShow.probe(&ProbeConfig::default());
        assert_eq!(probe.args, vec!["-f", "dshow", "-list_devices", "true", "-i", "dummy"]);
    }

    #[test]
    fn test_backend_round_trips_through_str() {
        for backend in Backend::ALL {
            assert_eq!(backend.as_str().parse::<Backend>(), Ok(backend));
        }
        assert!("gstreamer".parse::<Backend>().is_err());
    }
}
