//! Core device record types shared by every backend parser

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of capture device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Audio,
    Video,
}

impl DeviceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceKind::Audio => "Audio",
            DeviceKind::Video => "Video",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A capture device discovered by one of the probe backends.
///
/// Only `kind` and `name` are always present. The optional fields carry
/// backend-specific addressing information:
/// - `id`: avfoundation device index
/// - `alternative_name`: dshow alternative name, or `backend:device-id` for Linux audio
/// - `device_paths`: `/dev/videoN` nodes reported by v4l2
///
/// Absent optionals are left out of the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub kind: DeviceKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_paths: Option<Vec<String>>,
}

impl Device {
    pub fn new(kind: DeviceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            id: None,
            alternative_name: None,
            device_paths: None,
        }
    }

    pub fn audio(name: impl Into<String>) -> Self {
        Self::new(DeviceKind::Audio, name)
    }

    pub fn video(name: impl Into<String>) -> Self {
        Self::new(DeviceKind::Video, name)
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_alternative_name(mut self, alternative_name: impl Into<String>) -> Self {
        self.alternative_name = Some(alternative_name.into());
        self
    }

    pub fn with_device_paths(mut self, paths: Vec<String>) -> Self {
        self.device_paths = Some(paths);
        self
    }

    pub fn is_audio(&self) -> bool {
        self.kind == DeviceKind::Audio
    }

    pub fn is_video(&self) -> bool {
        self.kind == DeviceKind::Video
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.name)?;
        if let Some(id) = self.id {
            write!(f, " (id {})", id)?;
        }
        if let Some(alt) = &self.alternative_name {
            write!(f, " ({})", alt)?;
        }
        if let Some(paths) = &self.device_paths {
            write!(f, " ({})", paths.join(", "))?;
        }
        Ok(())
    }
}

/// Host platform, used to pick the probe backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    Unknown,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::MacOS => "macos",
            Platform::Linux => "linux",
            Platform::Unknown => "unknown",
        }
    }
}
