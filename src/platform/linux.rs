//! Linux probe output parsers
//!
//! Video devices come from `v4l2-ctl --list-devices` (stdout):
//!
//! ```text
//! Integrated Camera: Integrated C (usb-0000:00:14.0-8):
//!         /dev/video0
//!         /dev/video1
//!         /dev/media0
//! ```
//!
//! Audio devices come from `ffmpeg -sources` (stderr):
//!
//! ```text
//! Auto-detected sources for pulse:
//! * alsa_input.pci-0000_00_1f.3.analog-stereo [Built-in Audio Analog Stereo] (none)
//!   alsa_output.pci-0000_00_1f.3.analog-stereo.monitor [Monitor of Built-in Audio] (none)
//! Auto-detected sources for alsa:
//! Cannot list sources: Not implemented
//! ```

use crate::types::Device;

const VIDEO_PATH_PREFIX: &str = "/dev/video";
const SOURCES_HEADER: &str = "Auto-detected sources for ";
const CANNOT_LIST: &str = "Cannot list";
const CANNOT_LIST_SOURCES: &str = "Cannot list sources";

/// Audio backends whose `-sources` listing is trusted to contain capture inputs
pub const AUDIO_SOURCE_BACKENDS: &[&str] = &["alsa", "pulse", "pipewire"];

/// Parse `v4l2-ctl --list-devices` output.
///
/// Each group header becomes one video device whose `device_paths` keeps the
/// `/dev/videoN` nodes in the order they were listed. Groups are emitted in
/// first-seen order; a repeated header appends to the existing group.
pub fn parse_v4l2_devices(output: &str) -> Vec<Device> {
    let (groups, _) = output.lines().fold(
        (Vec::<(String, Vec<String>)>::new(), None::<usize>),
        |(mut groups, current), line| {
            let trimmed = line.trim();

            if is_group_header(line, trimmed) {
                let name = trimmed.trim_end_matches(':');
                let index = match groups.iter().position(|(existing, _)| existing == name) {
                    Some(index) => index,
                    None => {
                        groups.push((name.to_string(), Vec::new()));
                        groups.len() - 1
                    }
                };
                return (groups, Some(index));
            }

            if let Some(index) = current {
                if trimmed.starts_with(VIDEO_PATH_PREFIX) {
                    groups[index].1.push(trimmed.to_string());
                }
            }

            (groups, current)
        },
    );

    groups
        .into_iter()
        .map(|(name, paths)| Device::video(name).with_device_paths(paths))
        .collect()
}

fn is_group_header(line: &str, trimmed: &str) -> bool {
    !trimmed.is_empty() && !line.starts_with(char::is_whitespace) && trimmed.ends_with(':')
}

/// Parse `ffmpeg -sources` output into audio devices.
///
/// Only sections for [`AUDIO_SOURCE_BACKENDS`] are read. Monitor taps
/// (description mentions "monitor" but not "input") are dropped.
pub fn parse_audio_sources(output: &str) -> Vec<Device> {
    let mut devices = Vec::new();
    let mut backend: Option<&str> = None;

    for line in output.lines() {
        let trimmed = line.trim();

        if line.starts_with(SOURCES_HEADER) {
            backend = extract_backend_name(line).filter(|name| AUDIO_SOURCE_BACKENDS.contains(name));
            if backend.is_none() {
                log::trace!("Ignoring sources section: {}", trimmed);
            }
            continue;
        }

        if trimmed.starts_with(SOURCES_HEADER.trim_end()) || trimmed.starts_with(CANNOT_LIST_SOURCES) {
            backend = None;
            continue;
        }

        let Some(name) = backend else {
            continue;
        };

        if trimmed.is_empty() || trimmed.starts_with(CANNOT_LIST) {
            continue;
        }

        if let Some(device) = parse_source_line(trimmed, name) {
            devices.push(device);
        }
    }

    devices
}

fn extract_backend_name(line: &str) -> Option<&str> {
    let start = line.find("for ")? + "for ".len();
    let end = start + line[start..].find(':')?;
    if end > start {
        Some(&line[start..end])
    } else {
        None
    }
}

/// Parse one `[*] <device-id> [<description>] (<suffix>)` line
fn parse_source_line(line: &str, backend: &str) -> Option<Device> {
    let trimmed = line.trim_start_matches(['*', ' ']);
    if trimmed.is_empty() {
        return None;
    }

    let open = trimmed.find('[');
    let close = trimmed.rfind(']');
    let (open, close) = match (open, close) {
        (Some(open), Some(close)) if open > 0 && close > open => (open, close),
        _ => {
            log::trace!("Skipping malformed source line: {}", line);
            return None;
        }
    };

    let device_id = trimmed[..open].trim();
    let description = &trimmed[open + 1..close];

    if is_monitor(description) {
        log::trace!("Skipping monitor source: {}", description);
        return None;
    }

    Some(Device::audio(description).with_alternative_name(format!("{}:{}", backend, device_id)))
}

fn is_monitor(description: &str) -> bool {
    let lower = description.to_lowercase();
    lower.contains("monitor") && !lower.contains("input")
}
