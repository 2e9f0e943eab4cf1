//! DirectShow device listing parser
//!
//! Parses the stderr of `ffmpeg -f dshow -list_devices true -i dummy`:
//!
//! ```text
//! [dshow @ 000001] "Integrated Camera" (video)
//! [dshow @ 000001]   Alternative name "@device_pnp_\\?\usb#vid_0000"
//! [dshow @ 000001] "Microphone Array (Realtek Audio)" (audio)
//! [dshow @ 000001]   Alternative name "@device_cm_{33D9A762}\wave_{A1B2}"
//! ```

use crate::types::{Device, DeviceKind};

const PROVIDER_TAG: &str = "[dshow @";
const ALTERNATIVE_NAME: &str = "Alternative name";
const ALTERNATIVE_NAME_PREFIX: &str = "Alternative name \"";

/// Parse DirectShow device listing output into device records.
///
/// A pair of adjacent quotes (`""`) still yields a record, with an empty name.
pub fn parse_dshow_devices(output: &str) -> Vec<Device> {
    let lines: Vec<&str> = output.lines().map(str::trim).collect();
    let mut devices = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if !is_device_line(line) {
            continue;
        }

        let Some((kind, name)) = extract_device_info(line) else {
            log::trace!("Skipping dshow line without a quoted name: {}", line);
            continue;
        };

        let mut device = Device::new(kind, name);

        // The alternative name, when present, is always on the very next line
        if let Some(next) = lines.get(index + 1) {
            if next.starts_with(PROVIDER_TAG) && next.contains(ALTERNATIVE_NAME) {
                if let Some(alternative) = extract_alternative_name(next) {
                    device = device.with_alternative_name(alternative);
                }
            }
        }

        devices.push(device);
    }

    devices
}

fn is_device_line(line: &str) -> bool {
    line.starts_with(PROVIDER_TAG) && line.contains('"') && !line.contains(ALTERNATIVE_NAME)
}

fn extract_device_info(line: &str) -> Option<(DeviceKind, &str)> {
    let first = line.find('"')?;
    let last = line.rfind('"')?;
    if first == last {
        return None;
    }

    let kind = if line.contains("(video)") {
        DeviceKind::Video
    } else {
        DeviceKind::Audio
    };

    Some((kind, &line[first + 1..last]))
}

fn extract_alternative_name(line: &str) -> Option<&str> {
    let start = line.find(ALTERNATIVE_NAME_PREFIX)? + ALTERNATIVE_NAME_PREFIX.len();
    let end = start + line[start..].find('"')?;
    if end > start {
        Some(&line[start..end])
    } else {
        None
    }
}
