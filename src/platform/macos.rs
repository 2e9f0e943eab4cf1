//! AVFoundation device listing parser
//!
//! Parses the stderr of `ffmpeg -f avfoundation -list_devices true -i dummy`.
//! Devices are listed by index under a video and an audio section header:
//!
//! ```text
//! [AVFoundation indev @ 0x7f8] AVFoundation video devices:
//! [AVFoundation indev @ 0x7f8] [0] FaceTime HD Camera
//! [AVFoundation indev @ 0x7f8] [1] Capture screen 0
//! [AVFoundation indev @ 0x7f8] AVFoundation audio devices:
//! [AVFoundation indev @ 0x7f8] [0] MacBook Pro Microphone
//! ```

use crate::types::{Device, DeviceKind};
use lazy_static::lazy_static;
use regex::Regex;

const VIDEO_HEADER: &str = "AVFoundation video devices:";
const AUDIO_HEADER: &str = "AVFoundation audio devices:";

lazy_static! {
    static ref DEVICE_LINE: Regex = Regex::new(r"\[(\d+)\]\s+(.+)").unwrap();
}

/// Parse AVFoundation device listing output into device records.
///
/// Lines before any section header are treated as video devices. An index
/// followed only by whitespace yields a record with an empty name.
pub fn parse_avfoundation_devices(output: &str) -> Vec<Device> {
    output
        .lines()
        .fold(
            (DeviceKind::Video, Vec::new()),
            |(section, mut devices), line| {
                if line.contains(VIDEO_HEADER) {
                    return (DeviceKind::Video, devices);
                }
                if line.contains(AUDIO_HEADER) {
                    return (DeviceKind::Audio, devices);
                }
                if let Some(device) = parse_device_line(line, section) {
                    devices.push(device);
                }
                (section, devices)
            },
        )
        .1
}

fn parse_device_line(line: &str, kind: DeviceKind) -> Option<Device> {
    let captures = DEVICE_LINE.captures(line)?;
    let id = match captures[1].parse::<u32>() {
        Ok(id) => id,
        Err(e) => {
            log::trace!("Skipping avfoundation line with bad index ({}): {}", e, line);
            return None;
        }
    };
    let name = captures[2].trim();

    Some(Device::new(kind, name).with_id(id))
}
