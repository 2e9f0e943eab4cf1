//! Parser tests against captured probe output from real hosts

#[cfg(test)]
mod parser_fixture_tests {
    use avdevices::platform::{
        parse_audio_sources, parse_avfoundation_devices, parse_dshow_devices, parse_v4l2_devices,
    };
    use avdevices::{Backend, Device, DeviceKind};

    const DSHOW: &str = include_str!("fixtures/dshow.txt");
    const AVFOUNDATION: &str = include_str!("fixtures/avfoundation.txt");
    const V4L2: &str = include_str!("fixtures/v4l2.txt");
    const SOURCES: &str = include_str!("fixtures/sources.txt");

    #[test]
    fn test_dshow_fixture() {
        let devices = parse_dshow_devices(DSHOW);

        let names: Vec<&str> = devices.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Integrated Camera",
                "OBS Virtual Camera",
                "Microphone Array (Realtek(R) Audio)",
                "Stereo Mix (Realtek(R) Audio)",
            ]
        );

        assert_eq!(devices[0].kind, DeviceKind::Video);
        assert_eq!(devices[1].kind, DeviceKind::Video);
        assert_eq!(devices[2].kind, DeviceKind::Audio);
        assert_eq!(devices[3].kind, DeviceKind::Audio);

        assert!(devices[0]
            .alternative_name
            .as_deref()
            .unwrap()
            .starts_with("@device_pnp_\\\\?\\usb#vid_04f2"));
        assert!(devices[2]
            .alternative_name
            .as_deref()
            .unwrap()
            .starts_with("@device_cm_"));
        assert!(devices[3].alternative_name.is_none());
        assert!(devices.iter().all(|d| d.id.is_none() && d.device_paths.is_none()));
    }

    #[test]
    fn test_dshow_end_to_end_example() {
        let output = "[dshow @ 000001] \"Integrated Camera\" (video)\n\
                      [dshow @ 000001] Alternative name \"@device_pnp_\\\\?\\usb#vid_0000\"";
        assert_eq!(
            parse_dshow_devices(output),
            vec![Device::video("Integrated Camera").with_alternative_name("@device_pnp_\\\\?\\usb#vid_0000")]
        );
    }

    #[test]
    fn test_dshow_alternative_name_only_from_next_line() {
        let output = "[dshow @ 1] \"Cam A\" (video)\n\
                      [dshow @ 1] \"Cam B\" (video)\n\
                      [dshow @ 1] Alternative name \"@b\"\n";
        let devices = parse_dshow_devices(output);

        assert_eq!(devices.len(), 2);
        assert!(devices[0].alternative_name.is_none());
        assert_eq!(devices[1].alternative_name.as_deref(), Some("@b"));
    }

    #[test]
    fn test_avfoundation_fixture() {
        let devices = parse_avfoundation_devices(AVFOUNDATION);

        assert_eq!(
            devices,
            vec![
                Device::video("FaceTime HD Camera").with_id(0),
                Device::video("iPhone Camera").with_id(1),
                Device::video("Capture screen 0").with_id(2),
                Device::audio("MacBook Pro Microphone").with_id(0),
                Device::audio("iPhone Microphone").with_id(1),
            ]
        );
    }

    #[test]
    fn test_v4l2_fixture() {
        let devices = parse_v4l2_devices(V4L2);

        assert_eq!(devices.len(), 3);
        assert_eq!(devices[0].name, "Integrated_Webcam_HD: Integrate (usb-0000:00:14.0-5)");
        assert_eq!(
            devices[0].device_paths,
            Some(vec!["/dev/video0".to_string(), "/dev/video1".to_string()])
        );
        assert_eq!(
            devices[1].device_paths,
            Some(vec!["/dev/video2".to_string(), "/dev/video3".to_string()])
        );
        assert_eq!(devices[2].name, "ipu6 (PCI:0000:00:05.0)");
        assert_eq!(devices[2].device_paths, Some(Vec::new()));
        assert!(devices.iter().all(|d| d.kind == DeviceKind::Video && d.alternative_name.is_none()));
    }

    #[test]
    fn test_sources_fixture() {
        let devices = parse_audio_sources(SOURCES);

        assert_eq!(
            devices,
            vec![
                Device::audio("Default ALSA Output (currently PipeWire Media Server)")
                    .with_alternative_name("pulse:default"),
                Device::audio("Family 17h HD Audio Controller Analog Stereo")
                    .with_alternative_name("pulse:alsa_input.pci-0000_0b_00.4.analog-stereo"),
                Device::audio("Yeti Stereo Microphone Analog Stereo")
                    .with_alternative_name("pulse:alsa_input.usb-Blue_Microphones_Yeti.analog-stereo"),
            ]
        );
    }

    #[test]
    fn test_sources_end_to_end_example() {
        let output = "Auto-detected sources for pulse:\n  default [Default ALSA Output (currently PipeWire)] (none)";
        assert_eq!(
            parse_audio_sources(output),
            vec![Device::audio("Default ALSA Output (currently PipeWire)").with_alternative_name("pulse:default")]
        );
    }

    #[test]
    fn test_backend_parse_dispatches_to_parser() {
        assert_eq!(Backend::DirectShow.parse(DSHOW), parse_dshow_devices(DSHOW));
        assert_eq!(Backend::AvFoundation.parse(AVFOUNDATION), parse_avfoundation_devices(AVFOUNDATION));
        assert_eq!(Backend::V4l2.parse(V4L2), parse_v4l2_devices(V4L2));
        assert_eq!(Backend::AudioSources.parse(SOURCES), parse_audio_sources(SOURCES));
    }

    #[test]
    fn test_parsers_tolerate_foreign_output() {
        // Each parser fed another backend's output must not panic
        for backend in Backend::ALL {
            for text in [DSHOW, AVFOUNDATION, V4L2, SOURCES, ""] {
                let _ = backend.parse(text);
            }
        }
        assert!(parse_dshow_devices(AVFOUNDATION).is_empty());
        assert!(parse_audio_sources(DSHOW).is_empty());
    }

    #[test]
    fn test_parsing_is_repeatable() {
        for backend in Backend::ALL {
            for text in [DSHOW, AVFOUNDATION, V4L2, SOURCES] {
                assert_eq!(backend.parse(text), backend.parse(text));
            }
        }
    }
}
