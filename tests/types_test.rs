#[cfg(test)]
mod types_tests {
    use avdevices::{to_json, Device, DeviceKind, Platform};
    use serde_json::{json, Value};

    #[test]
    fn test_device_kind_serializes_as_string() {
        assert_eq!(serde_json::to_value(DeviceKind::Audio).unwrap(), json!("Audio"));
        assert_eq!(serde_json::to_value(DeviceKind::Video).unwrap(), json!("Video"));
    }

    #[test]
    fn test_required_fields_only() {
        let value = serde_json::to_value(Device::audio("Mic")).unwrap();
        assert_eq!(value, json!({ "kind": "Audio", "name": "Mic" }));
    }

    #[test]
    fn test_each_optional_field_appears_only_when_set() {
        let devices = vec![
            Device::video("FaceTime HD Camera").with_id(0),
            Device::video("Integrated Camera").with_alternative_name("@device_pnp_x"),
            Device::video("Webcam").with_device_paths(vec!["/dev/video0".into(), "/dev/video1".into()]),
        ];
        let value: Value = serde_json::from_str(&to_json(&devices, true).unwrap()).unwrap();

        assert_eq!(value[0], json!({ "kind": "Video", "name": "FaceTime HD Camera", "id": 0 }));
        assert_eq!(
            value[1],
            json!({ "kind": "Video", "name": "Integrated Camera", "alternativeName": "@device_pnp_x" })
        );
        assert_eq!(
            value[2],
            json!({ "kind": "Video", "name": "Webcam", "devicePaths": ["/dev/video0", "/dev/video1"] })
        );
    }

    #[test]
    fn test_empty_path_list_is_kept() {
        let value = serde_json::to_value(Device::video("ipu6").with_device_paths(Vec::new())).unwrap();
        assert_eq!(value["devicePaths"], json!([]));
    }

    #[test]
    fn test_deserialize_without_optionals() {
        let device: Device = serde_json::from_str(r#"{"kind":"Video","name":"Cam"}"#).unwrap();
        assert_eq!(device, Device::video("Cam"));
    }

    #[test]
    fn test_names_keep_punctuation() {
        let name = "Microphone Array (Realtek(R) Audio) \"β\"";
        let json = to_json(&[Device::audio(name)], false).unwrap();
        let back: Vec<Device> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0].name, name);
    }

    #[test]
    fn test_platform_current_is_known_on_ci_hosts() {
        if cfg!(any(target_os = "linux", target_os = "windows", target_os = "macos")) {
            assert_ne!(Platform::current(), Platform::Unknown);
        }
    }
}
