use park_domain::config::{AppConfig, LoggingConfig, ReplayConfig, WindowConfig};
use park_domain::events::{MouseClick, Vec2};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.console);
    assert!(logging.path.is_none());
    assert_eq!(logging.max_files, 10);

    let window = WindowConfig::default();
    assert_eq!((window.width, window.height), (1280, 720));

    let replay = ReplayConfig::default();
    assert_eq!(replay.frames, 120);
}

#[test]
fn app_config_deserializes_partial_documents() {
    let raw = json!({
        "logging": { "level": "debug", "path": "/tmp/park-logs" },
        "replay": { "frames": 10 }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.console, "unspecified fields keep their defaults");
    assert_eq!(cfg.logging.path, Some(std::path::PathBuf::from("/tmp/park-logs")));
    assert_eq!(cfg.replay.frames, 10);
    assert_eq!(cfg.replay.frame_millis, 16);
    assert_eq!(cfg.window.title, "ParkLogic");
}

#[test]
fn events_serialize_with_field_names() {
    let click = MouseClick { button: 1, position: Vec2::new(4.0, 2.5), down: true };
    let value = serde_json::to_value(click).expect("event serialize");
    assert_eq!(value, json!({ "button": 1, "position": { "x": 4.0, "y": 2.5 }, "down": true }));
}
