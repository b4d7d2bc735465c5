extern crate lumen;

use std::path::Path;

use lumen::application::Settings;
use lumen::math::Vector2;

#[test]
fn defaults() {
    let settings = Settings::new("Advanced OpenGL - Instancing", 800, 600);
    assert_eq!(settings.window.title, "Advanced OpenGL - Instancing");
    assert_eq!(settings.window.size, Vector2::new(800, 600));
    assert_eq!(settings.window.multisample, 0);
    assert!(settings.window.vsync);
    assert_eq!(settings.engine.max_fps, 0);
    assert_eq!(settings.engine.fps_refresh, 0.25);
    assert!(settings.engine.capture_cursor);
    assert!(settings.engine.overrides.is_none());

    let settings = settings.with_overrides("settings/instancing.json");
    assert_eq!(
        settings.engine.overrides.as_ref().map(|v| v.as_path()),
        Some(Path::new("settings/instancing.json"))
    );
}

#[test]
fn partial_overrides() {
    let mut settings = Settings::new("Demo", 800, 600);
    settings
        .apply_overrides_str(r#"{ "size": [1280, 720], "vsync": false, "max_fps": 60 }"#)
        .unwrap();

    assert_eq!(settings.window.title, "Demo");
    assert_eq!(settings.window.size, Vector2::new(1280, 720));
    assert!(!settings.window.vsync);
    assert_eq!(settings.engine.max_fps, 60);
    assert!(settings.engine.capture_cursor);

    settings
        .apply_overrides_str(r#"{ "title": "Other", "capture_cursor": false, "multisample": 4 }"#)
        .unwrap();

    assert_eq!(settings.window.title, "Other");
    assert_eq!(settings.window.multisample, 4);
    assert!(!settings.engine.capture_cursor);
}

#[test]
fn invalid_overrides() {
    let mut settings = Settings::new("Demo", 800, 600);
    assert!(settings.apply_overrides_str(r#"{ "size": [0, 720] }"#).is_err());
    assert!(settings.apply_overrides_str(r#"{ "fps_refresh": 0.0 }"#).is_err());
    assert!(settings.apply_overrides_str(r#"{ "fullscreen": true }"#).is_err());
    assert!(settings.apply_overrides_str("not json").is_err());

    assert_eq!(settings.window.size, Vector2::new(800, 600));
    assert_eq!(settings.engine.fps_refresh, 0.25);
}

#[test]
fn missing_file_is_ignored() {
    let mut settings = Settings::new("Demo", 800, 600);
    assert!(!settings.load_overrides("settings/_missing_.json").unwrap());
    assert_eq!(settings.window.size, Vector2::new(800, 600));
}

#[test]
fn shipped_files_are_valid() {
    for name in &["instancing", "showcase"] {
        let mut settings = Settings::new("Demo", 800, 600);
        let path = format!("settings/{}.json", name);
        assert!(settings.load_overrides(&path).unwrap());
        assert_eq!(settings.window.multisample, 4);
    }
}
