//! Serialized form of configuration types.

#![cfg(feature = "serde")]

use zencanvas::*;

#[test]
fn rotation_names_match_nicknames() {
    for rotation in InnerRotation::ALL {
        let json = serde_json::to_string(&rotation).unwrap();
        assert_eq!(json, format!("\"{}\"", rotation.nick()));
        let back: InnerRotation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rotation);
    }
    assert_eq!(
        serde_json::to_string(&InnerRotation::Rotate90).unwrap(),
        "\"rotate-90\""
    );
    assert!(serde_json::from_str::<InnerRotation>("\"rotate90\"").is_err());
}

#[test]
fn fill_color_is_a_bare_integer() {
    let json = serde_json::to_string(&FillColor::from_rgba(0x10, 0x20, 0x30, 0xFF)).unwrap();
    assert_eq!(json, 0x1020_30FFu32.to_string());
    let back: FillColor = serde_json::from_str("4294967295").unwrap();
    assert_eq!(back, FillColor::WHITE);
}

#[test]
fn partial_config_takes_defaults() {
    let config: CanvasConfig = serde_json::from_str(
        r#"{
            "outer_region": { "x": -100, "y": 0, "width": 800, "height": 600 },
            "inner_rotation": "rotate-270"
        }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        CanvasConfig::new(Region::new(-100, 0, 800, 600)).rotation(InnerRotation::Rotate270)
    );
    assert_eq!(config.fill_color, FillColor::BLACK);
    assert_eq!(config.margins, Margins::ZERO);
    assert!(!config.keep_aspect_ratio);

    let empty: CanvasConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, CanvasConfig::default());
}

#[test]
fn config_round_trips_into_same_geometry() {
    let config = CanvasConfig::new(Region::new(10, 20, 640, 360))
        .margins(Margins::new(1, 2, 3, 4))
        .keep_aspect_ratio(true)
        .rotation(InnerRotation::HorizontalFlip)
        .fill_color(FillColor::TRANSPARENT);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"horizontal-flip\""), "{json}");
    let back: CanvasConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let frame: FrameInfo =
        serde_json::from_str(r#"{ "width": 720, "height": 576, "par_n": 16, "par_d": 15 }"#)
            .unwrap();
    assert_eq!(frame, FrameInfo::new(720, 576).with_pixel_aspect_ratio(16, 15));
    assert_eq!(back.compute_inner(&frame), config.compute_inner(&frame));
}
