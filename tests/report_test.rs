//! Color reports built from configured and literal colors.

mod common;

use common::fixtures;
use pretty_assertions::assert_eq;
use tint_core::Color;
use tintkit::models::{Adjustment, AppConfig, BlendReport, ColorReport, ContrastReport};

fn config() -> AppConfig {
    AppConfig::from_yaml_str(fixtures::CONFIG_YAML).unwrap()
}

#[test]
fn test_inspect_named_color() {
    let report = ColorReport::new(config().resolve_color("brand").unwrap());

    assert_eq!(report.hex, fixtures::colors::BRAND);
    assert_eq!(report.rgba, [0x33, 0x66, 0xCC, 0xFF]);
    assert!(!report.is_light);
    assert_eq!(report.contrasting_text_color, "#FFFFFF");
    assert!(report.contrast_on_white > report.contrast_on_black);
}

#[test]
fn test_red_reports_disagree_on_text_color() {
    let report = ColorReport::new(Color::rgb(1.0, 0.0, 0.0));

    assert_eq!(report.contrasting_text_color, "#FFFFFF");
    assert_eq!(report.best_contrasting_color, "#000000");
}

#[test]
fn test_contrast_threshold_greys() {
    let passing = ContrastReport::new(Color::from_u8(0x76, 0x76, 0x76), Color::WHITE);
    let failing = ContrastReport::new(Color::from_u8(0x77, 0x77, 0x77), Color::WHITE);

    assert!(passing.sufficient);
    assert_eq!(passing.level, "AA");
    assert!(!failing.sufficient);
    assert_eq!(failing.level, "AA large");
}

#[test]
fn test_contrast_report_json_shape() {
    let config = config();
    let report = ContrastReport::new(
        config.resolve_color("paper").unwrap(),
        config.resolve_color("paper").unwrap(),
    );
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["ratio"], 1.0);
    assert_eq!(json["sufficient"], false);
    assert_eq!(json["level"], "fail");
    assert_eq!(json["adaptive_foreground"], "#050505");
}

#[test]
fn test_adjustments_on_named_color() {
    let brand = config().resolve_color("brand").unwrap();

    let rotated = Adjustment::HueRotate.apply(brand, 360.0, 0.0, 1.0);
    common::assert_hex(rotated, fixtures::colors::BRAND);

    common::assert_hex(Adjustment::Brighten.apply(brand, 1.0, 0.0, 1.0), "#FFFFFF");
    common::assert_hex(Adjustment::Tint.apply(brand, -1.0, 0.0, 1.0), "#000000");
    common::assert_hex(Adjustment::Invert.apply(brand, 0.0, 0.0, 1.0), "#CC9933");
}

#[test]
fn test_blend_named_colors() {
    let config = config();
    let report = BlendReport::new(
        config.resolve_color("brand").unwrap(),
        config.resolve_color("brand").unwrap(),
        0.3,
    );

    assert_eq!(report.blended, fixtures::colors::BRAND);
    common::assert_close(report.distance, 0.0);
}
