//! Test fixtures and constants.

use std::io::Write;
use tempfile::NamedTempFile;

/// Named colors available in [`CONFIG_YAML`]
pub mod colors {
    pub const BRAND: &str = "#3366CC";
    pub const PAPER: &str = "#FAFAFA";
    pub const INK: &str = "#1E1E2E";
}

/// A complete configuration exercising every section
pub const CONFIG_YAML: &str = r##"
scale:
  min: 0.5
  max: 3.0
colors:
  brand: "#3366CC"
  paper: "#FAFAFA"
  ink: "#1E1E2E"
navigation_bar:
  background: ink
"##;

/// Pinch in, overshoot the upper bound, lift, then reset
pub const OVERSHOOT_SCRIPT: &str = r#"
events:
  - update: 1.0
  - update: 2.0
  - update: 5.0
  - end: 5.0
  - reset
"#;

/// Two consecutive gestures that compound
pub const COMPOUND_SCRIPT: &str = r#"
events:
  - update: 1.5
  - end: 1.5
  - update: 1.5
  - end: 1.5
"#;

/// Write `content` to a temporary YAML file that lives as long as the handle
pub fn yaml_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
