//! Tintkit - color tooling for UI theming
//!
//! Command-line front end and application services around `tint-core`:
//! YAML configuration with named colors, serializable color reports,
//! pinch gesture replay and the navigation bar appearance bridge.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
