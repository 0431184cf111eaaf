pub mod config;
pub mod gesture;
pub mod report;

pub use config::{AppConfig, NavigationBarConfig, ScaleConfig};
pub use gesture::{GestureEvent, GestureScript};
pub use report::{Adjustment, BlendReport, ColorReport, ContrastReport, HsbReport};
