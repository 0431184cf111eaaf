use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ReplayError;

/// One recorded pinch sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureEvent {
    /// Magnification sample while the fingers are down
    Update(f64),
    /// Final magnification when the fingers lift
    End(f64),
    /// Double-tap style reset to 1.0
    Reset,
}

/// A recorded sequence of pinch events, loaded from YAML:
///
/// ```yaml
/// events:
///   - update: 1.5
///   - update: 2.2
///   - end: 2.2
///   - reset
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureScript {
    /// Events read as single-key maps (`update: 1.5`) or bare names (`reset`)
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub events: Vec<GestureEvent>,
}

impl GestureScript {
    pub fn from_yaml_str(content: &str) -> Result<Self, ReplayError> {
        let script: Self = serde_yaml::from_str(content)?;
        if script.events.is_empty() {
            return Err(ReplayError::Empty);
        }
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            events = script.events.len(),
            "Loaded gesture script"
        );
        Ok(script)
    }
}
