//! View settings loaded from JSON.
//!
//! ```json
//! {
//!   "border_style": "ascii",
//!   "borders": { "top_left": "#", "4": "#" },
//!   "output": "instant",
//!   "width_policy": "east_asian"
//! }
//! ```

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::border::{BorderKey, BorderSet};
use crate::error::ViewError;
use crate::grid::WidthPolicy;
use crate::view::{OutputMode, View};

#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
    Border(ViewError),
    /// A border value that is not exactly one glyph.
    InvalidGlyph { key: String, value: String },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Invalid settings: {}", e),
            SettingsError::Border(e) => write!(f, "Invalid border setting: {}", e),
            SettingsError::InvalidGlyph { key, value } => {
                write!(f, "Border '{}' must be a single glyph, got '{}'", key, value)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Border(e) => Some(e),
            SettingsError::InvalidGlyph { .. } => None,
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl From<ViewError> for SettingsError {
    fn from(e: ViewError) -> Self {
        SettingsError::Border(e)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    Default,
    Ascii,
}

impl BorderStyle {
    pub fn set(self) -> BorderSet {
        match self {
            BorderStyle::Default => BorderSet::DEFAULT,
            BorderStyle::Ascii => BorderSet::ASCII,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_style: Option<BorderStyle>,
    /// Per-glyph overrides keyed by slot name or index, applied after `border_style`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub borders: BTreeMap<String, String>,
    #[serde(default)]
    pub output: OutputMode,
    #[serde(default)]
    pub width_policy: WidthPolicy,
}

impl ViewSettings {
    pub fn from_json(data: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Applies the settings to `view`. Nothing is changed if any border entry is invalid.
    pub fn apply(&self, view: &mut View) -> Result<(), SettingsError> {
        let overrides = self.border_overrides()?;

        if let Some(style) = self.border_style {
            view.replace_all_borders(style.set());
        }
        for (key, glyph) in overrides {
            view.override_border_glyph(key, glyph);
        }
        view.set_output_mode(self.output)
            .set_width_policy(self.width_policy);
        Ok(())
    }

    fn border_overrides(&self) -> Result<Vec<(BorderKey, char)>, SettingsError> {
        self.borders
            .iter()
            .map(|(key, value)| {
                let slot = BorderKey::parse(key)
                    .ok_or_else(|| ViewError::ConfigKeyNotFound(key.clone()))?;
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(glyph), None) => Ok((slot, glyph)),
                    _ => Err(SettingsError::InvalidGlyph {
                        key: key.clone(),
                        value: value.clone(),
                    }),
                }
            })
            .collect()
    }
}

pub fn load_settings(path: &Path) -> Result<ViewSettings, SettingsError> {
    let data = std::fs::read_to_string(path)?;
    let settings = ViewSettings::from_json(&data)?;
    tracing::info!(path = %path.display(), "view settings loaded");
    Ok(settings)
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
