//! Configuration for the press button.
//!
//! Loaded from JSON; every field is optional:
//!
//! ```json
//! {
//!   "timing": { "stage_delay_ms": 700, "settle_delay_ms": 500 },
//!   "palette": "colornames.json"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::names::ColorNameTable;
use crate::reveal::{RevealTiming, TimingConfig};

/// Press button configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PressConfig {
    /// Reveal animation delays
    pub timing: TimingConfig,
    /// `color-name-list` style JSON palette; the built-in table when unset
    pub palette: Option<PathBuf>,
}

impl PressConfig {
    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON file.
    ///
    /// A relative palette path is resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        if let (Some(palette), Some(dir)) = (config.palette.as_mut(), path.parent()) {
            if palette.is_relative() {
                *palette = dir.join(&*palette);
            }
        }
        tracing::debug!(?config, "Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// The reveal delays.
    pub fn reveal_timing(&self) -> RevealTiming {
        self.timing.into()
    }

    /// The configured palette, or the built-in one.
    pub fn palette(&self) -> Result<ColorNameTable> {
        match &self.palette {
            Some(path) => ColorNameTable::load(path),
            None => Ok(ColorNameTable::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::names::NameLookup;
    use std::time::Duration;

    #[test]
    fn empty_document_uses_defaults() {
        let config = PressConfig::from_json_str("{}").unwrap();
        assert_eq!(config.reveal_timing(), RevealTiming::default());
        assert!(config.palette.is_none());
        assert_eq!(config.palette().unwrap().len(), ColorNameTable::builtin().len());
    }

    #[test]
    fn timing_overrides() {
        let config = PressConfig::from_json_str(
            r#"{ "timing": { "stage_delay_ms": 700, "settle_delay_ms": 250 } }"#,
        )
        .unwrap();
        let timing = config.reveal_timing();
        assert_eq!(timing.stage_delay, Duration::from_millis(700));
        assert_eq!(timing.settle_delay, Duration::from_millis(250));
    }

    #[test]
    fn load_resolves_palette_next_to_config() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path();
        std::fs::write(
            dir.join("names.json"),
            r##"[{ "name": "Only Teal", "hex": "#00ABA9" }]"##,
        )
        .unwrap();
        std::fs::write(dir.join("press.json"), r#"{ "palette": "names.json" }"#).unwrap();

        let config = PressConfig::load(dir.join("press.json")).unwrap();
        assert_eq!(config.palette.as_deref(), Some(dir.join("names.json").as_path()));
        let palette = config.palette().unwrap();
        assert_eq!(palette.resolve("#FF0000").name, "Only Teal");
    }

    #[test]
    fn missing_palette_file_is_an_io_error() {
        let config = PressConfig {
            palette: Some(PathBuf::from("/definitely/not/here.json")),
            ..PressConfig::default()
        };
        assert!(matches!(config.palette(), Err(Error::Io(_))));
    }
}
