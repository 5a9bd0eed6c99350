//! Centralized viewer options with TOML preset support.
//!
//! Chain parameters, camera behavior, viewport size, and colors are
//! consolidated here. Options serialize to/from TOML; every section uses
//! `#[serde(default)]` so partial files work.

mod camera;
mod chain;
mod colors;
mod viewport;

use std::path::Path;

pub use camera::CameraOptions;
pub use chain::ChainOptions;
pub use colors::ColorOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewport::ViewportOptions;

use crate::error::ChainViewError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Chain generation parameters.
    pub chain: ChainOptions,
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Drawing surface size.
    #[schemars(skip)]
    pub viewport: ViewportOptions,
    /// Palette and stroke options.
    #[schemars(skip)]
    pub colors: ColorOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The UI schema as a JSON string, for hosts that build controls
    /// from it.
    pub fn json_schema_string() -> Result<String, ChainViewError> {
        serde_json::to_string(&Self::json_schema())
            .map_err(|e| ChainViewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ChainViewError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ChainViewError> {
        toml::from_str(content)
            .map_err(|e| ChainViewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ChainViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ChainViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("saved options to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Rgb, RAINBOW};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r##"
[chain]
residue_count = 250

[colors]
origin = "#00ff00"
"##;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.chain.residue_count, 250);
        assert_eq!(opts.chain.angle_resolution, 20);
        assert_eq!(opts.colors.origin, Rgb::new(0, 0xFF, 0));
        assert_eq!(opts.colors.palette.0, RAINBOW);
        assert_eq!(opts.camera.distance, -150.0);
        assert_eq!(opts.viewport.center(), (300.0, 250.0));
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let err =
            Options::from_toml("[colors]\norigin = \"red\"\n").unwrap_err();
        assert!(matches!(err, ChainViewError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("preset.toml");
        let mut opts = Options::default();
        opts.chain.angle_resolution = 120;
        opts.camera.zoom_in_factor = 1.25;
        opts.save(&path).unwrap();
        assert_eq!(Options::load(&path).unwrap(), opts);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/chainview.toml"))
            .unwrap_err();
        assert!(matches!(err, ChainViewError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("chain"));
        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("colors"));
        assert!(!props.contains_key("viewport"));

        let chain = &props["chain"]["properties"];
        assert_eq!(chain["residue_count"]["maximum"].as_f64(), Some(1000.0));
        assert_eq!(chain["angle_resolution"]["minimum"].as_f64(), Some(4.0));
        assert!(chain.get("bond_length").is_none());

        let schema = Options::json_schema_string().unwrap();
        assert!(schema.contains("Residue Count"));
    }
}
