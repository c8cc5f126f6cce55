//! Main GridMapConfig and map construction.

use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::grid::GridMap;

use super::error::ConfigLoadError;
use super::sections::{GridSection, LayerSection};

/// Default config file location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/grid_map.yaml";

/// Grid map configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct GridMapConfig {
    /// Geometry settings
    #[serde(default)]
    pub grid: GridSection,

    /// Layer settings
    #[serde(default)]
    pub layers: LayerSection,
}

impl GridMapConfig {
    /// Load configuration from a YAML file.
    ///
    /// Errors name the offending file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigLoadError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&contents).map_err(|e| match e {
            ConfigLoadError::Parse(msg) => {
                ConfigLoadError::Parse(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        debug!(
            "[GridMapConfig] Loaded {} ({} layers @ {:.3}m)",
            path.display(),
            config.layers.names.len(),
            config.grid.resolution
        );
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigLoadError> {
        if path.exists() {
            return Self::load(path);
        }
        warn!(
            "[GridMapConfig] {} not found, using built-in defaults",
            path.display()
        );
        Ok(Self::default())
    }

    /// Load from the default config path (configs/grid_map.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        Self::load_or_default(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Build an empty map with the configured geometry and layers
    pub fn build(&self) -> Result<GridMap, ConfigLoadError> {
        let mut map = GridMap::with_geometry(
            self.layers.names.iter().cloned(),
            self.grid.length(),
            self.grid.resolution,
            self.grid.position(),
        )?;
        map.set_basic_layers(self.layers.basic.iter().cloned())?;

        debug!(
            "[GridMapConfig] Built {} map with {} layers",
            map.size(),
            map.layers().len()
        );
        Ok(map)
    }
}
