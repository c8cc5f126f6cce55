//! Grid and layer configuration sections.

use serde::{Deserialize, Serialize};

use crate::core::{Length, Position};

use super::defaults;

/// Grid geometry section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// Cell resolution (meters)
    #[serde(default = "defaults::resolution")]
    pub resolution: f64,

    /// Map side length along x (meters)
    #[serde(default = "defaults::length")]
    pub length_x: f64,

    /// Map side length along y (meters)
    #[serde(default = "defaults::length")]
    pub length_y: f64,

    /// Initial center X (meters)
    #[serde(default)]
    pub position_x: f64,

    /// Initial center Y (meters)
    #[serde(default)]
    pub position_y: f64,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            resolution: defaults::resolution(),
            length_x: defaults::length(),
            length_y: defaults::length(),
            position_x: 0.0,
            position_y: 0.0,
        }
    }
}

impl GridSection {
    /// Side lengths
    pub fn length(&self) -> Length {
        Length::new(self.length_x, self.length_y)
    }

    /// Initial center
    pub fn position(&self) -> Position {
        Position::new(self.position_x, self.position_y)
    }
}

/// Layer section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSection {
    /// Layer names
    #[serde(default = "defaults::layers")]
    pub names: Vec<String>,

    /// Layers consulted by validity checks (empty = all)
    #[serde(default)]
    pub basic: Vec<String>,
}

impl Default for LayerSection {
    fn default() -> Self {
        Self {
            names: defaults::layers(),
            basic: Vec::new(),
        }
    }
}
