//! Serializable grid map message.
//!
//! Layer data is stored re-linearized: row-major from request index (0, 0),
//! independent of the map's circular-buffer rotation. Missing cells stay
//! `NaN`, which YAML encodes as `.nan`.

use serde::{Deserialize, Serialize};

use crate::core::{GridSize, Length, Position};
use crate::grid::{GridMap, GridMapError, Result};

/// Geometry header of a grid map message
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridMapInfo {
    /// Cell edge length in meters
    pub resolution: f64,
    /// Side lengths in meters
    pub length: Length,
    /// World position of the map center
    pub position: Position,
    /// Cells per axis
    pub size: GridSize,
}

/// Full grid map snapshot
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GridMapMessage {
    /// Geometry
    pub info: GridMapInfo,
    /// Layer names, parallel to `data`
    pub layers: Vec<String>,
    /// Basic layer names
    #[serde(default)]
    pub basic_layers: Vec<String>,
    /// Canonical row-major values per layer
    pub data: Vec<Vec<f32>>,
}

impl GridMapMessage {
    /// Encode as YAML.
    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Decode from YAML.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

/// Snapshot every layer of a map.
pub fn to_message(map: &GridMap) -> GridMapMessage {
    let layers: Vec<&str> = map.layers().iter().map(String::as_str).collect();
    // Every listed layer exists
    to_message_layers(map, &layers).unwrap_or_default()
}

/// Snapshot the listed layers of a map.
///
/// Basic layers not among `layers` are dropped from the message.
pub fn to_message_layers(map: &GridMap, layers: &[&str]) -> Result<GridMapMessage> {
    let data = layers
        .iter()
        .map(|layer| map.layer_data(layer))
        .collect::<Result<Vec<_>>>()?;

    Ok(GridMapMessage {
        info: GridMapInfo {
            resolution: map.resolution(),
            length: map.length(),
            position: map.position(),
            size: map.size(),
        },
        layers: layers.iter().map(|layer| layer.to_string()).collect(),
        basic_layers: map
            .basic_layers()
            .iter()
            .filter(|basic| layers.contains(&basic.as_str()))
            .cloned()
            .collect(),
        data,
    })
}

/// Rebuild a map from a message.
///
/// Fails if layer names repeat, a basic layer is unknown, or any layer's data
/// does not match the advertised size.
pub fn from_message(message: &GridMapMessage) -> Result<GridMap> {
    let info = &message.info;
    let mut map = GridMap::new(message.layers.iter().cloned())?;

    if !info.size.is_empty() {
        map.resize(info.length, info.resolution)?;
    }
    map.set_position(info.position);

    if map.size() != info.size {
        return Err(GridMapError::LayerShapeMismatch {
            layer: message.layers.first().cloned().unwrap_or_default(),
            expected: map.cell_count(),
            actual: info.size.cell_count(),
        });
    }

    for (index, layer) in message.layers.iter().enumerate() {
        let values = message
            .data
            .get(index)
            .ok_or_else(|| GridMapError::LayerShapeMismatch {
                layer: layer.clone(),
                expected: map.cell_count(),
                actual: 0,
            })?;
        map.set_layer_data(layer, values)?;
    }

    map.set_basic_layers(message.basic_layers.iter().cloned())?;
    Ok(map)
}
