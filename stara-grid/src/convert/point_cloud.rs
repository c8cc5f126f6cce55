//! Point cloud export.

use serde::{Deserialize, Serialize};

use crate::grid::{GridMap, Result};

/// One point per map cell plus per-point layer values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    /// `[x, y, z]` per cell: cell center and the point layer value
    pub points: Vec<[f32; 3]>,
    /// Extra per-point channels, parallel to `points`
    pub fields: Vec<(String, Vec<f32>)>,
}

impl PointCloud {
    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the cloud has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values of a named channel.
    pub fn field(&self, name: &str) -> Option<&[f32]> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, values)| values.as_slice())
    }
}

/// Export every cell as a point, with `z` taken from `point_layer`.
///
/// Every layer other than the point layer becomes a field.
pub fn to_point_cloud_all(map: &GridMap, point_layer: &str) -> Result<PointCloud> {
    let layers: Vec<&str> = map
        .layers()
        .iter()
        .map(String::as_str)
        .filter(|layer| *layer != point_layer)
        .collect();
    to_point_cloud(map, point_layer, &layers)
}

/// Export every cell as a point, with `z` taken from `point_layer` and one
/// field per entry of `layers_to_add`.
///
/// Points follow the canonical request-space order. Cells without data keep
/// `NaN` in `z` and in the fields.
pub fn to_point_cloud(
    map: &GridMap,
    point_layer: &str,
    layers_to_add: &[&str],
) -> Result<PointCloud> {
    let heights = map.layer_data(point_layer)?;
    let fields = layers_to_add
        .iter()
        .map(|layer| Ok((layer.to_string(), map.layer_data(layer)?)))
        .collect::<Result<Vec<_>>>()?;

    let points = map
        .iter()
        .zip(heights)
        .filter_map(|(index, z)| {
            map.position_of(index)
                .map(|center| [center.x as f32, center.y as f32, z])
        })
        .collect();

    Ok(PointCloud { points, fields })
}
