//! YAML configuration for building grid maps.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stara_grid::config::GridMapConfig;
//!
//! // Load from default path (configs/grid_map.yaml), falling back to defaults
//! let config = GridMapConfig::load_default()?;
//! let map = config.build()?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Resolution, side lengths, initial center |
//! | [`LayerSection`] | Layer names and basic layers |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   resolution: 0.05   # 5cm cells
//!   length_x: 10.0     # 200 cells
//!   length_y: 10.0
//! layers:
//!   names: [elevation, variance]
//!   basic: [elevation]
//! ```

mod defaults;
mod error;
mod grid_map;
mod sections;

pub use error::ConfigLoadError;
pub use grid_map::{DEFAULT_CONFIG_PATH, GridMapConfig};
pub use sections::{GridSection, LayerSection};
