// Generation parameters.
//
// All tunable parameters for one generation run live in `MazeConfig`. The
// caller layer (a host add-on panel, a CLI, a test) is a pure producer of
// this struct; the orchestrator never reads settings from anywhere else.
// Defaults match the original operator's slider defaults.
//
// Validation runs before any mesh or scene mutation begins: a rejected
// config leaves the backend untouched. The `iterations >= 1` bound belongs
// to this inbound surface only — `GridGraph::add_random_loops` itself is
// total for any count, which the stage-level tests rely on.
//
// JSON round-trip helpers are provided so a thin front-end can persist the
// last-used parameters.
//
// See also: `generator.rs` which consumes the validated config, `error.rs`
// for how a `ConfigError` surfaces to the caller.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters for one maze generation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Seed for the random source. Any value; the same seed reproduces the
    /// same maze for identical grid parameters.
    pub seed: i64,
    /// Grid rows, at least 1.
    pub rows: u32,
    /// Grid columns, at least 1.
    pub cols: u32,
    /// XY size of one cell in scene units, positive.
    pub cell_size: f32,
    /// Wall extrusion height in scene units, positive.
    pub wall_height: f32,
    /// Number of random extra connections carved after the spanning tree,
    /// at least 1.
    pub iterations: u32,
    /// Whether to delete small disconnected wall fragments.
    pub delete_islands: bool,
    /// Islands with at most this many faces are deleted.
    pub island_face_threshold: u32,
    /// Forward a solidify (wall thickening) pass to the backend.
    pub apply_solidify: bool,
    /// Forward a bevel (edge rounding) pass to the backend.
    pub apply_bevel: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            rows: 20,
            cols: 20,
            cell_size: 2.0,
            wall_height: 2.4,
            iterations: 5,
            delete_islands: true,
            island_face_threshold: 6,
            apply_solidify: true,
            apply_bevel: true,
        }
    }
}

impl MazeConfig {
    /// Check every parameter against its allowed range.
    ///
    /// Must pass before the orchestrator touches the scene.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 1 {
            return Err(ConfigError::too_small("rows", self.rows));
        }
        if self.cols < 1 {
            return Err(ConfigError::too_small("cols", self.cols));
        }
        if self.iterations < 1 {
            return Err(ConfigError::too_small("iterations", self.iterations));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::not_positive("cell_size", self.cell_size));
        }
        if !(self.wall_height.is_finite() && self.wall_height > 0.0) {
            return Err(ConfigError::not_positive("wall_height", self.wall_height));
        }
        Ok(())
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(MazeConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_rows_is_rejected() {
        let config = MazeConfig {
            rows: 0,
            ..MazeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_cols_is_rejected() {
        let config = MazeConfig {
            cols: 0,
            ..MazeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_iterations_is_rejected() {
        let config = MazeConfig {
            iterations: 0,
            ..MazeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn nonpositive_dimensions_are_rejected() {
        for (cell_size, wall_height) in [(0.0, 2.4), (-1.0, 2.4), (2.0, 0.0), (2.0, f32::NAN)] {
            let config = MazeConfig {
                cell_size,
                wall_height,
                ..MazeConfig::default()
            };
            assert!(
                config.validate().is_err(),
                "cell_size={cell_size} wall_height={wall_height} must be rejected"
            );
        }
    }

    #[test]
    fn one_by_one_grid_is_valid() {
        let config = MazeConfig {
            rows: 1,
            cols: 1,
            ..MazeConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn json_roundtrip() {
        let config = MazeConfig {
            seed: -17,
            rows: 3,
            cols: 40,
            delete_islands: false,
            ..MazeConfig::default()
        };
        let json = config.to_json().unwrap();
        let restored = MazeConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }
}
