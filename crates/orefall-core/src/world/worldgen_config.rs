//! World generation configuration - serializable terrain parameters
//!
//! Captures every tunable the generator, carver and tree placer consume,
//! with defaults matching the shipped world. Serializable to RON for
//! presets. The seed is NOT part of the config - same config + different
//! seed = different world.

use serde::{Deserialize, Serialize};

/// Complete generation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldGenConfig {
    /// Global world dimensions.
    pub world: WorldParams,
    /// Mountain formation shaping.
    pub mountains: MountainParams,
    /// Stone strata and ore blobs.
    pub stone: StoneParams,
    /// Near-surface stone veins.
    pub veins: VeinParams,
    /// Cave pockets.
    pub caves: CaveParams,
    /// Tree markers.
    pub trees: TreeParams,
    /// View window and draw-space transforms.
    pub view: ViewParams,
}

impl WorldGenConfig {
    /// Parse a RON preset.
    pub fn from_ron_str(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(source)
    }
}

/// Global world dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldParams {
    /// Vertical extent; valid rows are `[0, world_height)` (default: 120).
    pub world_height: i32,
    /// Row separating sky from the underground stratum (default: 50).
    pub surface_level: i32,
    /// Columns per chunk (default: 16).
    pub chunk_width: i32,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            world_height: 120,
            surface_level: 50,
            chunk_width: 16,
        }
    }
}

/// Mountain formation shaping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountainParams {
    /// Chance to start a formation at a walk position (default: 0.75).
    pub formation_chance: f64,
    /// Formation width in columns, inclusive bounds (default: 10..=30).
    pub min_formation_width: i32,
    pub max_formation_width: i32,
    /// Height gained per envelope step (default: 2).
    pub height_step: i32,
    /// Peak height range, max exclusive (default: 12..30).
    pub min_peak_height: i32,
    pub max_peak_height: i32,
    /// Flat gap after a formation, max exclusive (default: 3..10).
    pub min_formation_gap: i32,
    pub max_formation_gap: i32,
    /// Columns skipped when no formation starts, max exclusive
    /// (default: 5..15).
    pub min_skip: i32,
    pub max_skip: i32,
    /// Height difference between neighbors that counts as a slope face
    /// (default: 2).
    pub slope_grass_threshold: i32,
    /// Chance for each slope-face row to carry grass (default: 0.7).
    pub slope_grass_chance: f64,
}

impl Default for MountainParams {
    fn default() -> Self {
        Self {
            formation_chance: 0.75,
            min_formation_width: 10,
            max_formation_width: 30,
            height_step: 2,
            min_peak_height: 12,
            max_peak_height: 30,
            min_formation_gap: 3,
            max_formation_gap: 10,
            min_skip: 5,
            max_skip: 15,
            slope_grass_threshold: 2,
            slope_grass_chance: 0.7,
        }
    }
}

/// Stone strata and per-column ore blobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoneParams {
    /// Rows below the surface where stone starts, before variation
    /// (default: 15).
    pub base_start_depth: i32,
    /// Start depth jitter, inclusive both ways (default: 5).
    pub depth_variation: i32,
    /// Chance for a fresh column to grow a stone blob (default: 0.3).
    pub blob_chance: f64,
    /// Blob height in rows, inclusive (default: 4, giving 1..=4).
    pub max_blob_height: i32,
    /// Chance for a blob to spill into one horizontal neighbor
    /// (default: 0.5).
    pub side_blob_chance: f64,
    /// Per-row ore classification chances (default: 0.05 each; gold is
    /// rolled first).
    pub gold_chance: f64,
    pub silver_chance: f64,
}

impl Default for StoneParams {
    fn default() -> Self {
        Self {
            base_start_depth: 15,
            depth_variation: 5,
            blob_chance: 0.3,
            max_blob_height: 4,
            side_blob_chance: 0.5,
            gold_chance: 0.05,
            silver_chance: 0.05,
        }
    }
}

/// Near-surface stone veins, independent of the stone start depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VeinParams {
    /// Per-column chance to start a vein (default: 0.2).
    pub vein_chance: f64,
    /// Vein height in rows, max exclusive (default: 3..8).
    pub min_height: i32,
    pub max_height: i32,
    /// Vein width in columns, max exclusive (default: 2..5).
    pub min_width: i32,
    pub max_width: i32,
    /// Columns skipped after a vein, max exclusive (default: 5..15).
    pub min_spacing: i32,
    pub max_spacing: i32,
}

impl Default for VeinParams {
    fn default() -> Self {
        Self {
            vein_chance: 0.2,
            min_height: 3,
            max_height: 8,
            min_width: 2,
            max_width: 5,
            min_spacing: 5,
            max_spacing: 15,
        }
    }
}

/// Cave pocket carving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaveParams {
    /// Chance to carve at a candidate center (default: 0.15).
    pub frequency: f64,
    /// Pocket size range, inclusive (default: 5..=20).
    pub min_size: i32,
    pub max_size: i32,
    /// Chance per carved point to line a wall with ore (default: 0.35).
    pub ore_chance: f64,
    /// Share of wall ore that becomes gold rather than silver
    /// (default: 0.7).
    pub gold_to_silver_ratio: f64,
    /// Columns between candidate centers, max exclusive (default: 5..15).
    pub min_spacing: i32,
    pub max_spacing: i32,
    /// Horizontal jitter applied to a center, inclusive both ways
    /// (default: 5).
    pub center_jitter: i32,
    /// Center row offset below the stone start, min inclusive (default: 5).
    pub min_center_depth: i32,
    /// Rows kept clear of the world floor when sampling centers
    /// (default: 30).
    pub bottom_margin: i32,
}

impl Default for CaveParams {
    fn default() -> Self {
        Self {
            frequency: 0.15,
            min_size: 5,
            max_size: 20,
            ore_chance: 0.35,
            gold_to_silver_ratio: 0.7,
            min_spacing: 5,
            max_spacing: 15,
            center_jitter: 5,
            min_center_depth: 5,
            bottom_margin: 30,
        }
    }
}

/// Tree marker placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    /// Per-eligible-column chance to place a marker (default: 0.05).
    pub frequency: f64,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self { frequency: 0.05 }
    }
}

/// View window and draw-space transforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewParams {
    /// Edge length of one tile in draw space (default: 10.0).
    pub tile_size: f32,
    /// Columns visible on each side of the view center (default: 80).
    pub view_range: i32,
    /// Extra columns generated beyond the view range (default: 20).
    pub generation_margin: i32,
    /// Column-range width checked and generated at once (default: 50).
    pub generation_stride: i32,
    /// World draw offsets (defaults: 500.0 / 1200.0).
    pub world_x_offset: f32,
    pub world_y_offset: f32,
    /// Entity draw offsets applied before the tile transform
    /// (defaults: -480.0 / 460.0).
    pub draw_x_offset: f32,
    pub draw_y_offset: f32,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            tile_size: 10.0,
            view_range: 80,
            generation_margin: 20,
            generation_stride: 50,
            world_x_offset: 500.0,
            world_y_offset: 1200.0,
            draw_x_offset: -480.0,
            draw_y_offset: 460.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_shipped_world() {
        let config = WorldGenConfig::default();
        assert_eq!(config.world.world_height, 120);
        assert_eq!(config.world.surface_level, 50);
        assert_eq!(config.world.chunk_width, 16);
        assert_eq!(config.stone.base_start_depth, 15);
        assert_eq!(config.view.view_range, 80);
    }

    #[test]
    fn test_ron_round_trip() {
        let config = WorldGenConfig::default();
        let serialized = ron::to_string(&config).expect("Failed to serialize");
        let deserialized = WorldGenConfig::from_ron_str(&serialized).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_ron_preset_overrides() {
        let mut config = WorldGenConfig::default();
        config.caves.frequency = 1.0;
        config.trees.frequency = 0.0;

        let serialized = ron::to_string(&config).expect("Failed to serialize");
        let deserialized = WorldGenConfig::from_ron_str(&serialized).expect("Failed to deserialize");
        assert_eq!(deserialized.caves.frequency, 1.0);
        assert_eq!(deserialized.trees.frequency, 0.0);
    }
}
