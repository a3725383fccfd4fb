//! Effective-tile classification
//!
//! The effective kind of a cell is a pure function of its column's metadata,
//! evaluated in a fixed precedence order:
//!
//! 1. cave row           -> `None`
//! 2. gold / silver row  -> ore
//! 3. depth or variation -> `Stone`
//! 4. mountain profile   -> `Grass` / `Dirt` within the envelope
//! 5. default stratum    -> `None` above the surface, `Grass` at it, `Dirt`
//!    below
//!
//! Chunk materialization snapshots this function for every cell, so any
//! metadata change that must survive a later materialization has to be
//! reflected here.

use super::column::ColumnRecord;
use super::tile::TileKind;
use super::worldgen_config::WorldParams;

/// Classify one cell. Missing profiles fall through to the default stratum.
pub fn effective_tile(record: &ColumnRecord, row: i32, world: &WorldParams) -> TileKind {
    if let Some(stone) = &record.stone {
        if stone.cave_rows.contains(&row) {
            return TileKind::None;
        }
        if stone.gold_rows.contains(&row) {
            return TileKind::Gold;
        }
        if stone.silver_rows.contains(&row) {
            return TileKind::Silver;
        }
        if row > world.surface_level + stone.start_depth || stone.stone_rows.contains(&row) {
            return TileKind::Stone;
        }
    }

    match &record.mountain {
        Some(mountain) if !mountain.is_surface => {
            if row >= world.surface_level {
                return TileKind::Dirt;
            }
            let top = mountain.top_row(world.surface_level);
            if row < top {
                TileKind::None
            } else if mountain.grass_rows.contains(&row) {
                TileKind::Grass
            } else {
                TileKind::Dirt
            }
        }
        mountain => {
            // Flat or unvisited column. Grass rows recorded by edits still
            // win over the default stratum.
            if let Some(mountain) = mountain {
                if mountain.grass_rows.contains(&row) {
                    return TileKind::Grass;
                }
            }
            if row < world.surface_level {
                TileKind::None
            } else if row == world.surface_level {
                TileKind::Grass
            } else {
                TileKind::Dirt
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::column::{MountainProfile, StoneProfile};

    fn world() -> WorldParams {
        WorldParams::default() // height 120, surface 50
    }

    fn record_with_stone(start_depth: i32) -> ColumnRecord {
        ColumnRecord {
            mountain: None,
            stone: Some(StoneProfile::new(start_depth)),
        }
    }

    #[test]
    fn test_empty_record_uses_default_stratum() {
        let record = ColumnRecord::default();
        assert_eq!(effective_tile(&record, 10, &world()), TileKind::None);
        assert_eq!(effective_tile(&record, 50, &world()), TileKind::Grass);
        assert_eq!(effective_tile(&record, 51, &world()), TileKind::Dirt);
    }

    #[test]
    fn test_depth_classified_stone() {
        let record = record_with_stone(15);
        // Rows at or above surface + start_depth stay dirt.
        assert_eq!(effective_tile(&record, 65, &world()), TileKind::Dirt);
        assert_eq!(effective_tile(&record, 66, &world()), TileKind::Stone);
        assert_eq!(effective_tile(&record, 119, &world()), TileKind::Stone);
    }

    #[test]
    fn test_cave_row_beats_depth_stone() {
        let mut record = record_with_stone(15);
        record.stone.as_mut().unwrap().cave_rows.insert(100);
        assert_eq!(effective_tile(&record, 100, &world()), TileKind::None);
        assert_eq!(effective_tile(&record, 101, &world()), TileKind::Stone);
    }

    #[test]
    fn test_cave_row_beats_ore_rows() {
        let mut record = record_with_stone(15);
        let stone = record.stone.as_mut().unwrap();
        stone.cave_rows.insert(80);
        stone.gold_rows.insert(80);
        assert_eq!(effective_tile(&record, 80, &world()), TileKind::None);
    }

    #[test]
    fn test_ore_rows_beat_stone() {
        let mut record = record_with_stone(15);
        let stone = record.stone.as_mut().unwrap();
        stone.gold_rows.insert(90);
        stone.silver_rows.insert(91);
        stone.stone_rows.insert(90);
        assert_eq!(effective_tile(&record, 90, &world()), TileKind::Gold);
        assert_eq!(effective_tile(&record, 91, &world()), TileKind::Silver);
    }

    #[test]
    fn test_variation_stone_above_start_depth() {
        let mut record = record_with_stone(15);
        record.stone.as_mut().unwrap().stone_rows.insert(55);
        assert_eq!(effective_tile(&record, 55, &world()), TileKind::Stone);
        assert_eq!(effective_tile(&record, 56, &world()), TileKind::Dirt);
    }

    #[test]
    fn test_mountain_envelope() {
        let mut mountain = MountainProfile::flat();
        mountain.height = 10;
        mountain.peak_height = 10;
        mountain.is_surface = false;
        mountain.grass_rows.insert(40); // formation top
        let record = ColumnRecord {
            mountain: Some(mountain),
            stone: None,
        };

        assert_eq!(effective_tile(&record, 39, &world()), TileKind::None);
        assert_eq!(effective_tile(&record, 40, &world()), TileKind::Grass);
        assert_eq!(effective_tile(&record, 41, &world()), TileKind::Dirt);
        assert_eq!(effective_tile(&record, 50, &world()), TileKind::Dirt);
    }

    #[test]
    fn test_slope_grass_inside_envelope() {
        let mut mountain = MountainProfile::flat();
        mountain.height = 10;
        mountain.is_surface = false;
        mountain.grass_rows.insert(40);
        mountain.grass_rows.insert(43);
        let record = ColumnRecord {
            mountain: Some(mountain),
            stone: None,
        };

        assert_eq!(effective_tile(&record, 43, &world()), TileKind::Grass);
        assert_eq!(effective_tile(&record, 44, &world()), TileKind::Dirt);
    }

    #[test]
    fn test_surface_column_keeps_placed_grass() {
        let mut mountain = MountainProfile::flat();
        mountain.grass_rows.insert(44);
        let record = ColumnRecord {
            mountain: Some(mountain),
            stone: None,
        };

        assert_eq!(effective_tile(&record, 44, &world()), TileKind::Grass);
        assert_eq!(effective_tile(&record, 45, &world()), TileKind::None);
    }
}
