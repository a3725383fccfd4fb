//! Cave carving - elliptical voids stamped into the stone strata
//!
//! Pockets are sampled along a generated range, carved as noisy ellipses
//! into per-column cave sets, and opportunistically line their walls with
//! ore. Carved rows dominate classification, so stale stone or ore rows
//! under a cave need no eager cleanup; only wall promotion moves rows
//! between sets.

use super::column::ColumnStore;
use super::generation::WorldGenerator;
use super::rng_trait::WorldRng;

/// Cave carving passes over freshly generated column ranges.
pub struct CaveCarver;

impl CaveCarver {
    /// Scatter elliptical pockets across `start..=end`. Pockets may spill a
    /// few columns past the range; touched columns get their stone profile
    /// ensured first.
    pub fn carve_caves<R: WorldRng>(
        generator: &WorldGenerator,
        columns: &mut ColumnStore,
        rng: &mut R,
        start: i32,
        end: i32,
    ) {
        let caves = &generator.config().caves;
        let world = &generator.config().world;
        let stone = &generator.config().stone;

        let mut column = start;
        while column <= end {
            if rng.chance(caves.frequency) {
                let size = rng.range_i32(caves.min_size..caves.max_size + 1);
                let center_row = world.surface_level
                    + stone.base_start_depth
                    + rng.range_i32(caves.min_center_depth..world.world_height - caves.bottom_margin);
                let center_column =
                    column + rng.range_i32(-caves.center_jitter..caves.center_jitter + 1);
                Self::carve_pocket(generator, columns, rng, center_column, center_row, size);
            }
            column += rng.range_i32(caves.min_spacing..caves.max_spacing);
        }
    }

    /// Carve one noisy ellipse and promote some of its walls to ore.
    fn carve_pocket<R: WorldRng>(
        generator: &WorldGenerator,
        columns: &mut ColumnStore,
        rng: &mut R,
        center_column: i32,
        center_row: i32,
        size: i32,
    ) {
        let ore_chance = generator.config().caves.ore_chance;

        let radius_x = size as f64 * (0.5 + rng.unit_f64() * 0.5);
        let radius_y = size as f64 * (0.5 + rng.unit_f64() * 0.5);

        for row in (center_row - radius_y as i32)..=(center_row + radius_y as i32) {
            for column in (center_column - radius_x as i32)..=(center_column + radius_x as i32) {
                let normalized = ((column - center_column) as f64 / radius_x).powi(2)
                    + ((row - center_row) as f64 / radius_y).powi(2);
                let noise = 0.2 + rng.unit_f64() * 0.4;
                if normalized > 1.0 + noise {
                    continue;
                }

                generator.ensure_stone_profile(columns, rng, column);
                if let Some(profile) = columns.stone_mut(column) {
                    profile.cave_rows.insert(row);
                }

                if rng.chance(ore_chance) {
                    Self::promote_wall_ore(generator, columns, rng, column, row);
                }
            }
        }

        log::trace!(
            "[CAVES] pocket at ({center_column}, {center_row}) radius ({radius_x:.1}, {radius_y:.1})"
        );
    }

    /// Turn the first non-cave neighbor of a carved point into ore, taking
    /// it out of the plain-stone bookkeeping.
    fn promote_wall_ore<R: WorldRng>(
        generator: &WorldGenerator,
        columns: &mut ColumnStore,
        rng: &mut R,
        column: i32,
        row: i32,
    ) {
        let gold_ratio = generator.config().caves.gold_to_silver_ratio;

        'neighbors: for delta_column in -1..=1 {
            for delta_row in -1..=1 {
                if delta_column == 0 && delta_row == 0 {
                    continue;
                }
                let wall_column = column + delta_column;
                let wall_row = row + delta_row;

                generator.ensure_stone_profile(columns, rng, wall_column);
                let is_wall = columns
                    .stone(wall_column)
                    .is_some_and(|p| !p.cave_rows.contains(&wall_row));
                if !is_wall {
                    continue;
                }

                let gold = rng.chance(gold_ratio);
                if let Some(profile) = columns.stone_mut(wall_column) {
                    if gold {
                        profile.gold_rows.insert(wall_row);
                    } else {
                        profile.silver_rows.insert(wall_row);
                    }
                    profile.stone_rows.remove(&wall_row);
                }
                break 'neighbors;
            }
        }
    }
}
