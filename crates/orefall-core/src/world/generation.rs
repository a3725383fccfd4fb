//! Column profile generation - mountain formations, stone strata, ore veins
//!
//! `generate_mountain_range` walks an inclusive column range and stamps
//! triangular mountain formations separated by flat gaps, then scatters
//! near-surface stone veins and hands the range to the cave carver. All
//! randomness comes from the caller's stream; generating ranges in a
//! different order yields a different world.

use ahash::AHashSet;

use super::caves::CaveCarver;
use super::column::{ColumnStore, MountainProfile, StoneProfile};
use super::rng_trait::WorldRng;
use super::tile::TileKind;
use super::worldgen_config::{StoneParams, WorldGenConfig};

/// Procedural terrain shaping over the column metadata store.
pub struct WorldGenerator {
    config: WorldGenConfig,
}

impl WorldGenerator {
    /// Generator with the default configuration.
    pub fn new() -> Self {
        Self::from_config(WorldGenConfig::default())
    }

    pub fn from_config(config: WorldGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    /// Populate mountain and stone profiles for every column in
    /// `start..=end` that does not yet have them. Columns already carrying a
    /// mountain profile are left untouched, so overlapping ranges are safe
    /// and a fully generated range is a draw-free no-op.
    pub fn generate_mountain_range<R: WorldRng>(
        &self,
        columns: &mut ColumnStore,
        rng: &mut R,
        start: i32,
        end: i32,
    ) {
        let fully_generated = (start..=end)
            .all(|c| columns.has_mountain_profile(c) && columns.has_stone_profile(c));
        if fully_generated {
            return;
        }

        let pre_existing: AHashSet<i32> = (start..=end)
            .filter(|c| columns.has_mountain_profile(*c))
            .collect();

        for column in start..=end {
            if !pre_existing.contains(&column) {
                columns.record_mut(column).mountain = Some(MountainProfile::flat());
            }
            self.ensure_stone_profile(columns, rng, column);
        }

        self.raise_formations(columns, rng, start, end, &pre_existing);
        self.scatter_stone_veins(columns, rng, start, end);
        CaveCarver::carve_caves(self, columns, rng, start, end);

        log::debug!("[GEN] generated columns {start}..={end}");
    }

    fn raise_formations<R: WorldRng>(
        &self,
        columns: &mut ColumnStore,
        rng: &mut R,
        start: i32,
        end: i32,
        pre_existing: &AHashSet<i32>,
    ) {
        let m = &self.config.mountains;
        let world = &self.config.world;
        let max_height = world.surface_level + 1;

        let mut column = start;
        while column <= end {
            if !rng.chance(m.formation_chance) {
                column += rng.range_i32(m.min_skip..m.max_skip);
                continue;
            }

            let width = rng.range_i32(m.min_formation_width..m.max_formation_width + 1);
            let max_delta = width / 2;
            let gap = rng.range_i32(m.min_formation_gap..m.max_formation_gap);
            let peak = rng
                .range_i32(m.min_peak_height..m.max_peak_height)
                .min(max_height);
            let base_height = peak - max_delta * m.height_step;

            let mut last_height = if column > start {
                columns.mountain(column - 1).map_or(0, |p| p.height)
            } else {
                0
            };

            // Triangular envelope: rises to the midpoint, then falls.
            let mut i = 0;
            while i < width && column <= end {
                let delta = if i <= width / 2 { i } else { width - 1 - i };
                let height = (base_height + delta * m.height_step).min(max_height);

                if !pre_existing.contains(&column) {
                    let mut profile = MountainProfile {
                        height,
                        peak_height: peak,
                        is_surface: false,
                        grass_rows: AHashSet::new(),
                    };
                    profile
                        .grass_rows
                        .insert((world.surface_level - height).max(0));

                    // Steep steps expose a slope face; grass some of it.
                    if (height - last_height).abs() >= m.slope_grass_threshold {
                        let face_top =
                            (world.surface_level - height).min(world.surface_level - last_height);
                        let face_bottom =
                            (world.surface_level - height).max(world.surface_level - last_height);
                        for row in (face_top + 1)..face_bottom {
                            if rng.chance(m.slope_grass_chance) {
                                profile.grass_rows.insert(row);
                            }
                        }
                    }

                    columns.record_mut(column).mountain = Some(profile);
                }

                last_height = height;
                i += 1;
                column += 1;
            }

            column += gap;
        }
    }

    /// Stone pockets above the normal stone line, independent of the
    /// per-column start depth.
    fn scatter_stone_veins<R: WorldRng>(
        &self,
        columns: &mut ColumnStore,
        rng: &mut R,
        start: i32,
        end: i32,
    ) {
        let v = &self.config.veins;
        let world = &self.config.world;
        let stone = &self.config.stone;

        let mut column = start;
        while column <= end {
            if !rng.chance(v.vein_chance) {
                column += 1;
                continue;
            }

            let vein_height = rng.range_i32(v.min_height..v.max_height);
            let vein_width = rng.range_i32(v.min_width..v.max_width);
            let vein_top = world.surface_level + stone.base_start_depth - vein_height;

            let mut vein_column = column;
            while vein_column < column + vein_width && vein_column <= end {
                self.ensure_stone_profile(columns, rng, vein_column);
                for step in 0..vein_height {
                    let jitter = rng.range_i32(-1..2);
                    if let Some(profile) = columns.stone_mut(vein_column) {
                        profile.stone_rows.insert(vein_top + step + jitter);
                    }
                }
                vein_column += 1;
            }

            column += vein_width + rng.range_i32(v.min_spacing..v.max_spacing);
        }
    }

    /// Idempotent ensure-or-create for a column's stone profile. Neighboring
    /// columns touched by side blobs are ensured through the same worklist,
    /// so chains of neighbors never recurse.
    pub fn ensure_stone_profile<R: WorldRng>(
        &self,
        columns: &mut ColumnStore,
        rng: &mut R,
        column: i32,
    ) {
        let s = &self.config.stone;
        let world = &self.config.world;

        let mut pending = vec![column];
        let mut spill: Vec<(i32, i32, TileKind)> = Vec::new();

        while let Some(col) = pending.pop() {
            if columns.has_stone_profile(col) {
                continue;
            }

            let start_depth =
                s.base_start_depth + rng.range_i32(-s.depth_variation..s.depth_variation + 1);
            let mut profile = StoneProfile::new(start_depth);

            if rng.chance(s.blob_chance) {
                let blob_height = rng.range_i32(1..s.max_blob_height + 1);
                let base_depth = start_depth - blob_height;

                for step in 0..blob_height {
                    let jitter = rng.range_i32(-1..2);
                    let row = world.surface_level + base_depth + step + jitter;
                    profile.add_variation(row, roll_ore(rng, s));
                }

                if rng.chance(s.side_blob_chance) {
                    let side = col + (rng.range_i32(0..2) * 2 - 1);
                    let side_height = if blob_height > 1 {
                        rng.range_i32(1..blob_height)
                    } else {
                        1
                    };
                    for step in 0..side_height {
                        let row =
                            world.surface_level + base_depth + blob_height - side_height + step;
                        spill.push((side, row, roll_ore(rng, s)));
                    }
                    pending.push(side);
                }
            }

            columns.record_mut(col).stone = Some(profile);
        }

        // Side-blob rows land once every touched profile exists.
        for (col, row, kind) in spill {
            if let Some(profile) = columns.stone_mut(col) {
                profile.add_variation(row, kind);
            }
        }
    }
}

impl Default for WorldGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// One classification roll for a variation row: gold, then silver, else
/// plain stone.
fn roll_ore<R: WorldRng>(rng: &mut R, stone: &StoneParams) -> TileKind {
    let roll = rng.unit_f64();
    if roll < stone.gold_chance {
        TileKind::Gold
    } else if roll < stone.gold_chance + stone.silver_chance {
        TileKind::Silver
    } else {
        TileKind::Stone
    }
}
