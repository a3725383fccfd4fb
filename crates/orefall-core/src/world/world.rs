//! World facade - generation orchestration, tile queries, and edits

use ahash::AHashSet;
use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use super::chunk_store::ChunkStore;
use super::column::{ColumnStore, MountainProfile, StoneProfile};
use super::features::TreePlacement;
use super::generation::WorldGenerator;
use super::tile::TileKind;
use super::view;
use super::worldgen_config::WorldGenConfig;

/// The world: sparse chunks over procedurally generated column metadata.
///
/// All generation draws from one seeded stream in call order, so two worlds
/// with the same seed evolve identically only under identical call
/// sequences. Single-threaded by design; every query and mutation runs to
/// completion on the calling thread.
pub struct World {
    generator: WorldGenerator,
    columns: ColumnStore,
    chunks: ChunkStore,
    trees: TreePlacement,
    rng: Xoshiro256StarStar,
}

impl World {
    /// World with the default configuration.
    pub fn new(seed: u64) -> Self {
        Self::from_config(seed, WorldGenConfig::default())
    }

    pub fn from_config(seed: u64, config: WorldGenConfig) -> Self {
        Self {
            generator: WorldGenerator::from_config(config),
            columns: ColumnStore::new(),
            chunks: ChunkStore::new(),
            trees: TreePlacement::new(),
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &WorldGenConfig {
        self.generator.config()
    }

    /// Make sure every column visible from `view_position` (plus margin)
    /// has full metadata, generating missing strides. A fully generated
    /// window is a draw-free no-op, so calling this every tick is fine.
    pub fn ensure_generated(&mut self, view_position: Vec2) {
        let view = &self.generator.config().view;
        let center = (view_position.x / view.tile_size) as i32;
        let range = view.view_range + view.generation_margin;
        let stride = view.generation_stride;
        let (min_column, max_column) = (center - range, center + range);

        let mut start = min_column;
        while start <= max_column {
            let end = start + stride;
            let needs_generation = (start..=end).any(|column| {
                !self.columns.has_mountain_profile(column)
                    || !self.columns.has_stone_profile(column)
            });
            if needs_generation {
                self.generator
                    .generate_mountain_range(&mut self.columns, &mut self.rng, start, end);
                self.trees.place_trees(
                    &self.generator.config().trees,
                    &self.generator.config().world,
                    &self.columns,
                    &mut self.rng,
                    start,
                    end,
                );
            }
            start += stride;
        }
    }

    /// Effective tile at world coordinates; rows outside the vertical
    /// bounds read as `None`.
    pub fn get_tile(&mut self, column: i32, row: i32) -> TileKind {
        self.chunks
            .get_tile(column, row, &mut self.columns, &self.generator, &mut self.rng)
    }

    pub fn is_solid(&mut self, column: i32, row: i32) -> bool {
        self.get_tile(column, row).is_solid()
    }

    /// Place a tile; succeeds only onto an empty cell. Single funnel for
    /// local and replicated edits.
    pub fn place_tile(&mut self, column: i32, row: i32, kind: TileKind) -> bool {
        self.chunks.place_tile(
            column,
            row,
            kind,
            &mut self.columns,
            &self.generator,
            &mut self.rng,
        )
    }

    /// Remove a tile; succeeds only on a non-empty cell.
    pub fn remove_tile(&mut self, column: i32, row: i32) -> bool {
        self.chunks
            .remove_tile(column, row, &mut self.columns, &self.generator, &mut self.rng)
    }

    /// Apply a replicated tile change: `None` clears the cell, everything
    /// else places. Identical to the local edit path by construction, so
    /// replaying a peer's ordered edits converges.
    pub fn apply_remote_change(&mut self, column: i32, row: i32, kind: TileKind) -> bool {
        if kind == TileKind::None {
            self.remove_tile(column, row)
        } else {
            self.place_tile(column, row, kind)
        }
    }

    pub fn screen_to_column_row(&self, screen: Vec2) -> IVec2 {
        view::screen_to_column_row(&self.generator.config().view, screen)
    }

    pub fn is_within_interaction_range(
        &self,
        entity_center: Vec2,
        tile: IVec2,
        max_distance: f32,
    ) -> bool {
        view::is_within_interaction_range(
            &self.generator.config().view,
            entity_center,
            tile,
            max_distance,
        )
    }

    /// Tree markers placed so far.
    pub fn tree_positions(&self) -> &AHashSet<IVec2> {
        self.trees.positions()
    }

    pub fn mountain_profile(&self, column: i32) -> Option<&MountainProfile> {
        self.columns.mountain(column)
    }

    pub fn stone_profile(&self, column: i32) -> Option<&StoneProfile> {
        self.columns.stone(column)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.chunk_count()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
