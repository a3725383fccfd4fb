//! Sparse chunk storage and the tile mutation funnel
//!
//! Chunks are materialized lazily, exactly once per index, by snapshotting
//! the effective-tile classification for every covered cell. `place_tile`
//! and `remove_tile` are the only write paths into the grid - local edits
//! and replicated edits both land here, which is what keeps replay
//! consistent between peers.

use std::collections::HashMap;

use ahash::AHashSet;

use super::chunk::Chunk;
use super::classify::effective_tile;
use super::column::{ColumnStore, MountainProfile};
use super::generation::WorldGenerator;
use super::rng_trait::WorldRng;
use super::tile::TileKind;

/// Sparse grid of materialized chunks keyed by chunk index.
#[derive(Debug, Default)]
pub struct ChunkStore {
    chunks: HashMap<i32, Chunk>,
}

impl ChunkStore {
    pub fn new() -> Self {
        Self {
            chunks: HashMap::new(),
        }
    }

    /// Split a world column into chunk index and local column.
    pub fn chunk_coords(column: i32, chunk_width: i32) -> (i32, i32) {
        (column.div_euclid(chunk_width), column.rem_euclid(chunk_width))
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn has_chunk(&self, chunk_index: i32) -> bool {
        self.chunks.contains_key(&chunk_index)
    }

    /// Materialize the chunk at `chunk_index` if it does not exist yet,
    /// ensuring stone profiles for every covered column along the way.
    pub fn ensure_chunk<R: WorldRng>(
        &mut self,
        chunk_index: i32,
        columns: &mut ColumnStore,
        generator: &WorldGenerator,
        rng: &mut R,
    ) {
        if self.chunks.contains_key(&chunk_index) {
            return;
        }

        let world = &generator.config().world;
        let mut chunk = Chunk::new(chunk_index, world.chunk_width, world.world_height);
        for local in 0..world.chunk_width {
            let column = chunk_index * world.chunk_width + local;
            generator.ensure_stone_profile(columns, rng, column);
            let Some(record) = columns.record(column) else {
                continue;
            };
            for row in 0..world.world_height {
                chunk.set(local, row, effective_tile(record, row, world));
            }
        }

        self.chunks.insert(chunk_index, chunk);
        log::trace!("[CHUNK] materialized chunk {chunk_index}");
    }

    /// Tile at world coordinates, materializing the covering chunk. Rows
    /// outside the vertical bounds read as `None`.
    pub fn get_tile<R: WorldRng>(
        &mut self,
        column: i32,
        row: i32,
        columns: &mut ColumnStore,
        generator: &WorldGenerator,
        rng: &mut R,
    ) -> TileKind {
        let world = &generator.config().world;
        let (chunk_index, local) = Self::chunk_coords(column, world.chunk_width);
        self.ensure_chunk(chunk_index, columns, generator, rng);

        if row < 0 || row >= world.world_height {
            return TileKind::None;
        }
        self.chunks
            .get(&chunk_index)
            .map_or(TileKind::None, |chunk| chunk.get(local, row))
    }

    /// Place `kind` at world coordinates. Succeeds only onto an empty cell
    /// inside the vertical bounds; column metadata is updated alongside the
    /// grid so a later materialization agrees with it.
    pub fn place_tile<R: WorldRng>(
        &mut self,
        column: i32,
        row: i32,
        kind: TileKind,
        columns: &mut ColumnStore,
        generator: &WorldGenerator,
        rng: &mut R,
    ) -> bool {
        let world = &generator.config().world;
        if row < 0 || row >= world.world_height || kind == TileKind::None {
            return false;
        }

        let (chunk_index, local) = Self::chunk_coords(column, world.chunk_width);
        self.ensure_chunk(chunk_index, columns, generator, rng);
        let Some(chunk) = self.chunks.get_mut(&chunk_index) else {
            return false;
        };
        if chunk.get(local, row) != TileKind::None {
            return false;
        }
        chunk.set(local, row, kind);

        match kind {
            TileKind::Grass => {
                let record = columns.record_mut(column);
                let mountain = record.mountain.get_or_insert_with(|| MountainProfile {
                    height: world.surface_level - row,
                    peak_height: world.surface_level - row,
                    is_surface: row == world.surface_level,
                    grass_rows: AHashSet::new(),
                });
                mountain.grass_rows.insert(row);
            }
            TileKind::Stone | TileKind::Gold | TileKind::Silver => {
                generator.ensure_stone_profile(columns, rng, column);
                if let Some(profile) = columns.stone_mut(column) {
                    profile.add_variation(row, kind);
                }
            }
            TileKind::Dirt | TileKind::None => {}
        }

        // Solid ground over a carved row un-carves it.
        generator.ensure_stone_profile(columns, rng, column);
        if let Some(profile) = columns.stone_mut(column) {
            profile.cave_rows.remove(&row);
        }

        log::debug!("[EDIT] placed {kind:?} at ({column}, {row})");
        true
    }

    /// Clear the tile at world coordinates. Succeeds only on a non-empty
    /// cell inside the vertical bounds.
    pub fn remove_tile<R: WorldRng>(
        &mut self,
        column: i32,
        row: i32,
        columns: &mut ColumnStore,
        generator: &WorldGenerator,
        rng: &mut R,
    ) -> bool {
        let world = &generator.config().world;
        if row < 0 || row >= world.world_height {
            return false;
        }

        let (chunk_index, local) = Self::chunk_coords(column, world.chunk_width);
        self.ensure_chunk(chunk_index, columns, generator, rng);
        let Some(chunk) = self.chunks.get_mut(&chunk_index) else {
            return false;
        };
        let removed = chunk.get(local, row);
        if removed == TileKind::None {
            return false;
        }
        chunk.set(local, row, TileKind::None);

        if let Some(mountain) = columns.mountain_mut(column) {
            if row == mountain.top_row(world.surface_level) {
                mountain.grass_rows.remove(&row);
            }
        }

        if let Some(profile) = columns.stone_mut(column) {
            profile.remove_variation(row);
            if row > world.surface_level + profile.start_depth {
                // Depth-classified stone: keep the hole visible to any later
                // materialization.
                profile.cave_rows.insert(row);
            }
        }

        log::debug!("[EDIT] removed {removed:?} at ({column}, {row})");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_chunk_coords_positive() {
        assert_eq!(ChunkStore::chunk_coords(0, 16), (0, 0));
        assert_eq!(ChunkStore::chunk_coords(15, 16), (0, 15));
        assert_eq!(ChunkStore::chunk_coords(16, 16), (1, 0));
        assert_eq!(ChunkStore::chunk_coords(100, 16), (6, 4));
    }

    #[test]
    fn test_chunk_coords_negative() {
        assert_eq!(ChunkStore::chunk_coords(-1, 16), (-1, 15));
        assert_eq!(ChunkStore::chunk_coords(-16, 16), (-1, 0));
        assert_eq!(ChunkStore::chunk_coords(-17, 16), (-2, 15));
    }

    fn setup() -> (ChunkStore, ColumnStore, WorldGenerator, Xoshiro256StarStar) {
        (
            ChunkStore::new(),
            ColumnStore::new(),
            WorldGenerator::new(),
            Xoshiro256StarStar::seed_from_u64(21),
        )
    }

    #[test]
    fn test_ensure_chunk_creates_once() {
        let (mut store, mut columns, generator, mut rng) = setup();

        store.ensure_chunk(3, &mut columns, &generator, &mut rng);
        assert_eq!(store.chunk_count(), 1);
        assert!(store.has_chunk(3));

        store.ensure_chunk(3, &mut columns, &generator, &mut rng);
        assert_eq!(store.chunk_count(), 1);
    }

    #[test]
    fn test_ensure_chunk_fills_from_metadata() {
        let (mut store, mut columns, generator, mut rng) = setup();

        // Depth-classified stone must appear without any prior generation
        // pass; profiles are ensured during the fill.
        let tile = store.get_tile(40, 119, &mut columns, &generator, &mut rng);
        assert_eq!(tile, TileKind::Stone);
        assert!(columns.has_stone_profile(40));

        let surface = store.get_tile(40, 50, &mut columns, &generator, &mut rng);
        assert_eq!(surface, TileKind::Grass);
    }

    #[test]
    fn test_get_tile_out_of_bounds_is_none() {
        let (mut store, mut columns, generator, mut rng) = setup();

        assert_eq!(
            store.get_tile(0, -1, &mut columns, &generator, &mut rng),
            TileKind::None
        );
        assert_eq!(
            store.get_tile(0, 120, &mut columns, &generator, &mut rng),
            TileKind::None
        );
    }

    #[test]
    fn test_place_out_of_bounds_creates_no_chunk() {
        let (mut store, mut columns, generator, mut rng) = setup();

        assert!(!store.place_tile(5, -1, TileKind::Stone, &mut columns, &generator, &mut rng));
        assert!(!store.place_tile(5, 120, TileKind::Stone, &mut columns, &generator, &mut rng));
        assert_eq!(store.chunk_count(), 0);
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let (mut store, mut columns, generator, mut rng) = setup();

        // Row 51 is dirt on a default column.
        assert!(!store.place_tile(5, 51, TileKind::Stone, &mut columns, &generator, &mut rng));
        assert_eq!(
            store.get_tile(5, 51, &mut columns, &generator, &mut rng),
            TileKind::Dirt
        );
    }

    #[test]
    fn test_place_rejects_explicit_none() {
        let (mut store, mut columns, generator, mut rng) = setup();

        assert!(!store.place_tile(5, 20, TileKind::None, &mut columns, &generator, &mut rng));
    }

    #[test]
    fn test_place_stone_records_variation_and_uncarves() {
        let (mut store, mut columns, generator, mut rng) = setup();

        // Clear a deep cell first; removal below the start depth records a
        // cave row.
        assert!(store.remove_tile(7, 110, &mut columns, &generator, &mut rng));
        assert!(columns.stone(7).unwrap().cave_rows.contains(&110));

        assert!(store.place_tile(7, 110, TileKind::Stone, &mut columns, &generator, &mut rng));
        let profile = columns.stone(7).unwrap();
        assert!(profile.stone_rows.contains(&110));
        assert!(!profile.cave_rows.contains(&110));
    }

    #[test]
    fn test_remove_clears_variation_sets() {
        let (mut store, mut columns, generator, mut rng) = setup();

        assert!(store.remove_tile(9, 110, &mut columns, &generator, &mut rng));
        assert!(store.place_tile(9, 110, TileKind::Gold, &mut columns, &generator, &mut rng));
        assert!(columns.stone(9).unwrap().gold_rows.contains(&110));

        assert!(store.remove_tile(9, 110, &mut columns, &generator, &mut rng));
        let profile = columns.stone(9).unwrap();
        assert!(!profile.gold_rows.contains(&110));
        // Still below the start depth, so the hole stays carved.
        assert!(profile.cave_rows.contains(&110));
        assert_eq!(
            store.get_tile(9, 110, &mut columns, &generator, &mut rng),
            TileKind::None
        );
    }

    #[test]
    fn test_remove_empty_cell_is_noop() {
        let (mut store, mut columns, generator, mut rng) = setup();

        // Row 10 is sky on a default column.
        assert!(!store.remove_tile(5, 10, &mut columns, &generator, &mut rng));
    }

    #[test]
    fn test_place_grass_creates_mountain_metadata() {
        let (mut store, mut columns, generator, mut rng) = setup();

        assert!(store.place_tile(5, 44, TileKind::Grass, &mut columns, &generator, &mut rng));
        let mountain = columns.mountain(5).expect("mountain profile created");
        assert_eq!(mountain.height, 6);
        assert!(!mountain.is_surface);
        assert!(mountain.grass_rows.contains(&44));

        // Removing the grass at the profile top clears the grass row.
        assert!(store.remove_tile(5, 44, &mut columns, &generator, &mut rng));
        assert!(!columns.mountain(5).unwrap().grass_rows.contains(&44));
    }
}
