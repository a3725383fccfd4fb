//! Post-generation feature placement - surface tree markers
//!
//! Trees are decorative markers, not tiles: positions live in a global set
//! and are never validated against later grid edits, so removing the ground
//! under a marker leaves it floating. Placement is purely additive; there
//! is no removal path.

use ahash::AHashSet;
use glam::IVec2;

use super::column::ColumnStore;
use super::rng_trait::WorldRng;
use super::worldgen_config::{TreeParams, WorldParams};

/// Tree markers placed on flat ground and flat mountain tops.
#[derive(Debug, Default)]
pub struct TreePlacement {
    positions: AHashSet<IVec2>,
}

impl TreePlacement {
    pub fn new() -> Self {
        Self {
            positions: AHashSet::new(),
        }
    }

    /// Roll tree placement for every eligible column in `start..=end`.
    pub fn place_trees<R: WorldRng>(
        &mut self,
        params: &TreeParams,
        world: &WorldParams,
        columns: &ColumnStore,
        rng: &mut R,
        start: i32,
        end: i32,
    ) {
        for column in start..=end {
            let Some(profile) = columns.mountain(column) else {
                continue;
            };

            // Flat ground, or a continuation of a flat mountain top.
            let eligible = profile.is_surface
                || columns
                    .mountain(column - 1)
                    .is_some_and(|left| left.height == profile.height);
            if !eligible || !rng.chance(params.frequency) {
                continue;
            }

            let row = if profile.is_surface {
                world.surface_level
            } else {
                world.surface_level - profile.height
            };
            self.positions.insert(IVec2::new(column, row));
        }
    }

    pub fn contains(&self, column: i32, row: i32) -> bool {
        self.positions.contains(&IVec2::new(column, row))
    }

    /// All recorded markers.
    pub fn positions(&self) -> &AHashSet<IVec2> {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
