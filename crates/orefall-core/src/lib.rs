//! Orefall core - a horizontally-unbounded, chunked 2D tile world
//!
//! Procedural mountains, stone strata, ore veins, caves and trees are
//! generated lazily around a view position, stored in a sparse chunk grid,
//! and reconciled against runtime edits, local or replicated.

pub mod world;

pub use world::{TileKind, World, WorldGenConfig};
