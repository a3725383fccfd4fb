//! World management - column metadata, chunked tile storage, generation

mod caves;
mod chunk;
mod chunk_store;
mod classify;
mod column;
pub mod features;
pub mod generation;
mod rng_trait;
mod tile;
pub mod view;
#[allow(clippy::module_inception)]
mod world;
pub mod worldgen_config;

pub use caves::CaveCarver;
pub use chunk::Chunk;
pub use chunk_store::ChunkStore;
pub use classify::effective_tile;
pub use column::{ColumnRecord, ColumnStore, MountainProfile, StoneProfile};
pub use features::TreePlacement;
pub use generation::WorldGenerator;
pub use rng_trait::WorldRng;
pub use tile::TileKind;
pub use world::World;
pub use worldgen_config::{
    CaveParams, MountainParams, StoneParams, TreeParams, VeinParams, ViewParams, WorldGenConfig,
    WorldParams,
};
