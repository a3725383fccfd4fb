//! Screen/world coordinate transforms
//!
//! Pure helpers over the fixed draw offsets; no world state involved.

use glam::{IVec2, Vec2};

use super::worldgen_config::ViewParams;

/// Convert a screen-space point to (column, row) tile coordinates.
pub fn screen_to_column_row(view: &ViewParams, screen: Vec2) -> IVec2 {
    let world_x = screen.x - view.draw_x_offset + view.world_x_offset;
    let world_y = screen.y - view.draw_y_offset - view.world_y_offset;
    IVec2::new(
        (world_x / view.tile_size).floor() as i32,
        (world_y / view.tile_size).floor() as i32,
    )
}

/// World-space center of a tile.
pub fn tile_center(view: &ViewParams, tile: IVec2) -> Vec2 {
    Vec2::new(
        tile.x as f32 * view.tile_size + view.tile_size / 2.0,
        tile.y as f32 * view.tile_size + view.tile_size / 2.0,
    )
}

/// Whether an entity center is close enough to a tile to interact with it.
pub fn is_within_interaction_range(
    view: &ViewParams,
    entity_center: Vec2,
    tile: IVec2,
    max_distance: f32,
) -> bool {
    entity_center.distance(tile_center(view, tile)) <= max_distance
}
