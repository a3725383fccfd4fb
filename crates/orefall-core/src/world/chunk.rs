//! Fixed-size tile grid segment

use super::tile::TileKind;

/// One `width x height` block of materialized tiles. Cells default to
/// `TileKind::None` until the store fills them.
#[derive(Debug, Clone)]
pub struct Chunk {
    index: i32,
    width: i32,
    height: i32,
    tiles: Vec<TileKind>,
}

impl Chunk {
    pub fn new(index: i32, width: i32, height: i32) -> Self {
        Self {
            index,
            width,
            height,
            tiles: vec![TileKind::None; (width * height) as usize],
        }
    }

    pub fn index(&self) -> i32 {
        self.index
    }

    /// Tile at local coordinates; out-of-bounds reads are `None`.
    pub fn get(&self, local_column: i32, row: i32) -> TileKind {
        if self.in_bounds(local_column, row) {
            self.tiles[self.cell(local_column, row)]
        } else {
            TileKind::None
        }
    }

    /// Write a cell; out-of-bounds writes are dropped.
    pub fn set(&mut self, local_column: i32, row: i32, kind: TileKind) {
        if self.in_bounds(local_column, row) {
            let cell = self.cell(local_column, row);
            self.tiles[cell] = kind;
        }
    }

    fn in_bounds(&self, local_column: i32, row: i32) -> bool {
        local_column >= 0 && local_column < self.width && row >= 0 && row < self.height
    }

    fn cell(&self, local_column: i32, row: i32) -> usize {
        (row * self.width + local_column) as usize
    }
}
