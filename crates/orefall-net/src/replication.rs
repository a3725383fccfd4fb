//! Message dispatch into the world core
//!
//! The receiver's whole contract: tile changes are validated and funneled
//! through the same mutation path local edits use, player messages only
//! touch the remote registry. Callers must feed tile changes in per-sender
//! send order - the edits do not commute.

use orefall_core::World;

use crate::messages::{Message, ProtocolError};
use crate::remote::RemoteRegistry;

/// Apply one decoded message. A protocol error leaves both the world and
/// the registry unchanged.
pub fn apply_message(
    world: &mut World,
    registry: &mut RemoteRegistry,
    message: &Message,
) -> Result<(), ProtocolError> {
    match message {
        Message::TileChange(change) => {
            let kind = change.tile_kind()?;
            if !world.apply_remote_change(change.column, change.row, kind) {
                // Stale edit (cell already matched); idempotent no-op.
                log::trace!(
                    "[NET] tile change at ({}, {}) had no effect",
                    change.column,
                    change.row
                );
            }
            Ok(())
        }
        Message::PlayerState(state) => {
            registry.apply_state(state);
            Ok(())
        }
        Message::PlayerJoined(joined) => {
            registry.apply_joined(joined);
            Ok(())
        }
        Message::PlayerLeft(left) => {
            registry.apply_left(left);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{PlayerJoined, PlayerState, TileChange};
    use orefall_core::TileKind;

    #[test]
    fn test_tile_change_matches_local_edit() {
        let mut local = World::new(31);
        let mut replicated = World::new(31);
        let mut registry = RemoteRegistry::new();

        // Deep stone exists on untouched columns; clear it both ways.
        assert!(local.is_solid(12, 100));
        assert!(replicated.is_solid(12, 100));

        assert!(local.remove_tile(12, 100));
        let message = Message::TileChange(TileChange::new(12, 100, TileKind::None));
        apply_message(&mut replicated, &mut registry, &message).expect("apply");

        assert_eq!(local.get_tile(12, 100), replicated.get_tile(12, 100));
        assert_eq!(
            local.stone_profile(12).cloned(),
            replicated.stone_profile(12).cloned()
        );
    }

    #[test]
    fn test_unknown_tile_kind_drops_message() {
        let mut world = World::new(31);
        let mut registry = RemoteRegistry::new();

        let message = Message::TileChange(TileChange {
            column: 4,
            row: 60,
            tile_kind: 200,
        });
        let result = apply_message(&mut world, &mut registry, &message);

        assert!(matches!(result, Err(ProtocolError::UnknownTileKind(200))));
        // The bad payload never reached the world: nothing materialized.
        assert_eq!(world.chunk_count(), 0);
    }

    #[test]
    fn test_player_messages_route_to_registry() {
        let mut world = World::new(31);
        let mut registry = RemoteRegistry::new();

        apply_message(
            &mut world,
            &mut registry,
            &Message::PlayerJoined(PlayerJoined { player_id: 3 }),
        )
        .expect("join");
        apply_message(
            &mut world,
            &mut registry,
            &Message::PlayerState(PlayerState {
                player_id: 3,
                x: 8.0,
                y: 9.0,
                animation_frame: 6,
            }),
        )
        .expect("state");

        let player = registry.get(3).expect("registered");
        assert_eq!(player.animation_frame, 6);
        assert_eq!(world.chunk_count(), 0);
    }
}
