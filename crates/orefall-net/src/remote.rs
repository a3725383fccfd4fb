//! Remote peer bookkeeping driven by replication messages

use std::collections::HashMap;

use glam::Vec2;

use crate::messages::{PlayerJoined, PlayerLeft, PlayerState};

/// Last known state of one remote player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemotePlayer {
    pub player_id: i32,
    pub position: Vec2,
    pub animation_frame: i32,
}

/// Remote players keyed by id. Join and leave messages create and destroy
/// records; state messages update them. World state is never touched here.
#[derive(Debug, Default)]
pub struct RemoteRegistry {
    players: HashMap<i32, RemotePlayer>,
}

impl RemoteRegistry {
    pub fn new() -> Self {
        Self {
            players: HashMap::new(),
        }
    }

    pub fn apply_joined(&mut self, message: &PlayerJoined) {
        self.players
            .entry(message.player_id)
            .or_insert(RemotePlayer {
                player_id: message.player_id,
                position: Vec2::ZERO,
                animation_frame: 0,
            });
        log::debug!("[NET] player {} joined", message.player_id);
    }

    pub fn apply_left(&mut self, message: &PlayerLeft) {
        self.players.remove(&message.player_id);
        log::debug!("[NET] player {} left", message.player_id);
    }

    /// Update a known player's snapshot; state for unknown ids is ignored
    /// (the join message may have raced ahead of us).
    pub fn apply_state(&mut self, message: &PlayerState) {
        match self.players.get_mut(&message.player_id) {
            Some(player) => {
                player.position = Vec2::new(message.x, message.y);
                player.animation_frame = message.animation_frame;
            }
            None => {
                log::trace!("[NET] state for unknown player {}", message.player_id);
            }
        }
    }

    pub fn get(&self, player_id: i32) -> Option<&RemotePlayer> {
        self.players.get(&player_id)
    }

    pub fn players(&self) -> impl Iterator<Item = &RemotePlayer> {
        self.players.values()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
