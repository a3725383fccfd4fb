//! Wire payload contracts for world replication
//!
//! Payload shapes only; how bytes are framed and delivered is the session
//! layer's problem. Tile changes must arrive reliable and ordered per
//! sender - place and remove do not commute on a cell, so reordering two
//! edits of the same cell diverges the metadata.

use orefall_core::TileKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Replication protocol violations. Offending messages are dropped without
/// touching world state.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unknown tile kind byte {0}")]
    UnknownTileKind(u8),
    #[error("payload encode failed: {0}")]
    Encode(#[from] bincode_next::error::EncodeError),
    #[error("payload decode failed: {0}")]
    Decode(#[from] bincode_next::error::DecodeError),
}

/// Tag byte identifying a payload on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    PlayerState = 0,
    TileChange = 1,
    PlayerJoined = 2,
    PlayerLeft = 3,
}

/// Delivery class a payload requires from the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Per-sender FIFO, no loss. Required wherever replay order matters.
    ReliableOrdered,
    /// Latest-wins; stale packets may be dropped in flight.
    UnreliableSequenced,
}

/// One tile mutation. `tile_kind` stays a raw byte on the wire and is
/// validated at apply time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileChange {
    pub column: i32,
    pub row: i32,
    pub tile_kind: u8,
}

impl TileChange {
    pub fn new(column: i32, row: i32, kind: TileKind) -> Self {
        Self {
            column,
            row,
            tile_kind: kind.as_u8(),
        }
    }

    /// Validated tile kind, or the protocol error that drops the message.
    pub fn tile_kind(&self) -> Result<TileKind, ProtocolError> {
        TileKind::from_u8(self.tile_kind).ok_or(ProtocolError::UnknownTileKind(self.tile_kind))
    }
}

/// Position and animation snapshot of one player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub player_id: i32,
    pub x: f32,
    pub y: f32,
    pub animation_frame: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerJoined {
    pub player_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLeft {
    pub player_id: i32,
}

/// Every payload the replication layer exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Message {
    PlayerState(PlayerState),
    TileChange(TileChange),
    PlayerJoined(PlayerJoined),
    PlayerLeft(PlayerLeft),
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::PlayerState(_) => MessageKind::PlayerState,
            Message::TileChange(_) => MessageKind::TileChange,
            Message::PlayerJoined(_) => MessageKind::PlayerJoined,
            Message::PlayerLeft(_) => MessageKind::PlayerLeft,
        }
    }

    /// Delivery class the transport must provide for this payload.
    pub fn delivery(&self) -> Delivery {
        match self {
            Message::PlayerState(_) => Delivery::UnreliableSequenced,
            _ => Delivery::ReliableOrdered,
        }
    }
}

/// Serialize a message to payload bytes.
pub fn encode(message: &Message) -> Result<Vec<u8>, ProtocolError> {
    Ok(bincode_next::serde::encode_to_vec(
        message,
        bincode_next::config::standard(),
    )?)
}

/// Deserialize payload bytes produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<Message, ProtocolError> {
    let (message, _) =
        bincode_next::serde::decode_from_slice(bytes, bincode_next::config::standard())?;
    Ok(message)
}
