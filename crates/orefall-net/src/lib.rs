//! Replication payload contracts and dispatch for the Orefall world
//!
//! Transport, framing and session management belong to an external layer;
//! this crate pins down the payload shapes peers exchange, the delivery
//! class each payload requires, and the single dispatch path that funnels
//! replicated tile edits into the world core.

pub mod messages;
pub mod remote;
pub mod replication;

pub use messages::{
    decode, encode, Delivery, Message, MessageKind, PlayerJoined, PlayerLeft, PlayerState,
    ProtocolError, TileChange,
};
pub use remote::{RemotePlayer, RemoteRegistry};
pub use replication::apply_message;
