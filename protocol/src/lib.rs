//! Wire types for the battle session API.
//!
//! The resolver is authoritative: every call returns a complete
//! [`BattleState`] snapshot that replaces whatever the client held before.
//! This crate only describes and parses those payloads; it performs no I/O.

use thiserror::Error;

pub mod client;
pub mod encounter;
pub mod server;

pub use client::{ActionRequest, StartRequest};
pub use encounter::Encounter;
pub use server::{
    ActionBody, BackgroundsBody, BattleState, Combatant, EventKind, Move, Outcome, Reply, Side,
    StartBody, TurnEvent, parse_action_reply, parse_backgrounds, parse_start_reply,
};

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid reply body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
