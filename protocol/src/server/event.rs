//! Turn resolution events
//!
//! The order of events inside a reply is part of the contract: the client
//! replays them exactly as listed.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::battle_state::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Message,
    Damage,
    Miss,
    SuperEffective,
    NotVeryEffective,
    NoEffect,
    Pp,
    #[serde(other)]
    Other,
}

/// One narrated or animated step of a resolved turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// `None` when absent or not a side this client knows
    #[serde(
        default,
        deserialize_with = "known_side",
        skip_serializing_if = "Option::is_none"
    )]
    pub target: Option<Side>,

    /// Move whose PP changed (`pp` events)
    #[serde(default, rename = "move", skip_serializing_if = "Option::is_none")]
    pub move_name: Option<String>,

    #[serde(default, rename = "currentPP", skip_serializing_if = "Option::is_none")]
    pub current_pp: Option<u32>,

    #[serde(default, rename = "maxPP", skip_serializing_if = "Option::is_none")]
    pub max_pp: Option<u32>,
}

fn known_side<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Side>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

impl TurnEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            text: None,
            message: None,
            target: None,
            move_name: None,
            current_pp: None,
            max_pp: None,
        }
    }

    pub fn message(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(EventKind::Message)
        }
    }

    pub fn damage(target: Side) -> Self {
        Self {
            target: Some(target),
            ..Self::new(EventKind::Damage)
        }
    }

    /// Narration carried by the event, `text` first then `message`
    pub fn narration(&self) -> Option<&str> {
        self.text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.message.as_deref().filter(|m| !m.is_empty()))
    }
}
