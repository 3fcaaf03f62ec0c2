mod battle_state;
mod event;
mod tests;

pub use battle_state::{BattleState, Combatant, Move, Outcome, Side};
pub use event::{EventKind, TurnEvent};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ProtocolError;

/// Resolver reply envelope: `{ ok: true, ... }` or `{ ok: false, error }`
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Accepted(T),
    Rejected { error: Option<String> },
}

impl<T> Reply<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Reply::Accepted(_))
    }
}

/// Accepted body of `POST /api/battle/start`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StartBody {
    pub state: BattleState,
}

/// Accepted body of `POST /api/battle/action`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionBody {
    pub state: BattleState,

    /// Absent on `run` replies
    #[serde(default)]
    pub events: Vec<TurnEvent>,
}

/// Body of `GET /api/battle/backgrounds`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct BackgroundsBody {
    #[serde(default)]
    pub results: Vec<String>,
}

/// Parse a start reply body
pub fn parse_start_reply(body: &str) -> Result<Reply<StartBody>, ProtocolError> {
    parse_reply(body)
}

/// Parse an action reply body
pub fn parse_action_reply(body: &str) -> Result<Reply<ActionBody>, ProtocolError> {
    parse_reply(body)
}

/// Parse the background list. Anything unreadable is an empty list.
pub fn parse_backgrounds(body: &str) -> BackgroundsBody {
    serde_json::from_str(body).unwrap_or_default()
}

fn parse_reply<T: DeserializeOwned>(body: &str) -> Result<Reply<T>, ProtocolError> {
    let value: Value = serde_json::from_str(body)?;

    if value.get("ok").and_then(Value::as_bool) != Some(true) {
        let error = value
            .get("error")
            .and_then(Value::as_str)
            .filter(|e| !e.is_empty())
            .map(str::to_string);
        return Ok(Reply::Rejected { error });
    }

    if value.get("state").is_none() {
        return Err(ProtocolError::MissingField("state".to_string()));
    }

    Ok(Reply::Accepted(serde_json::from_value(value)?))
}
