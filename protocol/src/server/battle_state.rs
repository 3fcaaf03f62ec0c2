//! Authoritative battle snapshot returned by the resolver

use serde::{Deserialize, Serialize};

/// One side of a wild battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Enemy => "enemy",
        }
    }
}

/// How the resolver closed the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Run,
}

/// Full battle snapshot. Each reply replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleState {
    pub player: Combatant,

    pub enemy: Combatant,

    #[serde(default)]
    pub ended: bool,

    #[serde(default)]
    pub winner: Option<Side>,

    #[serde(default)]
    pub result: Option<Outcome>,

    #[serde(default)]
    pub exp_gained: Option<u32>,

    #[serde(default)]
    pub log: Vec<String>,
}

impl BattleState {
    /// Winner of an ended battle. Falls back to `result` when the
    /// resolver did not fill `winner`.
    pub fn winner(&self) -> Option<Side> {
        self.winner.or(match self.result {
            Some(Outcome::Win) => Some(Side::Player),
            Some(Outcome::Lose) => Some(Side::Enemy),
            Some(Outcome::Run) | None => None,
        })
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Enemy => &self.enemy,
        }
    }

    /// Most recent narration line, if any
    pub fn last_log(&self) -> Option<&str> {
        self.log.last().map(String::as_str)
    }
}

/// One side's creature in battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CombatantWire")]
pub struct Combatant {
    pub name: Option<String>,
    pub pokemon_id: Option<u32>,
    pub level: u32,
    pub current_hp: f64,
    pub max_hp: f64,
    pub moves: Vec<Move>,
}

/// The resolver repeats HP under `currentHP`/`maxHP` next to the
/// camel-case fields; either spelling is accepted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CombatantWire {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    pokemon_id: Option<u32>,
    #[serde(default)]
    level: Option<u32>,
    #[serde(default)]
    current_hp: Option<f64>,
    #[serde(default, rename = "currentHP")]
    current_hp_upper: Option<f64>,
    #[serde(default)]
    max_hp: Option<f64>,
    #[serde(default, rename = "maxHP")]
    max_hp_upper: Option<f64>,
    #[serde(default)]
    moves: Vec<Move>,
}

impl From<CombatantWire> for Combatant {
    fn from(wire: CombatantWire) -> Self {
        Self {
            name: wire.name,
            pokemon_id: wire.pokemon_id,
            level: wire.level.unwrap_or(1),
            current_hp: wire.current_hp.or(wire.current_hp_upper).unwrap_or(0.0),
            max_hp: wire.max_hp.or(wire.max_hp_upper).unwrap_or(1.0),
            moves: wire.moves,
        }
    }
}

impl Combatant {
    pub fn new(name: impl Into<String>, pokemon_id: u32, level: u32, hp: f64) -> Self {
        Self {
            name: Some(name.into()),
            pokemon_id: Some(pokemon_id),
            level,
            current_hp: hp,
            max_hp: hp,
            moves: Vec::new(),
        }
    }

    /// Display name, empty when the resolver sent none
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Move bound to a menu slot
    pub fn move_slot(&self, slot: usize) -> Option<&Move> {
        self.moves.get(slot).filter(|m| !m.name.is_empty())
    }
}

/// A move with its power points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,

    #[serde(default, rename = "type")]
    pub move_type: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default, rename = "currentPP")]
    pub current_pp: u32,

    #[serde(default, rename = "maxPP")]
    pub max_pp: u32,
}

impl Move {
    pub fn new(name: impl Into<String>, pp: u32) -> Self {
        Self {
            name: name.into(),
            move_type: None,
            category: None,
            current_pp: pp,
            max_pp: pp,
        }
    }

    pub fn has_pp(&self) -> bool {
        self.current_pp > 0
    }
}
