//! Encounter descriptor handed in by the world

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_TERRAIN: &str = "grass";

fn default_terrain() -> String {
    DEFAULT_TERRAIN.to_string()
}

/// A wild or scripted creature fight opportunity.
///
/// Immutable input to `start`. Fields the client does not understand
/// (such as `rarity`) are kept in `extra` and sent back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encounter {
    pub species: String,

    pub pokemon_id: u32,

    pub level: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stats: BTreeMap<String, Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moves: Vec<EncounterMove>,

    #[serde(default = "default_terrain")]
    pub terrain: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_id: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Encounter {
    pub fn new(species: impl Into<String>, pokemon_id: u32, level: u32) -> Self {
        Self {
            species: species.into(),
            pokemon_id,
            level,
            nature: None,
            stats: BTreeMap::new(),
            moves: Vec::new(),
            terrain: default_terrain(),
            map_id: None,
            extra: Map::new(),
        }
    }

    /// Terrain tag normalized for background lookup
    pub fn terrain_tag(&self) -> String {
        self.terrain.trim().to_lowercase()
    }
}

/// A move listed on an encounter, kept exactly as the world sent it.
///
/// The world keys the name as `moveName`, the resolver as `name`; the entry
/// is forwarded with whichever key it arrived with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncounterMove(pub Map<String, Value>);

impl EncounterMove {
    pub fn name(&self) -> Option<&str> {
        self.0
            .get("name")
            .or_else(|| self.0.get("moveName"))
            .and_then(Value::as_str)
    }
}
