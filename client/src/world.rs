use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use serde_json::Value;
use tallgrass_protocol::Encounter;
use tallgrass_protocol::encounter::DEFAULT_TERRAIN;

/// The hosting world, as seen from a battle
pub trait World {
    /// Pause or resume world simulation. The controller sets it once when
    /// a session opens and clears it once when that session closes.
    fn set_paused(&mut self, paused: bool);
}

/// Shareable pause flag for hosts that only need the boolean
#[derive(Debug, Clone, Default)]
pub struct PauseFlag(Arc<AtomicBool>);

impl PauseFlag {
    pub fn is_paused(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl World for PauseFlag {
    fn set_paused(&mut self, paused: bool) {
        self.0.store(paused, Ordering::Relaxed);
    }
}

/// An action fired by the world hook
#[derive(Debug, Clone, PartialEq)]
pub enum WorldAction {
    /// `wildencounter`: hand an encounter to the battle client
    WildEncounter(Encounter),
    /// Any other action; not ours to handle
    Ignored(String),
}

impl WorldAction {
    /// Parse `onAction(action, data)`.
    ///
    /// For `wildencounter`, `data.encounter` is required. Its terrain falls
    /// back to `data.terrain` and then to `"grass"`; `data.mapId` (string or
    /// number) is attached when present.
    pub fn parse(action: &str, data: &Value) -> Result<Self> {
        if action != "wildencounter" {
            return Ok(WorldAction::Ignored(action.to_string()));
        }

        let mut encounter = data
            .get("encounter")
            .and_then(Value::as_object)
            .cloned()
            .context("wildencounter without an encounter object")?;

        let has_terrain = encounter
            .get("terrain")
            .and_then(Value::as_str)
            .is_some_and(|t| !t.is_empty());
        if !has_terrain {
            let terrain = data
                .get("terrain")
                .and_then(Value::as_str)
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_TERRAIN);
            encounter.insert("terrain".to_string(), Value::from(terrain));
        }

        let map_id = match data.get("mapId") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        };
        match map_id {
            Some(id) => {
                encounter.insert("mapId".to_string(), Value::from(id));
            }
            None => {
                // a non-string mapId on the encounter itself would fail to parse
                if encounter.get("mapId").is_some_and(|v| !v.is_string()) {
                    encounter.remove("mapId");
                }
            }
        }

        let encounter: Encounter = serde_json::from_value(Value::Object(encounter))
            .context("Malformed wild encounter")?;
        Ok(WorldAction::WildEncounter(encounter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wild_encounter_defaults() {
        let data = json!({
            "encounter": { "species": "Rattata", "pokemonId": 19, "level": 3 }
        });

        let WorldAction::WildEncounter(encounter) =
            WorldAction::parse("wildencounter", &data).unwrap()
        else {
            panic!("expected an encounter");
        };
        assert_eq!(encounter.terrain, "grass");
        assert_eq!(encounter.map_id, None);
    }

    #[test]
    fn test_wild_encounter_context() {
        let data = json!({
            "encounter": { "species": "Magikarp", "pokemonId": 129, "level": 5 },
            "terrain": "water",
            "mapId": 12
        });

        let WorldAction::WildEncounter(encounter) =
            WorldAction::parse("wildencounter", &data).unwrap()
        else {
            panic!("expected an encounter");
        };
        assert_eq!(encounter.terrain, "water");
        assert_eq!(encounter.map_id.as_deref(), Some("12"));
    }

    #[test]
    fn test_encounter_terrain_wins() {
        let data = json!({
            "encounter": { "species": "Zubat", "pokemonId": 41, "level": 6, "terrain": "cave" },
            "terrain": "grass"
        });

        let WorldAction::WildEncounter(encounter) =
            WorldAction::parse("wildencounter", &data).unwrap()
        else {
            panic!("expected an encounter");
        };
        assert_eq!(encounter.terrain, "cave");
    }

    #[test]
    fn test_other_actions_ignored() {
        let action = WorldAction::parse("pcinteraction", &json!({})).unwrap();
        assert_eq!(action, WorldAction::Ignored("pcinteraction".to_string()));
    }

    #[test]
    fn test_missing_encounter_is_error() {
        assert!(WorldAction::parse("wildencounter", &json!({ "terrain": "grass" })).is_err());
    }

    #[test]
    fn test_pause_flag() {
        let mut flag = PauseFlag::default();
        let observer = flag.clone();

        flag.set_paused(true);
        assert!(observer.is_paused());
        flag.set_paused(false);
        assert!(!observer.is_paused());
    }
}
