use serde::Serialize;

use crate::Encounter;

pub const START_PATH: &str = "/api/battle/start";
pub const ACTION_PATH: &str = "/api/battle/action";
pub const BACKGROUNDS_PATH: &str = "/api/battle/backgrounds";

/// Body of `POST /api/battle/start`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartRequest<'a> {
    pub encounter: &'a Encounter,
}

/// Body of `POST /api/battle/action`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionRequest {
    /// {"type":"move","moveName":NAME}
    Move {
        #[serde(rename = "moveName")]
        move_name: String,
    },

    /// {"type":"run"}
    Run,
}

impl ActionRequest {
    pub fn use_move(name: impl Into<String>) -> Self {
        Self::Move {
            move_name: name.into(),
        }
    }

    /// Whether a successful reply to this action always closes the session
    pub fn is_run(&self) -> bool {
        matches!(self, Self::Run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_body() {
        let body = serde_json::to_value(ActionRequest::use_move("tackle")).unwrap();
        assert_eq!(body, json!({ "type": "move", "moveName": "tackle" }));
    }

    #[test]
    fn test_run_body() {
        let body = serde_json::to_value(ActionRequest::Run).unwrap();
        assert_eq!(body, json!({ "type": "run" }));
    }

    #[test]
    fn test_start_body_wraps_encounter() {
        let encounter = Encounter::new("Rattata", 19, 3);
        let body = serde_json::to_value(StartRequest {
            encounter: &encounter,
        })
        .unwrap();

        assert_eq!(body["encounter"]["species"], "Rattata");
        assert_eq!(body["encounter"]["pokemonId"], 19);
        assert_eq!(body["encounter"]["level"], 3);
    }
}
