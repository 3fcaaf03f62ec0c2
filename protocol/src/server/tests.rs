#[cfg(test)]
mod tests {
    use crate::{
        EventKind, Outcome, ProtocolError, Reply, Side, parse_action_reply, parse_backgrounds,
        parse_start_reply,
    };

    const START_OK: &str = r#"{
        "ok": true,
        "state": {
            "id": "1700000000000-abc",
            "ended": false,
            "result": null,
            "log": ["Um Rattata selvagem apareceu!"],
            "player": {
                "pokemonId": 4, "name": "Charmander", "level": 5,
                "maxHp": 20, "currentHp": 18, "maxHP": 20, "currentHP": 18,
                "moves": [
                    { "name": "scratch", "type": "normal", "category": "physical", "currentPP": 35, "maxPP": 35 },
                    { "name": "growl", "type": null, "category": null, "currentPP": 40, "maxPP": 40 }
                ]
            },
            "enemy": {
                "pokemonId": 19, "name": "Rattata", "level": 3,
                "maxHp": 14, "currentHp": 14, "maxHP": 14, "currentHP": 14
            },
            "items": []
        }
    }"#;

    #[test]
    fn test_parse_start_accepted() {
        let reply = parse_start_reply(START_OK).unwrap();
        let Reply::Accepted(body) = reply else {
            panic!("expected accepted reply");
        };

        assert!(!body.state.ended);
        assert_eq!(body.state.player.name(), "Charmander");
        assert_eq!(body.state.player.current_hp, 18.0);
        assert_eq!(body.state.enemy.max_hp, 14.0);
        assert_eq!(body.state.player.moves.len(), 2);
        assert!(body.state.player.moves[1].move_type.is_none());
        assert!(body.state.enemy.moves.is_empty());
        assert_eq!(body.state.last_log(), Some("Um Rattata selvagem apareceu!"));
    }

    #[test]
    fn test_parse_uppercase_hp_only() {
        let body = r#"{"ok":true,"state":{
            "player":{"name":"A","currentHP":3,"maxHP":9},
            "enemy":{"name":"B"}
        }}"#;
        let Reply::Accepted(body) = parse_start_reply(body).unwrap() else {
            panic!("expected accepted reply");
        };

        assert_eq!(body.state.player.current_hp, 3.0);
        assert_eq!(body.state.player.max_hp, 9.0);
        assert_eq!(body.state.enemy.level, 1);
    }

    #[test]
    fn test_parse_start_rejected() {
        let reply = parse_start_reply(r#"{"ok":false,"error":"missing_enemy"}"#).unwrap();
        assert_eq!(
            reply,
            Reply::Rejected {
                error: Some("missing_enemy".to_string())
            }
        );
    }

    #[test]
    fn test_parse_missing_ok_is_rejected() {
        let reply = parse_action_reply("{}").unwrap();
        assert_eq!(reply, Reply::Rejected { error: None });
    }

    #[test]
    fn test_parse_malformed_body() {
        let result = parse_action_reply("<html>502</html>");
        assert!(matches!(result, Err(ProtocolError::InvalidBody(_))));
    }

    #[test]
    fn test_parse_accepted_without_state() {
        let result = parse_action_reply(r#"{"ok":true}"#);
        assert!(matches!(result, Err(ProtocolError::MissingField(_))));
    }

    #[test]
    fn test_parse_action_events_in_order() {
        let body = r#"{
            "ok": true,
            "state": {
                "ended": true, "result": "win",
                "player": {"name": "Charmander", "currentHp": 18, "maxHp": 20,
                    "moves": [{"name": "tackle", "currentPP": 34, "maxPP": 35}]},
                "enemy": {"name": "Rattata", "currentHp": 0, "maxHp": 14}
            },
            "events": [
                {"type": "message", "text": "Charmander usou Tackle e causou 14 de dano."},
                {"type": "super-effective"},
                {"type": "pp", "move": "tackle", "currentPP": 34, "maxPP": 35},
                {"type": "damage", "target": "enemy"},
                {"type": "level-up", "text": "Level up!"}
            ]
        }"#;
        let Reply::Accepted(body) = parse_action_reply(body).unwrap() else {
            panic!("expected accepted reply");
        };

        let kinds: Vec<EventKind> = body.events.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Message,
                EventKind::SuperEffective,
                EventKind::Pp,
                EventKind::Damage,
                EventKind::Other,
            ]
        );
        assert_eq!(body.events[2].current_pp, Some(34));
        assert_eq!(body.events[3].target, Some(Side::Enemy));
        assert_eq!(body.state.result, Some(Outcome::Win));
        assert_eq!(body.state.winner(), Some(Side::Player));
    }

    #[test]
    fn test_parse_unknown_target_keeps_turn() {
        let body = r#"{
            "ok": true,
            "state": {
                "player": {"name": "Charmander", "currentHp": 20, "maxHp": 20},
                "enemy": {"name": "Rattata", "currentHp": 5, "maxHp": 14}
            },
            "events": [
                {"type": "message", "text": "Charmander usou Ember!"},
                {"type": "damage", "target": "both"},
                {"type": "damage", "target": null}
            ]
        }"#;
        let Reply::Accepted(body) = parse_action_reply(body).unwrap() else {
            panic!("expected accepted reply");
        };

        assert_eq!(body.events.len(), 3);
        assert_eq!(body.events[1].kind, EventKind::Damage);
        assert_eq!(body.events[1].target, None);
        assert_eq!(body.events[2].target, None);
        assert_eq!(body.state.enemy.current_hp, 5.0);
    }

    #[test]
    fn test_parse_run_reply_has_no_events() {
        let body = r#"{"ok":true,"state":{"ended":true,"result":"run",
            "player":{"name":"A"},"enemy":{"name":"B"}}}"#;
        let Reply::Accepted(body) = parse_action_reply(body).unwrap() else {
            panic!("expected accepted reply");
        };

        assert!(body.events.is_empty());
        assert!(body.state.ended);
        assert_eq!(body.state.winner(), None);
    }

    #[test]
    fn test_explicit_winner_wins_over_result() {
        let body = r#"{"ok":true,"state":{"ended":true,"winner":"enemy","result":"win",
            "player":{"name":"A"},"enemy":{"name":"B"}}}"#;
        let Reply::Accepted(body) = parse_action_reply(body).unwrap() else {
            panic!("expected accepted reply");
        };

        assert_eq!(body.state.winner(), Some(Side::Enemy));
    }

    #[test]
    fn test_parse_backgrounds() {
        let list = parse_backgrounds(r#"{"ok":true,"results":["/a/1.jpg","/a/2.jpg"]}"#);
        assert_eq!(list.results, vec!["/a/1.jpg", "/a/2.jpg"]);

        assert!(parse_backgrounds("not json").results.is_empty());
        assert!(parse_backgrounds("{}").results.is_empty());
    }
}
