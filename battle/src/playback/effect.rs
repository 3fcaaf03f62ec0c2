//! Visual effect for each turn event

use tallgrass_protocol::{EventKind, Side, TurnEvent};

/// What the screen does for one event. Every event maps to exactly one
/// effect, including events that show nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a line in the textbox
    Say(String),
    /// Shake the struck side's sprite and narrate the hit
    Strike { target: Side, text: String },
    /// Redraw the move buttons so PP counts are current
    RefreshMoves,
    /// Nothing to show; the event still takes its dwell time
    Silent,
}

impl Effect {
    pub fn for_event(event: &TurnEvent) -> Self {
        let narration = event.narration().map(str::to_string);

        match event.kind {
            EventKind::Message => narration.map_or(Effect::Silent, Effect::Say),
            EventKind::Damage => Effect::Strike {
                target: match event.target {
                    Some(Side::Enemy) => Side::Enemy,
                    _ => Side::Player,
                },
                text: event
                    .message
                    .clone()
                    .unwrap_or_else(|| "Ataque acertou!".to_string()),
            },
            EventKind::Miss => Effect::Say(
                event
                    .message
                    .clone()
                    .unwrap_or_else(|| "O ataque errou!".to_string()),
            ),
            EventKind::SuperEffective => Effect::Say("É super efetivo!".to_string()),
            EventKind::NotVeryEffective => Effect::Say("Não é muito efetivo...".to_string()),
            EventKind::NoEffect => Effect::Say("Não teve efeito!".to_string()),
            EventKind::Pp => Effect::RefreshMoves,
            EventKind::Other => narration.map_or(Effect::Silent, Effect::Say),
        }
    }

    /// Text this effect puts in the textbox
    pub fn text(&self) -> Option<&str> {
        match self {
            Effect::Say(text) | Effect::Strike { text, .. } => Some(text),
            Effect::RefreshMoves | Effect::Silent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_event() {
        let effect = Effect::for_event(&TurnEvent::message("Rattata desmaiou!"));
        assert_eq!(effect, Effect::Say("Rattata desmaiou!".into()));
    }

    #[test]
    fn test_message_event_without_text() {
        let effect = Effect::for_event(&TurnEvent::new(EventKind::Message));
        assert_eq!(effect, Effect::Silent);
    }

    #[test]
    fn test_damage_targets() {
        let effect = Effect::for_event(&TurnEvent::damage(Side::Enemy));
        assert_eq!(
            effect,
            Effect::Strike {
                target: Side::Enemy,
                text: "Ataque acertou!".into()
            }
        );

        let mut event = TurnEvent::new(EventKind::Damage);
        event.message = Some("Ai!".into());
        assert_eq!(
            Effect::for_event(&event),
            Effect::Strike {
                target: Side::Player,
                text: "Ai!".into()
            }
        );
    }

    #[test]
    fn test_effectiveness_lines() {
        let kinds = [
            (EventKind::SuperEffective, "É super efetivo!"),
            (EventKind::NotVeryEffective, "Não é muito efetivo..."),
            (EventKind::NoEffect, "Não teve efeito!"),
            (EventKind::Miss, "O ataque errou!"),
        ];
        for (kind, line) in kinds {
            assert_eq!(Effect::for_event(&TurnEvent::new(kind)).text(), Some(line));
        }
    }

    #[test]
    fn test_pp_and_unknown() {
        assert_eq!(
            Effect::for_event(&TurnEvent::new(EventKind::Pp)),
            Effect::RefreshMoves
        );
        assert_eq!(
            Effect::for_event(&TurnEvent::new(EventKind::Other)),
            Effect::Silent
        );

        let mut event = TurnEvent::new(EventKind::Other);
        event.message = Some("Level up!".into());
        assert_eq!(Effect::for_event(&event), Effect::Say("Level up!".into()));
    }
}
