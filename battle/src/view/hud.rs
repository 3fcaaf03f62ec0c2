//! HUD values derived from a battle snapshot
//!
//! Everything here is a pure function of [`BattleState`]; nothing is cached
//! between renders.

use tallgrass_protocol::{BattleState, Combatant, Move};

/// Number of move slots on the fight menu
pub const MOVE_SLOTS: usize = 4;

/// Color band of an HP bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HpBand {
    /// More than half HP left
    Normal,
    /// Above 20% and up to half
    Mid,
    /// 20% or less
    Low,
}

impl HpBand {
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction > 0.5 {
            HpBand::Normal
        } else if fraction > 0.2 {
            HpBand::Mid
        } else {
            HpBand::Low
        }
    }

    /// Marker used by stylesheets; the normal band carries none
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            HpBand::Normal => None,
            HpBand::Mid => Some("mid"),
            HpBand::Low => Some("low"),
        }
    }
}

/// `clamp(current / max, 0, 1)`, zero for a non-positive or non-finite max
pub fn hp_fraction(current: f64, max: f64) -> f64 {
    if !current.is_finite() || !max.is_finite() || max <= 0.0 {
        return 0.0;
    }
    (current / max).clamp(0.0, 1.0)
}

/// Floor to a non-negative integer for numeric readouts
fn readout_value(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        0
    } else {
        value.floor().min(u32::MAX as f64) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HpBar {
    pub fraction: f64,
    /// Bar width as a rounded percentage (0..=100)
    pub width_percent: u32,
    pub band: HpBand,
}

impl HpBar {
    pub fn new(current: f64, max: f64) -> Self {
        let fraction = hp_fraction(current, max);
        Self {
            fraction,
            width_percent: (fraction * 100.0).round() as u32,
            band: HpBand::from_fraction(fraction),
        }
    }
}

/// Numeric `current/max` readout, both floored and non-negative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HpReadout {
    pub current: u32,
    pub max: u32,
}

impl HpReadout {
    pub fn new(current: f64, max: f64) -> Self {
        Self {
            current: readout_value(current),
            max: readout_value(max),
        }
    }
}

impl std::fmt::Display for HpReadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// Nameplate of one combatant
#[derive(Debug, Clone, PartialEq)]
pub struct CombatantHud {
    pub name: String,
    pub level: u32,
    pub hp: HpBar,
    pub readout: HpReadout,
}

impl CombatantHud {
    pub fn new(combatant: &Combatant) -> Self {
        Self {
            name: combatant.name().to_uppercase(),
            level: combatant.level.max(1),
            hp: HpBar::new(combatant.current_hp, combatant.max_hp),
            readout: HpReadout::new(combatant.current_hp, combatant.max_hp),
        }
    }
}

/// Everything the HUD shows for one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct HudView {
    pub player: CombatantHud,
    pub enemy: CombatantHud,
}

impl HudView {
    pub fn render(state: &BattleState) -> Self {
        Self {
            player: CombatantHud::new(&state.player),
            enemy: CombatantHud::new(&state.enemy),
        }
    }
}

/// One button of the fight menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveButton {
    Move { name: String, label: String },
    /// No move bound to the slot; rendered disabled
    Placeholder,
}

impl MoveButton {
    pub fn is_enabled(&self) -> bool {
        matches!(self, MoveButton::Move { .. })
    }

    pub fn label(&self) -> &str {
        match self {
            MoveButton::Move { label, .. } => label,
            MoveButton::Placeholder => "—",
        }
    }
}

/// `NAME\nTYPE • CATEGORY\nPP: cur/max`
pub fn move_label(mv: &Move) -> String {
    let move_type = mv.move_type.as_deref().unwrap_or("?").to_uppercase();
    let category = mv.category.as_deref().unwrap_or("?").to_uppercase();
    format!(
        "{}\n{} • {}\nPP: {}/{}",
        mv.name.to_uppercase(),
        move_type,
        category,
        mv.current_pp,
        mv.max_pp
    )
}

/// Fight menu buttons; slots beyond the move list become placeholders
pub fn move_buttons(moves: &[Move]) -> [MoveButton; MOVE_SLOTS] {
    std::array::from_fn(|slot| match moves.get(slot) {
        Some(mv) if !mv.name.is_empty() => MoveButton::Move {
            name: mv.name.clone(),
            label: move_label(mv),
        },
        _ => MoveButton::Placeholder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_clamped() {
        assert_eq!(hp_fraction(0.0, 20.0), 0.0);
        assert_eq!(hp_fraction(20.0, 20.0), 1.0);
        assert_eq!(hp_fraction(35.0, 20.0), 1.0);
        assert_eq!(hp_fraction(-4.0, 20.0), 0.0);
        assert_eq!(hp_fraction(5.0, 20.0), 0.25);
    }

    #[test]
    fn test_fraction_degenerate_max() {
        assert_eq!(hp_fraction(5.0, 0.0), 0.0);
        assert_eq!(hp_fraction(5.0, -1.0), 0.0);
        assert_eq!(hp_fraction(f64::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(HpBand::from_fraction(1.0), HpBand::Normal);
        assert_eq!(HpBand::from_fraction(0.5 + f64::EPSILON), HpBand::Normal);
        assert_eq!(HpBand::from_fraction(0.5), HpBand::Mid);
        assert_eq!(HpBand::from_fraction(0.5 - f64::EPSILON), HpBand::Mid);
        assert_eq!(HpBand::from_fraction(0.2 + f64::EPSILON), HpBand::Mid);
        assert_eq!(HpBand::from_fraction(0.2), HpBand::Low);
        assert_eq!(HpBand::from_fraction(0.2 - f64::EPSILON), HpBand::Low);
        assert_eq!(HpBand::from_fraction(0.0), HpBand::Low);
    }

    #[test]
    fn test_bar_width_rounded() {
        let bar = HpBar::new(1.0, 3.0);
        assert_eq!(bar.width_percent, 33);

        let bar = HpBar::new(2.0, 3.0);
        assert_eq!(bar.width_percent, 67);
        assert_eq!(bar.band, HpBand::Normal);
        assert_eq!(bar.band.marker(), None);

        let bar = HpBar::new(1.0, 10.0);
        assert_eq!(bar.band.marker(), Some("low"));
    }

    #[test]
    fn test_readout_floors() {
        let readout = HpReadout::new(12.9, 20.4);
        assert_eq!(readout.to_string(), "12/20");

        let readout = HpReadout::new(-3.0, 20.0);
        assert_eq!(readout.current, 0);
    }

    #[test]
    fn test_move_label() {
        let mut mv = Move::new("tackle", 35);
        mv.current_pp = 34;
        mv.move_type = Some("normal".into());
        mv.category = Some("physical".into());

        assert_eq!(move_label(&mv), "TACKLE\nNORMAL • PHYSICAL\nPP: 34/35");
    }

    #[test]
    fn test_move_label_unknown_type() {
        let mv = Move::new("growl", 40);
        assert_eq!(move_label(&mv), "GROWL\n? • ?\nPP: 40/40");
    }

    #[test]
    fn test_move_buttons_placeholders() {
        let moves = vec![Move::new("tackle", 35), Move::new("growl", 40)];
        let buttons = move_buttons(&moves);

        assert!(buttons[0].is_enabled());
        assert!(buttons[1].is_enabled());
        assert_eq!(buttons[2], MoveButton::Placeholder);
        assert_eq!(buttons[3], MoveButton::Placeholder);
        assert_eq!(buttons[3].label(), "—");
    }

    #[test]
    fn test_move_buttons_ignores_extra_moves() {
        let moves: Vec<Move> = (0..6).map(|i| Move::new(format!("m{i}"), 5)).collect();
        let buttons = move_buttons(&moves);
        assert!(buttons.iter().all(MoveButton::is_enabled));
    }

    #[test]
    fn test_render_state() {
        let state = BattleState {
            player: Combatant::new("Charmander", 4, 5, 20.0),
            enemy: Combatant::new("Rattata", 19, 3, 14.0),
            ended: false,
            winner: None,
            result: None,
            exp_gained: None,
            log: Vec::new(),
        };

        let hud = HudView::render(&state);
        assert_eq!(hud.player.name, "CHARMANDER");
        assert_eq!(hud.enemy.level, 3);
        assert_eq!(hud.enemy.hp.width_percent, 100);
        assert_eq!(hud.player.readout.to_string(), "20/20");
    }
}
