//! What the battle screen shows, derived from state

mod backdrop;
mod hud;
mod sprite;

pub use backdrop::{pick_background, terrain_files};
pub use hud::{
    CombatantHud, HpBand, HpBar, HpReadout, HudView, MOVE_SLOTS, MoveButton, hp_fraction,
    move_buttons, move_label,
};
pub use sprite::{Orientation, SpriteSet};
