//! Presentation model for tallgrass battles.
//!
//! This crate turns protocol snapshots into what the battle screen shows,
//! without touching any display or network.
//!
//! # Overview
//!
//! `tallgrass-battle` sits between `tallgrass-protocol` (wire format) and the
//! async client:
//!
//! ```text
//! tallgrass-protocol (wire format)
//!        │
//!        ▼
//! tallgrass-battle (HUD values + playback math) ← THIS CRATE
//!        │
//!        ▼
//! tallgrass-client (controller, scheduler, HTTP)
//! ```
//!
//! # Main Types
//!
//! ## View
//! - [`HudView`] - HP bars, readouts and nameplates for both sides
//! - [`MoveButton`] / [`move_buttons`] - the four fight-menu slots
//! - [`SpriteSet`] - prioritized sprite candidates for a creature
//! - [`pick_background`] - terrain-aware arena background choice
//!
//! ## Playback
//! - [`Effect`] - the single visual effect of a turn event
//! - [`Pacing`] - dwell time per event
//! - [`Typewriter`] - character-by-character reveal state
//!
//! # Example Usage
//!
//! ```ignore
//! use tallgrass_battle::{Effect, HudView, Pacing};
//!
//! let hud = HudView::render(&state);
//! println!("{} {}%", hud.enemy.name, hud.enemy.hp.width_percent);
//!
//! for event in &events {
//!     let effect = Effect::for_event(event);
//!     let dwell = Pacing::default().delay_for(event);
//! }
//! ```

pub mod playback;
pub mod view;

pub use playback::{Effect, Pacing, Typewriter};
pub use view::{
    CombatantHud, HpBand, HpBar, HpReadout, HudView, MOVE_SLOTS, MoveButton, Orientation,
    SpriteSet, hp_fraction, move_buttons, move_label, pick_background, terrain_files,
};

pub use tallgrass_protocol::{BattleState, Combatant, Move, Side, TurnEvent};
