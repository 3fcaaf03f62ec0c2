//! Turn-based battle client for the tallgrass overworld.
//!
//! A [`BattleClient`] owns one battle session at a time. The world hands it
//! an encounter, it asks the [`Resolver`] to open a battle, then relays menu
//! choices and replays each resolved turn through a [`Presenter`] with
//! paced narration. The resolver is authoritative: every snapshot it
//! returns replaces the local one wholesale.
//!
//! # Example
//!
//! ```ignore
//! let config = ClientConfig::from_env();
//! let resolver = HttpResolver::new(config.clone())?;
//! let sprites = PokeApiSprites::new(&config)?;
//!
//! let (mut client, handle) =
//!     BattleClient::new(resolver, sprites, MyScreen, PauseFlag::default(), config.timings);
//!
//! handle.encounter(Encounter::new("Rattata", 19, 3))?;
//! client.run().await;
//! ```

mod clock;
mod config;
mod connection;
mod controller;
mod error;
mod handle;
mod handler;
mod playback;
mod sprites;
mod state;
mod world;

pub use clock::{Clock, TokioClock};
pub use config::{ClientConfig, DEFAULT_BASE_URL, POKEAPI_URL, Timings};
pub use connection::{HttpResolver, Resolver};
pub use controller::BattleClient;
pub use error::ClientError;
pub use handle::{BattleHandle, Input, Submit};
pub use handler::{Menu, Presenter};
pub use playback::Scheduler;
pub use sprites::{PokeApiSprites, SpriteSource};
pub use state::Phase;
pub use world::{PauseFlag, World, WorldAction};

pub use tallgrass_battle::{Effect, HudView, MoveButton, Orientation};
pub use tallgrass_protocol::{
    ActionBody, ActionRequest, BattleState, Combatant, Encounter, EventKind, Move, Outcome, Side,
    StartBody, TurnEvent,
};
