//! Turn replay: event effects, pacing and the typewriter

mod effect;
mod pacing;
mod typewriter;

pub use effect::Effect;
pub use pacing::Pacing;
pub use typewriter::Typewriter;
