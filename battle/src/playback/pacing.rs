//! Dwell time between replayed events

use std::time::Duration;

use tallgrass_protocol::TurnEvent;

/// Timing knobs for event replay and the typewriter.
///
/// `delay = max(base, min(cap, chars × per_char) + settle)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Minimum dwell per event, even for events with no text
    pub base: Duration,
    /// Upper bound on the text-proportional part
    pub cap: Duration,
    /// Typewriter interval; one character is revealed per tick
    pub per_char: Duration,
    /// Extra time to read a fully revealed line
    pub settle: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(1600),
            cap: Duration::from_millis(6000),
            per_char: Duration::from_millis(45),
            settle: Duration::from_millis(600),
        }
    }
}

impl Pacing {
    pub fn delay_for_text(&self, text: &str) -> Duration {
        let chars = text.chars().count().min(u32::MAX as usize) as u32;
        let typing = self.per_char.saturating_mul(chars).min(self.cap);
        (typing + self.settle).max(self.base)
    }

    /// Dwell after an event, measured on its narration (`text`, then `message`)
    pub fn delay_for(&self, event: &TurnEvent) -> Duration {
        self.delay_for_text(event.narration().unwrap_or(""))
    }
}
