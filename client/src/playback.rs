//! Paced replay of turn events
//!
//! Events are played strictly one after another: the effect of an event is
//! dispatched, then its dwell time elapses, and only then does the next one
//! start. The typewriter advances one character per clock unit during every
//! wait, so a single cooperative loop drives both.

use std::time::Duration;

use tallgrass_battle::{Effect, Move, Pacing, Typewriter, move_buttons};
use tallgrass_protocol::TurnEvent;

use crate::clock::Clock;
use crate::handler::Presenter;

pub struct Scheduler<C> {
    clock: C,
    pacing: Pacing,
    typewriter: Typewriter,
}

impl<C: Clock> Scheduler<C> {
    pub fn new(clock: C, pacing: Pacing) -> Self {
        Self {
            clock,
            pacing,
            typewriter: Typewriter::new(),
        }
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Start typing a line, cancelling the one in progress
    pub fn say<P: Presenter>(&mut self, presenter: &mut P, text: &str) {
        self.typewriter.start(text);
        presenter.show_text(self.typewriter.revealed());
    }

    /// Drop the line in progress without revealing the rest
    pub fn hush(&mut self) {
        self.typewriter.start("");
    }

    pub fn is_typing(&self) -> bool {
        self.typewriter.is_active()
    }

    /// Text the textbox is typing (or has typed)
    pub fn line(&self) -> &str {
        self.typewriter.line()
    }

    fn reveal<P: Presenter>(&mut self, presenter: &mut P) {
        if let Some(revealed) = self.typewriter.tick() {
            presenter.show_text(revealed);
        }
    }

    /// Let one clock unit pass and reveal one more character
    pub async fn advance<P: Presenter>(&mut self, presenter: &mut P) {
        self.clock.sleep(self.pacing.per_char).await;
        self.reveal(presenter);
    }

    /// Wait until the current line is fully revealed
    pub async fn settle<P: Presenter>(&mut self, presenter: &mut P) {
        while self.is_typing() {
            self.advance(presenter).await;
        }
    }

    /// Wait `total`, typing along the way
    pub async fn dwell<P: Presenter>(&mut self, presenter: &mut P, total: Duration) {
        let unit = self.pacing.per_char;
        let mut left = total;

        while !left.is_zero() {
            if unit.is_zero() || !self.is_typing() {
                self.clock.sleep(left).await;
                return;
            }
            let step = left.min(unit);
            self.clock.sleep(step).await;
            left -= step;
            self.reveal(presenter);
        }
    }

    /// Replay `events` in order. `pp` events redraw the move buttons from
    /// `moves`.
    pub async fn play<P: Presenter>(
        &mut self,
        presenter: &mut P,
        events: &[TurnEvent],
        moves: &[Move],
    ) {
        for (index, event) in events.iter().enumerate() {
            let effect = Effect::for_event(event);
            tracing::debug!(index, kind = ?event.kind, ?effect, "Playing event");

            presenter.play_effect(&effect);
            match &effect {
                Effect::Say(text) | Effect::Strike { text, .. } => self.say(presenter, text),
                Effect::RefreshMoves => presenter.show_moves(&move_buttons(moves)),
                Effect::Silent => {}
            }

            let delay = self.pacing.delay_for(event);
            self.dwell(presenter, delay).await;
        }
    }
}
