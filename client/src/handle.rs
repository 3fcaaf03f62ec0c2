use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Result, anyhow};
use serde_json::Value;
use tallgrass_protocol::Encounter;
use tokio::sync::mpsc;

use crate::world::WorldAction;

/// User and world inputs consumed by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Encounter(Encounter),
    Fight,
    Bag,
    Team,
    Back,
    Move(usize),
    Run,
    Close,
}

/// Whether an input reached the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    Sent,
    /// Dropped because a request is outstanding
    Rejected,
}

/// Gate allowing at most one outstanding resolver request.
///
/// Held from the moment a submission is accepted until the controller has
/// finished handling its response.
#[derive(Debug, Default)]
pub struct BusyLock(AtomicBool);

impl BusyLock {
    pub fn try_acquire(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_held(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Cloneable input side of a battle client.
///
/// Submissions (`encounter`, `use_move`, `run`) take the busy lock and are
/// rejected while it is held. Menu navigation is dropped while locked.
/// Inputs are never queued behind an outstanding request.
#[derive(Clone)]
pub struct BattleHandle {
    tx: mpsc::UnboundedSender<Input>,
    lock: Arc<BusyLock>,
}

impl BattleHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Input>, lock: Arc<BusyLock>) -> Self {
        Self { tx, lock }
    }

    fn send(&self, input: Input) -> Result<()> {
        self.tx
            .send(input)
            .map_err(|_| anyhow!("Battle client stopped"))
    }

    fn submit(&self, input: Input) -> Result<Submit> {
        if !self.lock.try_acquire() {
            tracing::debug!(?input, "Busy, input dropped");
            return Ok(Submit::Rejected);
        }
        if let Err(e) = self.send(input) {
            self.lock.release();
            return Err(e);
        }
        Ok(Submit::Sent)
    }

    fn navigate(&self, input: Input) -> Result<Submit> {
        if self.lock.is_held() {
            tracing::debug!(?input, "Busy, input dropped");
            return Ok(Submit::Rejected);
        }
        self.send(input)?;
        Ok(Submit::Sent)
    }

    /// Open a battle for an encounter
    pub fn encounter(&self, encounter: Encounter) -> Result<Submit> {
        self.submit(Input::Encounter(encounter))
    }

    /// Forward a world hook action. Only `wildencounter` starts a battle.
    pub fn world_action(&self, action: &str, data: &Value) -> Result<Submit> {
        match WorldAction::parse(action, data)? {
            WorldAction::WildEncounter(encounter) => self.encounter(encounter),
            WorldAction::Ignored(_) => Ok(Submit::Rejected),
        }
    }

    /// Main menu "fight"
    pub fn fight(&self) -> Result<Submit> {
        self.navigate(Input::Fight)
    }

    /// Main menu "bag": opens the world's bag view
    pub fn bag(&self) -> Result<Submit> {
        self.navigate(Input::Bag)
    }

    /// Main menu "Pokémon": opens the world's team view
    pub fn team(&self) -> Result<Submit> {
        self.navigate(Input::Team)
    }

    /// Moves menu "back"
    pub fn back(&self) -> Result<Submit> {
        self.navigate(Input::Back)
    }

    /// Use the move in a fight-menu slot (0..=3)
    pub fn use_move(&self, slot: usize) -> Result<Submit> {
        self.submit(Input::Move(slot))
    }

    /// Attempt to flee. Dismissing the battle view is the same request.
    pub fn run(&self) -> Result<Submit> {
        self.submit(Input::Run)
    }

    /// Close the battle view from outside, whatever its state
    pub fn close(&self) -> Result<()> {
        self.send(Input::Close)
    }

    pub fn is_busy(&self) -> bool {
        self.lock.is_held()
    }
}
