use tallgrass_protocol::{BattleState, Encounter};

use crate::handler::{Menu, Presenter};
use crate::world::World;

/// Controller state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session; waiting for an encounter
    Idle,
    AwaitingStart,
    MainMenu,
    MovesMenu,
    AwaitingTurnResult,
    /// Session closed by a win, loss or successful run
    Ended,
}

impl Phase {
    /// Menu a submission was made from, to return to if it fails
    pub fn menu(&self) -> Option<Menu> {
        match self {
            Phase::MainMenu => Some(Menu::Main),
            Phase::MovesMenu => Some(Menu::Moves),
            _ => None,
        }
    }

    /// Whether a new encounter may be started
    pub fn accepts_encounter(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Ended)
    }
}

/// One battle session as owned by the controller.
///
/// `state` is only ever replaced wholesale with a resolver snapshot.
pub(crate) struct Session {
    pub phase: Phase,
    pub state: Option<BattleState>,
    pub encounter: Option<Encounter>,
    /// This session has paused the world and owes exactly one resume
    holds_pause: bool,
    view_open: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            state: None,
            encounter: None,
            holds_pause: false,
            view_open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.view_open
    }

    /// Open the view and pause the world, once per session
    pub fn open<P: Presenter, W: World>(
        &mut self,
        encounter: Encounter,
        state: BattleState,
        presenter: &mut P,
        world: &mut W,
    ) {
        self.encounter = Some(encounter);
        self.state = Some(state);

        if !self.view_open {
            self.view_open = true;
            presenter.open_session();
        }
        if !self.holds_pause {
            self.holds_pause = true;
            world.set_paused(true);
        }
    }

    /// Close the view, drop the state and resume the world. Safe to call
    /// more than once; side effects happen only for an open session.
    pub fn close<P: Presenter, W: World>(&mut self, presenter: &mut P, world: &mut W) {
        if self.view_open {
            self.view_open = false;
            presenter.close_session();
        }
        if self.holds_pause {
            self.holds_pause = false;
            world.set_paused(false);
        }
        self.state = None;
        self.encounter = None;
    }
}
