use std::sync::Arc;

use tallgrass_battle::{HudView, Orientation, move_buttons, pick_background};
use tallgrass_protocol::{ActionBody, ActionRequest, BattleState, Encounter, Side};
use tokio::sync::mpsc;

use crate::clock::{Clock, TokioClock};
use crate::config::Timings;
use crate::connection::Resolver;
use crate::error::ClientError;
use crate::handle::{BattleHandle, BusyLock, Input};
use crate::handler::{Menu, Presenter};
use crate::playback::Scheduler;
use crate::sprites::SpriteSource;
use crate::state::{Phase, Session};
use crate::world::World;


const START_FAILED: &str = "Erro ao iniciar batalha";
const SESSION_ALREADY_OPEN: &str = "Já existe uma batalha em andamento";
const MOVE_NOT_FOUND: &str = "Erro: Movimento não encontrado";
const TURN_FAILED: &str = "Erro ao processar turno";
const PICK_A_MOVE: &str = "Escolha um ataque";
const BAG_UNAVAILABLE: &str = "Mochila não disponível";
const TEAM_UNAVAILABLE: &str = "Time não disponível";
const RUN_ATTEMPT: &str = "Tentando fugir...";
const RUN_SUCCEEDED: &str = "Você fugiu com sucesso!";
const RUN_FAILED: &str = "Não foi possível fugir!";
const RUN_ERROR: &str = "Erro ao tentar fugir";
const RUN_LOG: &str = "🏃 Você fugiu da batalha.";
const BATTLE_WON: &str = "Você venceu a batalha!";
const BATTLE_LOST: &str = "Você perdeu a batalha!";
const UNNAMED: &str = "seu Pokémon";

/// Battle client: owns the session state machine.
///
/// Inputs arrive through a [`BattleHandle`]; the client handles them one at
/// a time on a single task. Network calls and timed waits are its only
/// suspension points. The [`BattleState`] is owned here and nowhere else;
/// the presenter and the scheduler only read it.
pub struct BattleClient<R, S, P, W, C = TokioClock> {
    resolver: R,
    sprites: S,
    presenter: P,
    world: W,
    scheduler: Scheduler<C>,
    timings: Timings,
    session: Session,
    lock: Arc<BusyLock>,
    inputs: mpsc::UnboundedReceiver<Input>,
}

impl<R, S, P, W> BattleClient<R, S, P, W, TokioClock>
where
    R: Resolver,
    S: SpriteSource,
    P: Presenter,
    W: World,
{
    /// Create a client on the tokio clock, plus the handle that feeds it
    pub fn new(
        resolver: R,
        sprites: S,
        presenter: P,
        world: W,
        timings: Timings,
    ) -> (Self, BattleHandle) {
        Self::with_clock(resolver, sprites, presenter, world, TokioClock, timings)
    }
}

impl<R, S, P, W, C> BattleClient<R, S, P, W, C>
where
    R: Resolver,
    S: SpriteSource,
    P: Presenter,
    W: World,
    C: Clock,
{
    pub fn with_clock(
        resolver: R,
        sprites: S,
        presenter: P,
        world: W,
        clock: C,
        timings: Timings,
    ) -> (Self, BattleHandle) {
        let (tx, inputs) = mpsc::unbounded_channel();
        let lock = Arc::new(BusyLock::default());
        let handle = BattleHandle::new(tx, Arc::clone(&lock));

        let client = Self {
            resolver,
            sprites,
            presenter,
            world,
            scheduler: Scheduler::new(clock, timings.pacing),
            timings,
            session: Session::new(),
            lock,
            inputs,
        };
        (client, handle)
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    /// Last snapshot received from the resolver, while a session is open
    pub fn state(&self) -> Option<&BattleState> {
        self.session.state.as_ref()
    }

    /// Encounter of the open session
    pub fn encounter(&self) -> Option<&Encounter> {
        self.session.encounter.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn is_busy(&self) -> bool {
        self.lock.is_held()
    }

    /// Full line currently in the textbox
    pub fn message(&self) -> &str {
        self.scheduler.line()
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    /// Handle inputs until every handle has been dropped
    pub async fn run(&mut self) {
        while self.step().await {}
        tracing::debug!("All handles dropped, battle client stopping");
    }

    /// Wait for the next input, typing out the textbox meanwhile, and
    /// handle it. Returns `false` once every handle has been dropped.
    pub async fn step(&mut self) -> bool {
        let input = loop {
            if !self.scheduler.is_typing() {
                break self.inputs.recv().await;
            }
            tokio::select! {
                biased;
                input = self.inputs.recv() => break input,
                _ = self.scheduler.advance(&mut self.presenter) => {}
            }
        };

        match input {
            Some(input) => {
                self.dispatch(input).await;
                true
            }
            None => false,
        }
    }

    /// Handle every input already queued, without waiting for more
    pub async fn drain(&mut self) {
        while let Ok(input) = self.inputs.try_recv() {
            self.dispatch(input).await;
        }
    }

    async fn dispatch(&mut self, input: Input) {
        tracing::debug!(phase = ?self.session.phase, ?input, "Input");

        match input {
            Input::Encounter(encounter) => self.start(encounter).await,
            Input::Fight => {
                if self.session.phase == Phase::MainMenu {
                    self.show_moves_menu();
                }
            }
            Input::Back => {
                if self.session.phase == Phase::MovesMenu {
                    self.show_main_menu();
                }
            }
            Input::Bag => {
                if self.session.phase == Phase::MainMenu && !self.presenter.open_bag() {
                    self.say(BAG_UNAVAILABLE);
                }
            }
            Input::Team => {
                if self.session.phase == Phase::MainMenu && !self.presenter.open_team() {
                    self.say(TEAM_UNAVAILABLE);
                }
            }
            Input::Move(slot) => self.use_move(slot).await,
            Input::Run => self.run_away().await,
            Input::Close => self.force_close(),
        }
    }

    fn say(&mut self, text: &str) {
        self.scheduler.say(&mut self.presenter, text);
    }

    fn lock_controls(&mut self) {
        self.presenter.set_controls_enabled(false);
    }

    fn release(&mut self) {
        self.lock.release();
        self.presenter.set_controls_enabled(true);
    }

    async fn start(&mut self, encounter: Encounter) {
        if !self.session.phase.accepts_encounter() || self.session.is_open() {
            tracing::warn!(
                species = %encounter.species,
                error = %ClientError::SessionOpen,
                "Encounter refused"
            );
            self.say(SESSION_ALREADY_OPEN);
            self.release();
            return;
        }

        self.lock_controls();
        self.session.phase = Phase::AwaitingStart;
        tracing::info!(
            species = %encounter.species,
            pokemon_id = encounter.pokemon_id,
            level = encounter.level,
            terrain = %encounter.terrain,
            "Starting battle"
        );

        match self.resolver.start(&encounter).await {
            Ok(body) => {
                let terrain = encounter.terrain_tag();
                self.session
                    .open(encounter, body.state, &mut self.presenter, &mut self.world);
                self.show_background(&terrain).await;
                self.render().await;
                self.show_main_menu();

                let opening = self
                    .session
                    .state
                    .as_ref()
                    .and_then(BattleState::last_log)
                    .map(str::to_string);
                if let Some(line) = opening {
                    self.say(&line);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Battle start failed");
                let message = match &e {
                    ClientError::Status { status, .. } => format!("Erro: HTTP {status}"),
                    other => other.server_error().unwrap_or(START_FAILED).to_string(),
                };
                self.say(&message);
                self.session.phase = Phase::Idle;
            }
        }

        self.release();
    }

    async fn show_background(&mut self, terrain: &str) {
        let wait = self.timings.asset_timeout;
        let urls = match tokio::time::timeout(wait, self.resolver.backgrounds()).await {
            Ok(urls) => urls,
            Err(_) => {
                tracing::warn!(?wait, "Background list timed out");
                Vec::new()
            }
        };
        let terrain = Some(terrain).filter(|t| !t.is_empty());
        let pick = pick_background(&urls, terrain, &mut rand::thread_rng()).map(str::to_string);

        match pick {
            Some(url) => self.presenter.set_background(&url),
            None => tracing::debug!(?terrain, "No background to show"),
        }
    }

    /// Draw the HUD and sprites for the current snapshot
    async fn render(&mut self) {
        let Some(state) = &self.session.state else {
            return;
        };

        self.presenter.render(&HudView::render(state));

        for (side, orientation) in [
            (Side::Enemy, Orientation::Front),
            (Side::Player, Orientation::Back),
        ] {
            let Some(pokemon_id) = state.combatant(side).pokemon_id else {
                continue;
            };
            let lookup = self.sprites.resolve_sprite(pokemon_id, orientation);
            match tokio::time::timeout(self.timings.asset_timeout, lookup).await {
                Ok(Some(url)) => self.presenter.set_sprite(side, &url),
                Ok(None) => {}
                Err(_) => tracing::warn!(pokemon_id, ?orientation, "Sprite lookup timed out"),
            }
        }
    }

    fn show_main_menu(&mut self) {
        self.session.phase = Phase::MainMenu;
        self.presenter.show_menu(Menu::Main);

        let name = self
            .session
            .state
            .as_ref()
            .map(|s| s.player.name())
            .filter(|n| !n.is_empty())
            .unwrap_or(UNNAMED);
        let prompt = format!("O que {name} deve fazer?");
        self.say(&prompt);
    }

    fn show_moves_menu(&mut self) {
        self.session.phase = Phase::MovesMenu;
        self.presenter.show_menu(Menu::Moves);
        if let Some(state) = &self.session.state {
            self.presenter.show_moves(&move_buttons(&state.player.moves));
        }
        self.say(PICK_A_MOVE);
    }

    async fn use_move(&mut self, slot: usize) {
        let origin = self.session.phase;
        if origin.menu().is_none() {
            tracing::debug!(phase = ?origin, slot, "Move outside a battle menu ignored");
            self.release();
            return;
        }
        if self.session.state.is_none() {
            self.release();
            return;
        }

        self.lock_controls();
        let move_name = self
            .session
            .state
            .as_ref()
            .and_then(|s| s.player.move_slot(slot))
            .map(|m| m.name.clone());
        let Some(move_name) = move_name else {
            tracing::warn!(error = %ClientError::EmptySlot(slot), "Move not sent");
            self.say(MOVE_NOT_FOUND);
            self.release();
            return;
        };

        self.session.phase = Phase::AwaitingTurnResult;
        tracing::debug!(%move_name, slot, "Submitting move");

        match self
            .resolver
            .action(&ActionRequest::use_move(move_name))
            .await
        {
            Ok(body) => self.resolve_turn(body).await,
            Err(e) => {
                if e.is_transport() {
                    tracing::error!(error = %e, "Turn request failed");
                } else {
                    tracing::warn!(error = %e, "Turn rejected");
                }
                let message = e.server_error().unwrap_or(TURN_FAILED).to_string();
                self.say(&message);
                self.session.phase = origin;
            }
        }

        self.release();
    }

    async fn resolve_turn(&mut self, body: ActionBody) {
        let ActionBody { state, events } = body;
        tracing::debug!(events = events.len(), ended = state.ended, "Turn resolved");

        self.scheduler
            .play(&mut self.presenter, &events, &state.player.moves)
            .await;

        let ended = state.ended;
        self.session.state = Some(state);
        self.render().await;

        if ended {
            self.finish_battle().await;
        } else {
            self.show_moves_menu();
        }
    }

    async fn finish_battle(&mut self) {
        self.session.phase = Phase::Ended;
        let (winner, exp_gained) = match &self.session.state {
            Some(state) => (state.winner(), state.exp_gained),
            None => (None, None),
        };

        if winner == Some(Side::Player) {
            self.say(BATTLE_WON);
            if let Some(exp) = exp_gained.filter(|exp| *exp > 0) {
                self.scheduler
                    .dwell(&mut self.presenter, self.timings.exp_notice)
                    .await;
                self.say(&format!("Ganhou {exp} pontos de experiência!"));
            }
        } else {
            self.say(BATTLE_LOST);
        }

        self.scheduler
            .dwell(&mut self.presenter, self.timings.end_of_battle)
            .await;
        self.close_session();
        tracing::info!(winner = ?winner, "Battle ended");
    }

    async fn run_away(&mut self) {
        let origin = self.session.phase;
        if origin.menu().is_none() || self.session.state.is_none() {
            tracing::debug!(phase = ?origin, "Run outside a battle menu ignored");
            self.release();
            return;
        }

        self.lock_controls();
        self.session.phase = Phase::AwaitingTurnResult;
        self.say(RUN_ATTEMPT);

        match self.resolver.action(&ActionRequest::Run).await {
            Ok(body) => {
                tracing::info!(result = ?body.state.result, "Ran from battle");
                self.say(RUN_SUCCEEDED);
                self.scheduler
                    .dwell(&mut self.presenter, self.timings.run_outcome)
                    .await;
                self.close_session();
                self.session.phase = Phase::Ended;
                self.presenter.notify(RUN_LOG);
            }
            Err(e) => {
                let message = if e.is_transport() {
                    tracing::error!(error = %e, "Run request failed");
                    RUN_ERROR
                } else {
                    tracing::warn!(error = %e, "Run refused");
                    RUN_FAILED
                };
                self.say(message);
                self.scheduler
                    .dwell(&mut self.presenter, self.timings.run_outcome)
                    .await;
                self.show_main_menu();
            }
        }

        self.release();
    }

    fn close_session(&mut self) {
        self.scheduler.hush();
        self.session.close(&mut self.presenter, &mut self.world);
    }

    fn force_close(&mut self) {
        if !self.session.is_open() {
            return;
        }
        tracing::info!(phase = ?self.session.phase, "Battle view closed externally");
        self.close_session();
        self.session.phase = Phase::Idle;
    }
}
