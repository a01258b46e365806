//! Generates a fresh session per play-through.

use super::action::Action;
use super::session::Session;
use super::timer::{Effect, TimerToken};
use super::utils::sample_with;
use super::{CellId, GameId};
use crate::GameConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument};

/// Owns the active session and replaces it wholesale on reset.
///
/// The very first session waits in `New` for an explicit start. Every
/// session created by [`reset_game`](Self::reset_game) starts immediately,
/// since the player has already seen the rules.
#[derive(Debug)]
pub struct GameGenerator<R = StdRng> {
    config: GameConfig,
    rng: R,
    game_id: GameId,
    is_new_game: bool,
    session: Session,
}

impl GameGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameGenerator<R> {
    /// Creates a generator drawing challenges from `rng`.
    #[instrument(skip(config, rng))]
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let game_id = 1;
        let session = generate(&config, &mut rng, game_id);
        info!(game_id, "First session ready");
        Self {
            config,
            rng,
            game_id,
            is_new_game: true,
            session,
        }
    }

    /// The active session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Identity of the active session.
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    /// True until the first reset.
    pub fn is_new_game(&self) -> bool {
        self.is_new_game
    }

    /// Configuration every session is generated from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Applies an action to the active session.
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        self.session.apply(action)
    }

    /// Starts the active session.
    pub fn start_game(&mut self) -> Vec<Effect> {
        self.apply(Action::Start)
    }

    /// Picks a cell in the active session.
    pub fn pick_cell(&mut self, cell: CellId) -> Vec<Effect> {
        self.apply(Action::Pick(cell))
    }

    /// Delivers a timer firing to the active session.
    pub fn fire(&mut self, token: TimerToken) -> Vec<Effect> {
        self.apply(Action::from_timer(token))
    }

    /// Discards the active session and starts a freshly generated one.
    ///
    /// The returned effects cancel every timer of the old session before
    /// scheduling anything for the new one.
    #[instrument(skip(self), fields(game_id = self.game_id))]
    pub fn reset_game(&mut self) -> Vec<Effect> {
        self.game_id += 1;
        self.is_new_game = false;

        let fresh = generate(&self.config, &mut self.rng, self.game_id);
        let old = std::mem::replace(&mut self.session, fresh);
        let mut effects = old.teardown();
        effects.extend(self.session.apply(Action::Start));
        info!(game_id = self.game_id, status = %self.session.status(), "Session reset");
        effects
    }
}

fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R, game_id: GameId) -> Session {
    let challenge = sample_with(rng, config.cell_count(), *config.challenge_size());
    Session::new(game_id, config.clone(), challenge)
}
