use crate::error::GameError;
use crate::game::{CardType, Game};
use dashmap::{mapref::entry::Entry, DashMap};
use rand::Rng;
use serde_json::Value;
use std::sync::{Arc, Mutex, TryLockError};
use std::time::{Duration, Instant};

/// How long a session may sit untouched before [`SessionManager::purge_games`] may drop it.
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(3600);

/// Keeps track of every running game, each under a short random ID.
#[derive(Default)]
pub struct SessionManager {
    sessions: DashMap<String, SessionHandle>,
}

/// A single game session, holding the current snapshot of its game.
pub struct Session {
    /// The game ID.
    id: String,
    /// The latest accepted game state.
    game: Game,
    /// Timestamp of the last time this session was interacted with.
    last_ts: Instant,
}

/// Actions on a session are serialized through its lock, so none of them can be lost.
pub type SessionHandle = Arc<Mutex<Session>>;

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game with the given players.
    pub fn create_game<S: AsRef<str>>(&self, player_names: &[S]) -> Result<SessionHandle, GameError> {
        let game = Game::new(player_names)?;
        loop {
            let id = Self::random_id();
            let entry = self.sessions.entry(id);
            if let Entry::Occupied(_) = entry {
                continue;
            }
            log::info!("Created game {} with {} players", entry.key(), game.num_players());
            let session = Session::new(entry.key().clone(), game);
            let session = Arc::new(Mutex::new(session));
            entry.or_insert(session.clone());
            break Ok(session);
        }
    }

    pub fn find_game(&self, game_id: &str) -> Result<SessionHandle, GameError> {
        self.sessions
            .get(game_id)
            .map(|session| session.clone())
            .ok_or(GameError::GameNotFound)
    }

    pub fn remove_game(&self, game_id: &str) -> Result<(), GameError> {
        self.sessions
            .remove(game_id)
            .map(|_| log::info!("Removed game {}", game_id))
            .ok_or(GameError::GameNotFound)
    }

    pub fn num_games(&self) -> usize {
        self.sessions.len()
    }

    /// Drops every session that has been idle for at least `max_idle`,
    /// as well as any session whose lock has been poisoned.
    /// Sessions that are locked elsewhere are in use, and are kept.
    pub fn purge_games(&self, max_idle: Duration) {
        let mut ids_to_delete = vec![];

        // Find expired sessions
        for session in self.sessions.iter() {
            let game_id = session.key();
            match session.try_lock() {
                Ok(session) => {
                    if session.last_ts.elapsed() >= max_idle {
                        log::info!("Purged idle game {}", game_id);
                        ids_to_delete.push(game_id.clone());
                    }
                }
                Err(TryLockError::Poisoned(_)) => {
                    log::error!("Found poisoned session: {}", game_id);
                    ids_to_delete.push(game_id.clone());
                }
                Err(TryLockError::WouldBlock) => {}
            }
        }

        // Delete them once no shard is locked
        for game_id in ids_to_delete.into_iter() {
            self.sessions.remove(&game_id);
        }
    }

    fn random_id() -> String {
        let mut rng = rand::thread_rng();
        (0..4)
            .map(|_| match rng.gen_range('A'..='Z') {
                // Keep IDs readable aloud: no O or I
                'O' => 'Q',
                'I' => 'J',
                other => other,
            })
            .collect()
    }
}

impl Session {
    fn new(id: String, game: Game) -> Self {
        Self {
            id,
            game,
            last_ts: Instant::now(),
        }
    }

    /// Gets the unique game ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the current game state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn board_json(&self) -> Value {
        self.game.get_board_json()
    }

    /// Performs an action on the game. The current state is only replaced if the action succeeds.
    pub fn mutate_game<F>(&mut self, mutation: F) -> Result<(), GameError>
    where
        F: FnOnce(&Game) -> Result<Game, GameError>,
    {
        self.game = mutation(&self.game)?;
        self.last_ts = Instant::now();
        Ok(())
    }

    pub fn reveal_tryal_card(&mut self, position: usize, card: CardType) -> Result<(), GameError> {
        log::debug!("Game {}: revealing {} for player {}", self.id, card.to_string(), position);
        self.mutate_game(|game| game.reveal_tryal_card(position, card))
    }

    pub fn kill_players(&mut self, positions: &[usize]) -> Result<(), GameError> {
        log::debug!("Game {}: killing players {:?}", self.id, positions);
        self.mutate_game(|game| game.kill_players(positions))
    }

    /// Keeps the game session alive.
    pub fn heartbeat(&mut self) {
        self.last_ts = Instant::now();
    }
}
