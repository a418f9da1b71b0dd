use crate::error::GameError;
use serde::{Deserialize, Serialize};

pub use self::player::{CardType, Player};
pub use self::player_count::{NumberOfPlayers, MAX_PLAYERS, MIN_PLAYERS};

mod json;
mod player;
mod player_count;

/// A game of Salem.
///
/// A `Game` is a snapshot: actions never modify it, they return the game as it stands afterwards.
/// Players keep their roster position for the whole game, dead or alive.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct Game {
    players: Vec<Player>,
}

impl Game {
    /// Creates a new game of Salem, dealing each player the tryal cards their table size calls for.
    pub fn new<S: AsRef<str>>(player_names: &[S]) -> Result<Self, GameError> {
        let num_players = NumberOfPlayers::try_from(player_names.len())?;
        let tryal_cards = num_players.initial_tryal_cards();

        let players = player_names
            .iter()
            .map(|name| Player::new(name.as_ref().into(), tryal_cards))
            .collect();

        Ok(Game { players })
    }

    /// Reveals one tryal card of the player at `position`.
    ///
    /// Fails if `position` is not on the roster, or if that player has no tryal cards left.
    pub fn reveal_tryal_card(&self, position: usize, card: CardType) -> Result<Self, GameError> {
        self.check_player_index(position)?;
        if !self.players[position].is_alive() {
            log::debug!("Rejected reveal on eliminated player {}", position);
            return Err(GameError::PlayerEliminated(position));
        }

        Ok(self.map_players(|idx, player| {
            if idx == position {
                player.reveal_tryal_card(card)
            } else {
                player.clone()
            }
        }))
    }

    /// Kills every player at the given positions. Repeated or already dead positions are harmless.
    ///
    /// Fails without killing anyone if any position is not on the roster.
    pub fn kill_players(&self, positions: &[usize]) -> Result<Self, GameError> {
        for &position in positions {
            self.check_player_index(position)?;
        }

        Ok(self.map_players(|idx, player| {
            if positions.contains(&idx) {
                player.kill()
            } else {
                player.clone()
            }
        }))
    }

    /// Gets the players who still hold tryal cards, in roster order.
    ///
    /// Note that indices into this list are not roster positions.
    pub fn players_still_alive(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_alive()).collect()
    }

    /// Gets the whole roster, including dead players.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Gets the player at the given roster position.
    pub fn player(&self, position: usize) -> Option<&Player> {
        self.players.get(position)
    }

    /// Gets the number of players in the game.
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Gets the number of players in the game that are alive.
    pub fn num_players_alive(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }

    /// Returns `Ok` if the given player index is valid, and an `Err` otherwise.
    fn check_player_index(&self, player: usize) -> Result<(), GameError> {
        if player < self.num_players() {
            Ok(())
        } else {
            log::debug!("Rejected out of range player index {}", player);
            Err(GameError::InvalidPlayerIndex(player))
        }
    }

    fn map_players(&self, f: impl Fn(usize, &Player) -> Player) -> Self {
        Game {
            players: self
                .players
                .iter()
                .enumerate()
                .map(|(idx, player)| f(idx, player))
                .collect(),
        }
    }
}

/// Restores a game from a saved roster. Card counts are taken as they are.
impl TryFrom<Vec<Player>> for Game {
    type Error = GameError;

    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        NumberOfPlayers::try_from(players.len())?;
        Ok(Game { players })
    }
}

impl From<Game> for Vec<Player> {
    fn from(game: Game) -> Self {
        game.players
    }
}
