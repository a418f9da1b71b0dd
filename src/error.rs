use thiserror::Error;

/// The result of attempting to perform an invalid operation on a [Game] or [Session].
///
/// [Game]: crate::Game
/// [Session]: crate::Session
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("too few players in the game: {0}")]
    TooFewPlayers(usize),
    #[error("too many players in the game: {0}")]
    TooManyPlayers(usize),
    #[error("invalid player index: {0}")]
    InvalidPlayerIndex(usize),
    #[error("player {0} has already been eliminated")]
    PlayerEliminated(usize),
    #[error("game does not exist")]
    GameNotFound,
}
