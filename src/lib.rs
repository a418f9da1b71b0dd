//! Rules engine for a game of Salem: players hold tryal cards, and lose
//! the game once every card is revealed or a witch card turns up.

mod error;
mod game;
mod session;

pub use error::GameError;
pub use game::{CardType, Game, NumberOfPlayers, Player, MAX_PLAYERS, MIN_PLAYERS};
pub use session::{Session, SessionHandle, SessionManager, DEFAULT_SESSION_TIMEOUT};
