use crate::error::GameError;

pub const MIN_PLAYERS: usize = 4;
pub const MAX_PLAYERS: usize = 12;

/// A player count that has been checked against the rules.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NumberOfPlayers {
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Eleven = 11,
    Twelve = 12,
}

impl NumberOfPlayers {
    /// Gets the number of tryal cards dealt to each player at the start of the game.
    pub fn initial_tryal_cards(self) -> u8 {
        use NumberOfPlayers::*;
        match self {
            Four | Five | Six => 5,
            Seven | Eight | Nine => 4,
            Ten | Eleven | Twelve => 3,
        }
    }

    pub fn count(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for NumberOfPlayers {
    type Error = GameError;

    fn try_from(num_players: usize) -> Result<Self, Self::Error> {
        use NumberOfPlayers::*;
        match num_players {
            n if n < MIN_PLAYERS => Err(GameError::TooFewPlayers(n)),
            4 => Ok(Four),
            5 => Ok(Five),
            6 => Ok(Six),
            7 => Ok(Seven),
            8 => Ok(Eight),
            9 => Ok(Nine),
            10 => Ok(Ten),
            11 => Ok(Eleven),
            12 => Ok(Twelve),
            n => Err(GameError::TooManyPlayers(n)),
        }
    }
}
