use serde::{Deserialize, Serialize};

/// A game player.
///
/// Players are immutable: every action returns a new `Player` in place of the old one.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    name: String,
    tryal_cards: u8,
}

/// What a revealed tryal card turned out to be.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CardType {
    NotAWitch,
    Witch,
}

impl From<bool> for CardType {
    fn from(is_witch: bool) -> Self {
        if is_witch {
            CardType::Witch
        } else {
            CardType::NotAWitch
        }
    }
}

impl ToString for CardType {
    fn to_string(&self) -> String {
        match self {
            CardType::NotAWitch => "NotAWitch",
            CardType::Witch => "Witch",
        }
        .to_string()
    }
}

impl Player {
    pub fn new(name: String, tryal_cards: u8) -> Self {
        Self { name, tryal_cards }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tryal_cards_remaining(&self) -> u8 {
        self.tryal_cards
    }

    /// A player stays in the game for as long as they hold at least one tryal card.
    pub fn is_alive(&self) -> bool {
        self.tryal_cards > 0
    }

    /// Reveals one of this player's tryal cards.
    /// A witch eliminates the player outright; any other card costs them one tryal card.
    pub fn reveal_tryal_card(&self, card: CardType) -> Self {
        let tryal_cards = match card {
            CardType::NotAWitch => self.tryal_cards.saturating_sub(1),
            CardType::Witch => 0,
        };
        Self {
            name: self.name.clone(),
            tryal_cards,
        }
    }

    /// Takes away every remaining tryal card.
    pub fn kill(&self) -> Self {
        Self {
            name: self.name.clone(),
            tryal_cards: 0,
        }
    }
}
