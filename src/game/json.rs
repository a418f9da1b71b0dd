use super::Game;
use serde_json::{json, Value};

impl Game {
    pub fn get_board_json(&self) -> Value {
        json!({
            "players": self.get_players_json(),
            "numPlayersAlive": self.num_players_alive(),
        })
    }

    pub fn get_player_json(&self, position: usize) -> Option<Value> {
        let player = self.player(position)?;
        Some(json!({
            "position": position,
            "name": player.name(),
            "tryalCardsRemaining": player.tryal_cards_remaining(),
            "isDead": !player.is_alive(),
        }))
    }

    fn get_players_json(&self) -> Value {
        (0..self.num_players())
            .filter_map(|position| self.get_player_json(position))
            .collect()
    }
}
