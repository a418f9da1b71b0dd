//! Test utilities and helper functions for game testing

use crate::game::Game;

pub const NAMES: [&str; 13] = [
    "Alice", "Bob", "Charlie", "David", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy", "Kevin",
    "Laura", "Mallory",
];

pub fn init_logger() {
    env_logger::builder().is_test(true).try_init().ok();
}

/// Gets the first `num_players` names from [`NAMES`], or generated names beyond that.
pub fn player_names(num_players: usize) -> Vec<String> {
    (0..num_players)
        .map(|i| match NAMES.get(i) {
            Some(name) => name.to_string(),
            None => format!("Player{}", i),
        })
        .collect()
}

/// Creates a test game with the specified number of players
pub fn create_test_game(num_players: usize) -> Game {
    init_logger();
    Game::new(&player_names(num_players)).unwrap()
}

/// Creates a game of Alice, Bob, Charlie and David
pub fn create_standard_4_player_game() -> Game {
    create_test_game(4)
}

pub fn cards(game: &Game) -> Vec<u8> {
    game.players().iter().map(|p| p.tryal_cards_remaining()).collect()
}

pub fn alive_names(game: &Game) -> Vec<&str> {
    game.players_still_alive().iter().map(|p| p.name()).collect()
}
