// Test utilities shared by unit tests and the "tests" folder.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::player::Player;
use crate::rank::Tier;
use crate::role::Role;


// In theory random tests verify statistical properties that should always
// hold, but let's fix the seed to avoid sporadic failures.
pub fn deterministic_rng() -> impl Rng { StdRng::from_seed([0; 32]) }

pub fn seeded_rng(seed: u64) -> impl Rng { StdRng::seed_from_u64(seed) }

pub fn ranked_player(name: &str, tier: Tier, division: u8, roles: &[Role]) -> Player {
    Player::new(name.to_owned(), Some(tier), division, roles.to_vec())
}

// A player pinned to an exact skill value, for partition arithmetic tests.
pub fn player_with_skill(name: &str, skill_value: u32) -> Player {
    let mut player = Player::new(name.to_owned(), None, 0, Vec::new());
    player.skill_value = skill_value;
    player
}

// A full 10-player lobby with a spread of ranks and preferences.
pub fn sample_lobby() -> Vec<Player> {
    vec![
        ranked_player("Alice#NA1", Tier::Gold, 1, &[Role::Top]),
        ranked_player("Bob#NA1", Tier::Silver, 3, &[Role::Jgl, Role::Top]),
        ranked_player("Charlie#NA1", Tier::Platinum, 2, &[Role::Mid]),
        ranked_player("Dave#NA1", Tier::Bronze, 4, &[Role::Bot]),
        ranked_player("Eve#NA1", Tier::Diamond, 1, &[Role::Sup, Role::Mid]),
        ranked_player("Frank#NA1", Tier::Gold, 4, &[Role::Fill]),
        ranked_player("Grace#NA1", Tier::Emerald, 3, &[Role::Top, Role::Mid]),
        ranked_player("Heidi#NA1", Tier::Iron, 2, &[]),
        ranked_player("Ivan#NA1", Tier::Master, 0, &[Role::Jgl]),
        ranked_player("Judy#NA1", Tier::Silver, 1, &[Role::Bot, Role::Sup]),
    ]
}
