use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assignment;
use crate::player::{Player, Team};


// Balancing policy for a generation cycle. External callers that take the
// policy from free-form input should fall back to `Policy::default()` when
// the value is unspecified or unrecognized.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Policy {
    #[default]
    Random,
    SemiRandomBalanced,
    FullBalance,
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accepts both the CLI spellings and the original option values
        // ("fullyRandom", "balanced", "fullBalance").
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "random" | "fullyrandom" => Ok(Policy::Random),
            "balanced" | "semirandombalanced" => Ok(Policy::SemiRandomBalanced),
            "fullbalance" | "fullybalanced" | "full" => Ok(Policy::FullBalance),
            _ => Err(format!("unknown balancing policy '{}'", s.trim())),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PartitionError {
    InvalidRosterSize(usize),
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionError::InvalidRosterSize(count) => write!(
                f,
                "Team generation requires an even number of players (at least 2). \
                 Current count: {count}"
            ),
        }
    }
}

// The outcome of one partitioning: two equal-size teams covering the whole
// roster, with per-team skill totals kept equal to the sum of the current
// members at all times.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TeamResult {
    pub blue_team: Vec<Player>,
    pub red_team: Vec<Player>,
    pub blue_total_skill: u32,
    pub red_total_skill: u32,
}

impl TeamResult {
    pub fn new(blue_team: Vec<Player>, red_team: Vec<Player>) -> Self {
        let blue_total_skill = team_skill(&blue_team);
        let red_total_skill = team_skill(&red_team);
        TeamResult { blue_team, red_team, blue_total_skill, red_total_skill }
    }

    pub fn team(&self, team: Team) -> &[Player] {
        match team {
            Team::Blue => &self.blue_team,
            Team::Red => &self.red_team,
        }
    }

    pub fn total_skill(&self, team: Team) -> u32 {
        match team {
            Team::Blue => self.blue_total_skill,
            Team::Red => self.red_total_skill,
        }
    }

    pub fn skill_difference(&self) -> u32 {
        self.blue_total_skill.abs_diff(self.red_total_skill)
    }
}

fn team_skill(players: &[Player]) -> u32 { players.iter().map(|p| p.skill_value).sum() }

// Splits an even-size roster into two equal teams under the given policy and
// optionally assigns roles. The roster is consumed: every player ends up in
// exactly one of the two teams. Role assignment on an unsupported combined
// size is skipped with a warning, never an error.
pub fn partition(
    players: Vec<Player>, policy: Policy, assign_roles: bool,
) -> Result<TeamResult, PartitionError> {
    partition_with_rng(players, policy, assign_roles, &mut rand::rng())
}

pub fn partition_with_rng(
    mut players: Vec<Player>, policy: Policy, assign_roles: bool, rng: &mut impl Rng,
) -> Result<TeamResult, PartitionError> {
    if players.len() < 2 || players.len() % 2 != 0 {
        return Err(PartitionError::InvalidRosterSize(players.len()));
    }
    // Roles are an output of this cycle only; drop anything stale from a
    // previous cycle before the assigner runs (or doesn't).
    for player in players.iter_mut() {
        player.assigned_role = None;
    }

    let (mut blue_team, mut red_team) = match policy {
        Policy::Random => split_random(players, rng),
        Policy::SemiRandomBalanced => split_semi_random_balanced(players, rng),
        Policy::FullBalance => split_full_balance(players),
    };

    if assign_roles {
        if let Err(err) = assignment::assign_roles(&mut blue_team, &mut red_team) {
            log::warn!("Skipping role assignment: {err}");
        }
    }
    Ok(TeamResult::new(blue_team, red_team))
}

// Uniform shuffle, then split at the midpoint: first half Blue, second half
// Red. (Fisher-Yates via `SliceRandom`, not the original's comparator-based
// shuffle, which is known to be non-uniform.)
fn split_random(mut players: Vec<Player>, rng: &mut impl Rng) -> (Vec<Player>, Vec<Player>) {
    players.shuffle(rng);
    let red_team = players.split_off(players.len() / 2);
    (players, red_team)
}

// Weighted-random distribution of the strongest half, then a deterministic
// second pass that deals the weaker half to the smaller team. The second
// pass guarantees equal final sizes no matter how the first pass went.
fn split_semi_random_balanced(
    mut players: Vec<Player>, rng: &mut impl Rng,
) -> (Vec<Player>, Vec<Player>) {
    players.sort_by(|a, b| b.skill_value.cmp(&a.skill_value));
    let mid = players.len() / 2;
    let weaker_half = players.split_off(mid);

    let mut blue_team = Vec::with_capacity(mid);
    let mut red_team = Vec::with_capacity(mid);
    let mut blue_skill: u32 = 0;
    let mut red_skill: u32 = 0;
    for player in players {
        let r = rng.random::<f64>();
        let to_blue = if blue_skill.abs_diff(red_skill) < 100 {
            // Teams already close: near-uniform tie-break.
            r < 0.5
        } else if blue_skill < red_skill {
            // 80% toward the weaker team, 20% against it.
            r < 0.8
        } else {
            r >= 0.8
        };
        if to_blue {
            blue_skill += player.skill_value;
            blue_team.push(player);
        } else {
            red_skill += player.skill_value;
            red_team.push(player);
        }
    }
    for player in weaker_half {
        if red_team.len() < blue_team.len() {
            red_team.push(player);
        } else {
            blue_team.push(player);
        }
    }
    (blue_team, red_team)
}

// Exhaustive optimum: tries every C(n, n/2) blue-team combination and keeps
// the first one with the smallest skill difference. Combinatorial cost;
// usable up to roughly 10-12 players, which the 10-slot roster keeps us
// under. Larger rosters would need a subset-sum style fallback.
fn split_full_balance(mut players: Vec<Player>) -> (Vec<Player>, Vec<Player>) {
    players.sort_by(|a, b| b.skill_value.cmp(&a.skill_value));
    let mid = players.len() / 2;
    let total: u32 = team_skill(&players);

    let mut best_indices = None;
    let mut best_difference = u32::MAX;
    for indices in (0..players.len()).combinations(mid) {
        let blue_skill: u32 = indices.iter().map(|&i| players[i].skill_value).sum();
        let difference = blue_skill.abs_diff(total - blue_skill);
        if difference < best_difference {
            best_difference = difference;
            best_indices = Some(indices);
            if difference == 0 {
                break;
            }
        }
    }

    let best_indices = best_indices.unwrap_or_else(|| (0..mid).collect());
    let mut in_blue = vec![false; players.len()];
    for &i in &best_indices {
        in_blue[i] = true;
    }
    let mut blue_team = Vec::with_capacity(mid);
    let mut red_team = Vec::with_capacity(mid);
    for (i, player) in players.into_iter().enumerate() {
        if in_blue[i] {
            blue_team.push(player);
        } else {
            red_team.push(player);
        }
    }
    (blue_team, red_team)
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn policy_parsing() {
        assert_eq!("random".parse::<Policy>().unwrap(), Policy::Random);
        assert_eq!("fullyRandom".parse::<Policy>().unwrap(), Policy::Random);
        assert_eq!("balanced".parse::<Policy>().unwrap(), Policy::SemiRandomBalanced);
        assert_eq!("semi-random-balanced".parse::<Policy>().unwrap(), Policy::SemiRandomBalanced);
        assert_eq!("fullBalance".parse::<Policy>().unwrap(), Policy::FullBalance);
        assert_eq!("full-balance".parse::<Policy>().unwrap(), Policy::FullBalance);
        assert_eq!("mystery".parse::<Policy>().ok().unwrap_or_default(), Policy::Random);
    }

    #[test]
    fn invalid_roster_size_message_includes_count() {
        let message = PartitionError::InvalidRosterSize(7).to_string();
        assert!(message.contains('7'), "{message}");
    }
}
