use std::fmt;
use std::time::Duration;

use instant::Instant;
use rand::prelude::*;

use crate::partition::{self, PartitionError, Policy, TeamResult};
use crate::player::Player;


pub const GENERATION_COOLDOWN: Duration = Duration::from_secs(30);

// Everything here is a normal rejected result to show to the user, never a
// crash. A failed call leaves the generator state untouched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GenerateError {
    EmptyRoster,
    InvalidRosterSize(usize),
    InsufficientForRoles(usize),
    RateLimited { remaining_secs: u64 },
    NothingToReroll,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::EmptyRoster => {
                write!(f, "No valid players found. Please check your player names and try again.")
            }
            GenerateError::InvalidRosterSize(count) => {
                write!(f, "{}", PartitionError::InvalidRosterSize(*count))
            }
            GenerateError::InsufficientForRoles(count) => write!(
                f,
                "Role assignment requires at least 6 players. Current count: {count}"
            ),
            GenerateError::RateLimited { remaining_secs } => write!(
                f,
                "Generate Teams is on cooldown. Please wait {remaining_secs} more seconds."
            ),
            GenerateError::NothingToReroll => {
                write!(f, "No processed roster to reroll. Generate teams first.")
            }
        }
    }
}

impl From<PartitionError> for GenerateError {
    fn from(err: PartitionError) -> Self {
        match err {
            PartitionError::InvalidRosterSize(count) => GenerateError::InvalidRosterSize(count),
        }
    }
}

// Coordinates one session's team generation: validates the roster, applies
// the cooldown between generation requests, invokes the partitioner and
// keeps the processed roster around so rerolls do not refetch anything.
// One generator per session; `&mut self` makes the cooldown check-and-set
// exclusive, concurrent servers would put the generator behind a mutex.
pub struct TeamGenerator {
    cooldown: Duration,
    last_generated: Option<Instant>,
    last_roster: Option<Vec<Player>>,
}

impl TeamGenerator {
    pub fn new() -> Self { Self::with_cooldown(GENERATION_COOLDOWN) }

    pub fn with_cooldown(cooldown: Duration) -> Self {
        TeamGenerator { cooldown, last_generated: None, last_roster: None }
    }

    // Whole seconds left on the cooldown (rounded up), or `None` when a
    // generation is allowed right now.
    pub fn remaining_cooldown_secs(&self) -> Option<u64> {
        let last_generated = self.last_generated?;
        let elapsed = last_generated.elapsed();
        if elapsed >= self.cooldown {
            return None;
        }
        Some((self.cooldown - elapsed).as_millis().div_ceil(1000) as u64)
    }

    pub fn generate(
        &mut self, roster: Vec<Player>, policy: Policy, assign_roles: bool,
    ) -> Result<TeamResult, GenerateError> {
        self.generate_with_rng(roster, policy, assign_roles, &mut rand::rng())
    }

    pub fn generate_with_rng(
        &mut self, roster: Vec<Player>, policy: Policy, assign_roles: bool, rng: &mut impl Rng,
    ) -> Result<TeamResult, GenerateError> {
        if let Some(remaining_secs) = self.remaining_cooldown_secs() {
            return Err(GenerateError::RateLimited { remaining_secs });
        }
        if roster.is_empty() {
            return Err(GenerateError::EmptyRoster);
        }
        if assign_roles && roster.len() < 6 {
            return Err(GenerateError::InsufficientForRoles(roster.len()));
        }
        let result = partition::partition_with_rng(roster.clone(), policy, assign_roles, rng)?;
        self.last_generated = Some(Instant::now());
        self.last_roster = Some(roster);
        Ok(result)
    }

    // Re-partitions the roster of the last successful generation without
    // refetching ranked data. Not subject to the cooldown and does not
    // restart it.
    pub fn reroll(
        &mut self, policy: Policy, assign_roles: bool,
    ) -> Result<TeamResult, GenerateError> {
        self.reroll_with_rng(policy, assign_roles, &mut rand::rng())
    }

    pub fn reroll_with_rng(
        &mut self, policy: Policy, assign_roles: bool, rng: &mut impl Rng,
    ) -> Result<TeamResult, GenerateError> {
        let roster = self.last_roster.clone().ok_or(GenerateError::NothingToReroll)?;
        Ok(partition::partition_with_rng(roster, policy, assign_roles, rng)?)
    }
}
