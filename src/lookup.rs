use std::fmt;

use async_trait::async_trait;
use futures_util::future;
use serde::Deserialize;

use crate::player::{Player, RiotId};
use crate::rank::{roman_to_division, DefaultRank, Tier};
use crate::role::Role;


pub const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

// Riot account-v1 payload.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub puuid: String,
    pub game_name: String,
    pub tag_line: String,
}

// Riot league-v4 entry. `rank` is the Roman-numeral division, absent for
// apex tiers.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    pub queue_type: String,
    pub tier: String,
    #[serde(default)]
    pub rank: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LookupError {
    NotFound,
    Failed(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound => write!(f, "account not found"),
            LookupError::Failed(reason) => write!(f, "lookup failed: {reason}"),
        }
    }
}

// The two remote calls the generator needs. Implemented over HTTP by the
// console client and by in-memory fakes in tests.
#[async_trait]
pub trait RankedApi {
    async fn account_by_riot_id(&self, id: &RiotId) -> Result<Account, LookupError>;
    async fn entries_by_puuid(&self, puuid: &str) -> Result<Vec<LeagueEntry>, LookupError>;
}

// One requested roster slot, before any fetching.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RosterEntry {
    pub riot_id: RiotId,
    pub preferred_roles: Vec<Role>,
}

impl RosterEntry {
    pub fn new(riot_id: RiotId, preferred_roles: Vec<Role>) -> Self {
        RosterEntry { riot_id, preferred_roles }
    }
}

// Extracts (tier, division) from the ranked entries: the solo-queue entry is
// preferred when several exist, falling back to the first. `None` means no
// ranked data at all (the default-rank fallback applies). A tier name this
// build does not know yields `(None, division)`, i.e. base skill 0.
pub fn rank_from_entries(entries: &[LeagueEntry]) -> Option<(Option<Tier>, u8)> {
    let entry = entries.iter().find(|e| e.queue_type == SOLO_QUEUE).or_else(|| entries.first())?;
    let tier = Tier::from_api_name(&entry.tier);
    if tier.is_none() {
        log::warn!("Unknown tier '{}' in ranked entry; counting base skill as 0", entry.tier);
    }
    let division = entry.rank.as_deref().map_or(0, roman_to_division);
    Some((tier, division))
}

async fn resolve_player<A: RankedApi + Sync>(
    api: &A, entry: RosterEntry, default_rank: DefaultRank,
) -> Option<Player> {
    let account = match api.account_by_riot_id(&entry.riot_id).await {
        Ok(account) => account,
        Err(err) => {
            log::warn!("Excluding player {}: {err}", entry.riot_id);
            return None;
        }
    };
    let name = format!("{}#{}", account.game_name, account.tag_line);
    // A failed ranked lookup after a successful account lookup degrades to
    // the default rank rather than dropping the player.
    let entries = match api.entries_by_puuid(&account.puuid).await {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("No ranked data for {name}: {err}; using default rank");
            Vec::new()
        }
    };
    let player = match rank_from_entries(&entries) {
        Some((tier, division)) => Player::new(name, tier, division, entry.preferred_roles),
        None => {
            Player::new(name, Some(default_rank.tier), default_rank.division, entry.preferred_roles)
        }
    };
    Some(player)
}

// Resolves the requested roster against the ranked API: every player is an
// independent account-then-entries chain, all fanned out concurrently and
// awaited together, so partitioning never starts on a half-fetched roster.
// Individual failures are excluded; survivors keep their request order. An
// empty result means generation cannot proceed.
pub async fn resolve_roster<A: RankedApi + Sync>(
    api: &A, entries: Vec<RosterEntry>, default_rank: DefaultRank,
) -> Vec<Player> {
    let lookups = entries.into_iter().map(|entry| resolve_player(api, entry, default_rank));
    future::join_all(lookups).await.into_iter().flatten().collect()
}
