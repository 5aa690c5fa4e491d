use std::fmt;
use std::str::FromStr;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

use crate::rank::{skill_value, Tier};
use crate::role::Role;


#[derive(Clone, Copy, PartialEq, Eq, Debug, Enum, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    pub fn opponent(self) -> Self {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
        }
    }
}

// A "name#tag" identifier, e.g. "Dragonbolt0005#NA1".
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl FromStr for RiotId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((game_name, tag_line)) = s.split_once('#') else {
            return Err(format!("player id '{s}' is missing '#': expected name#tag"));
        };
        let (game_name, tag_line) = (game_name.trim(), tag_line.trim());
        if game_name.is_empty() || tag_line.is_empty() {
            return Err(format!("player id '{s}' has an empty name or tag"));
        }
        Ok(RiotId { game_name: game_name.to_owned(), tag_line: tag_line.to_owned() })
    }
}

impl fmt::Display for RiotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

// One roster member with the skill value already derived. Constructed fresh
// for each generation cycle; `skill_value` is computed once here and never
// recomputed mid-generation. `tier` is `None` when the ranked API reported a
// tier this build does not know, which contributes base 0 to the skill model.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub tier: Option<Tier>,
    pub division: u8,
    pub skill_value: u32,
    pub preferred_roles: Vec<Role>,
    pub assigned_role: Option<Role>,
}

impl Player {
    pub fn new(
        name: String, tier: Option<Tier>, division: u8, preferred_roles: Vec<Role>,
    ) -> Self {
        Player {
            name,
            tier,
            division,
            skill_value: skill_value(tier, division),
            preferred_roles,
            assigned_role: None,
        }
    }

    pub fn prefers(&self, role: Role) -> bool { self.preferred_roles.contains(&role) }

    // "GOLD 3", "MASTER", or "UNRANKED" when the tier is unknown.
    pub fn rank_label(&self) -> String {
        match self.tier {
            Some(tier) if self.division > 0 => format!("{} {}", tier, self.division),
            Some(tier) => tier.to_string(),
            None => "UNRANKED".to_owned(),
        }
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn teams_are_each_others_opponents() {
        assert_eq!(Team::Blue.opponent(), Team::Red);
        assert_eq!(Team::Red.opponent(), Team::Blue);
    }

    #[test]
    fn riot_id_parsing() {
        let id: RiotId = "Dragonbolt0005#NA1".parse().unwrap();
        assert_eq!(id.game_name, "Dragonbolt0005");
        assert_eq!(id.tag_line, "NA1");
        assert_eq!(id.to_string(), "Dragonbolt0005#NA1");

        assert!("no-hash".parse::<RiotId>().is_err());
        assert!("#tag".parse::<RiotId>().is_err());
        assert!("name#".parse::<RiotId>().is_err());
    }

    #[test]
    fn skill_is_derived_once_at_construction() {
        let player = Player::new("a#b".to_owned(), Some(Tier::Platinum), 2, vec![]);
        assert_eq!(player.skill_value, 530);
        assert_eq!(player.assigned_role, None);
    }

    #[test]
    fn rank_labels() {
        let gold = Player::new("a#b".to_owned(), Some(Tier::Gold), 3, vec![]);
        assert_eq!(gold.rank_label(), "GOLD 3");
        let master = Player::new("c#d".to_owned(), Some(Tier::Master), 0, vec![]);
        assert_eq!(master.rank_label(), "MASTER");
        let unknown = Player::new("e#f".to_owned(), None, 0, vec![]);
        assert_eq!(unknown.rank_label(), "UNRANKED");
    }
}
