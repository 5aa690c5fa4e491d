use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumIter;


// The ten ranked tiers, weakest to strongest. Ordering is meaningful:
// `Tier::Iron < Tier::Challenger`.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, EnumIter, Serialize, Deserialize,
)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    // Base skill ladder, spaced 100 apart.
    pub fn base_value(self) -> u32 {
        match self {
            Tier::Iron => 100,
            Tier::Bronze => 200,
            Tier::Silver => 300,
            Tier::Gold => 400,
            Tier::Platinum => 500,
            Tier::Emerald => 600,
            Tier::Diamond => 700,
            Tier::Master => 800,
            Tier::Grandmaster => 900,
            Tier::Challenger => 1000,
        }
    }

    pub fn api_name(self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
            Tier::Master => "MASTER",
            Tier::Grandmaster => "GRANDMASTER",
            Tier::Challenger => "CHALLENGER",
        }
    }

    // Parses the uppercase tier names used by the ranked API. Case-insensitive.
    pub fn from_api_name(s: &str) -> Option<Tier> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IRON" => Some(Tier::Iron),
            "BRONZE" => Some(Tier::Bronze),
            "SILVER" => Some(Tier::Silver),
            "GOLD" => Some(Tier::Gold),
            "PLATINUM" => Some(Tier::Platinum),
            "EMERALD" => Some(Tier::Emerald),
            "DIAMOND" => Some(Tier::Diamond),
            // The original rank selector spells it "masters".
            "MASTER" | "MASTERS" => Some(Tier::Master),
            "GRANDMASTER" => Some(Tier::Grandmaster),
            "CHALLENGER" => Some(Tier::Challenger),
            _ => None,
        }
    }

    // Master and above have no divisions.
    pub fn has_divisions(self) -> bool { self < Tier::Master }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.api_name()) }
}

// Division 1 (best) adds 40, division 4 (worst) adds 10. Zero or out-of-range
// divisions add nothing: that covers apex tiers and unparsed input alike.
pub fn division_bonus(division: u8) -> u32 {
    match division {
        1..=4 => (5 - division as u32) * 10,
        _ => 0,
    }
}

// The skill model: a single comparable integer per (tier, division) pair.
// Pure and total; a tier the API sent but we do not know contributes base 0.
pub fn skill_value(tier: Option<Tier>, division: u8) -> u32 {
    tier.map_or(0, Tier::base_value) + division_bonus(division)
}

// Division notation from the ranked API ("I".."IV"). Unrecognized input maps
// to 0, which the skill model treats as "no division".
pub fn roman_to_division(roman: &str) -> u8 {
    match roman.trim() {
        "I" => 1,
        "II" => 2,
        "III" => 3,
        "IV" => 4,
        _ => 0,
    }
}

// The "default unranked to" setting: the rank assumed for players with no
// ranked entries. Written in the original dropdown notation, e.g. "iron1",
// "gold3", "grandmaster".
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DefaultRank {
    pub tier: Tier,
    pub division: u8,
}

impl DefaultRank {
    pub fn skill_value(self) -> u32 { skill_value(Some(self.tier), self.division) }
}

impl Default for DefaultRank {
    fn default() -> Self { DefaultRank { tier: Tier::Iron, division: 1 } }
}

impl FromStr for DefaultRank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digit_at = s.find(|c: char| c.is_ascii_digit());
        let (tier_part, division_part) = s.split_at(digit_at.unwrap_or(s.len()));
        let tier = Tier::from_api_name(tier_part)
            .ok_or_else(|| format!("unknown tier in default rank '{s}'"))?;
        if division_part.is_empty() {
            if tier.has_divisions() {
                return Err(format!("default rank '{s}' requires a division (1-4)"));
            }
            return Ok(DefaultRank { tier, division: 0 });
        }
        if !tier.has_divisions() {
            return Err(format!("tier {tier} has no divisions, got '{s}'"));
        }
        match division_part.parse::<u8>() {
            Ok(division @ 1..=4) => Ok(DefaultRank { tier, division }),
            _ => Err(format!("bad division in default rank '{s}': expected 1-4")),
        }
    }
}

impl fmt::Display for DefaultRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tier = self.tier.api_name().to_ascii_lowercase();
        if self.tier.has_divisions() {
            write!(f, "{}{}", tier, self.division)
        } else {
            write!(f, "{}", tier)
        }
    }
}
