use std::fmt;
use std::str::FromStr;

use enum_map::Enum;
use serde::{Deserialize, Serialize};
use strum::EnumIter;


// The positional role tags a player may prefer and be assigned. `Fill` is a
// preference only: it never appears in a required-role set, so a pure-Fill
// player is placed by the fill pass.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, Serialize, Deserialize,
)]
pub enum Role {
    Top,
    Jgl,
    Mid,
    Bot,
    Sup,
    Fill,
}

impl Role {
    pub fn tag(self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jgl => "JGL",
            Role::Mid => "MID",
            Role::Bot => "BOT",
            Role::Sup => "SUP",
            Role::Fill => "FILL",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.tag()) }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TOP" => Ok(Role::Top),
            "JGL" => Ok(Role::Jgl),
            "MID" => Ok(Role::Mid),
            "BOT" => Ok(Role::Bot),
            "SUP" => Ok(Role::Sup),
            "FILL" => Ok(Role::Fill),
            _ => Err(format!("unknown role tag '{}'", s.trim())),
        }
    }
}

// Which roles must be filled on each team, by combined player count across
// both teams. Smaller lobbies drop support, then jungle. Any other count is
// unsupported and role assignment is skipped.
pub fn required_roles(total_players: usize) -> Option<&'static [Role]> {
    match total_players {
        10 => Some(&[Role::Top, Role::Jgl, Role::Mid, Role::Bot, Role::Sup]),
        8 => Some(&[Role::Top, Role::Jgl, Role::Mid, Role::Bot]),
        6 => Some(&[Role::Top, Role::Mid, Role::Bot]),
        _ => None,
    }
}
