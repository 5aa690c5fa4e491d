use std::fmt;

use enum_map::{enum_map, EnumMap};

use crate::player::Player;
use crate::role::{required_roles, Role};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoleAssignmentError {
    // Combined team size outside {6, 8, 10}. Callers treat this as
    // "assignment skipped", not as a failed generation.
    UnsupportedPlayerCount(usize),
}

impl fmt::Display for RoleAssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleAssignmentError::UnsupportedPlayerCount(count) => {
                write!(f, "Invalid team size for role assignment: {count}")
            }
        }
    }
}

// Assigns one required role per player on each team. The required-role set
// is derived from the combined player count; each team is then processed
// independently in two passes: preferences first, then fill. On error no
// `assigned_role` is touched.
pub fn assign_roles(
    team1: &mut [Player], team2: &mut [Player],
) -> Result<(), RoleAssignmentError> {
    let player_count = team1.len() + team2.len();
    let required = required_roles(player_count)
        .ok_or(RoleAssignmentError::UnsupportedPlayerCount(player_count))?;
    assign_team_roles(team1, required);
    assign_team_roles(team2, required);
    Ok(())
}

fn assign_team_roles(team: &mut [Player], required: &[Role]) {
    for player in team.iter_mut() {
        player.assigned_role = None;
    }
    let mut unassigned: Vec<usize> = (0..team.len()).collect();
    let mut filled: EnumMap<Role, bool> = enum_map! { _ => false };

    // Preference pass: for each required role in order, the strongest player
    // who asked for it.
    for &role in required {
        let preferring = unassigned.iter().copied().filter(|&i| team[i].prefers(role));
        if let Some(best) = strongest(team, preferring) {
            team[best].assigned_role = Some(role);
            filled[role] = true;
            unassigned.retain(|&i| i != best);
        }
    }

    // Fill pass: remaining roles go to the strongest leftover players,
    // preferences no longer considered.
    for &role in required {
        if filled[role] {
            continue;
        }
        if let Some(best) = strongest(team, unassigned.iter().copied()) {
            team[best].assigned_role = Some(role);
            filled[role] = true;
            unassigned.retain(|&i| i != best);
        }
    }
}

// Highest skill value wins; the first candidate encountered wins ties.
fn strongest(team: &[Player], candidates: impl Iterator<Item = usize>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for i in candidates {
        match best {
            Some(b) if team[i].skill_value <= team[b].skill_value => {}
            _ => best = Some(i),
        }
    }
    best
}
