use rift_balance::lookup::RosterEntry;
use rift_balance::player::RiotId;
use rift_balance::role::Role;


// The lobby has ten slots, like the input form this replaces.
pub const MAX_ROSTER_SIZE: usize = 10;

// Parses roster text, one player per line: `name#tag,ROLE1,ROLE2,...`.
// Role tags are matched case-insensitively; unknown tags are dropped with a
// warning, as are unparseable player ids and lines beyond the roster cap.
pub fn parse_roster(text: &str) -> Vec<RosterEntry> {
    let mut entries = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if entries.len() >= MAX_ROSTER_SIZE {
            log::warn!("Roster is limited to {MAX_ROSTER_SIZE} players; ignoring '{line}'");
            continue;
        }
        let mut parts = line.split(',');
        let id_part = parts.next().unwrap_or_default();
        let riot_id: RiotId = match id_part.parse() {
            Ok(riot_id) => riot_id,
            Err(err) => {
                log::warn!("Skipping roster line: {err}");
                continue;
            }
        };
        let mut preferred_roles: Vec<Role> = Vec::new();
        for tag in parts {
            match tag.parse::<Role>() {
                Ok(role) => {
                    if !preferred_roles.contains(&role) {
                        preferred_roles.push(role);
                    }
                }
                Err(err) => log::warn!("{riot_id}: {err}"),
            }
        }
        entries.push(RosterEntry::new(riot_id, preferred_roles));
    }
    entries
}
