use console::Style;
use rift_balance::partition::TeamResult;
use rift_balance::player::{Player, Team};
use rift_balance::rank::Tier;


// Terminal approximations of the web UI's rank color table.
fn tier_style(tier: Option<Tier>) -> Style {
    let style = Style::new();
    match tier {
        Some(Tier::Iron) => style.color256(245),
        Some(Tier::Bronze) => style.color256(172),
        Some(Tier::Silver) => style.color256(250),
        Some(Tier::Gold) => style.color256(220),
        Some(Tier::Platinum) => style.color256(255),
        Some(Tier::Emerald) => style.color256(78),
        Some(Tier::Diamond) => style.color256(159),
        Some(Tier::Master) => style.color256(135),
        Some(Tier::Grandmaster) => style.color256(203),
        Some(Tier::Challenger) => style.color256(220),
        None => style.color256(135),
    }
}

fn profile_url(player: &Player) -> String {
    format!("https://dpm.lol/{}", player.name.replace('#', "-"))
}

fn team_title(team: Team) -> (&'static str, Style) {
    match team {
        Team::Blue => ("Blue Side", Style::new().blue().bold()),
        Team::Red => ("Red Side", Style::new().red().bold()),
    }
}

fn print_team(team: Team, players: &[Player], total_skill: u32) {
    let (title, title_style) = team_title(team);
    println!("{}", title_style.apply_to(title));
    for player in players {
        let role =
            player.assigned_role.map_or_else(|| "No Role".to_owned(), |role| role.to_string());
        // Pad before styling: ANSI escapes would throw the column width off.
        let rank = format!("{:>14}", player.rank_label());
        println!(
            "  {:>7}  {:<24} {} ({})  {}",
            role,
            player.name,
            tier_style(player.tier).apply_to(rank),
            player.skill_value,
            Style::new().dim().apply_to(profile_url(player)),
        );
    }
    println!("  Total MMR: {total_skill}");
}

pub fn print_teams(result: &TeamResult) {
    print_team(Team::Blue, result.team(Team::Blue), result.total_skill(Team::Blue));
    println!();
    print_team(Team::Red, result.team(Team::Red), result.total_skill(Team::Red));
    let diff = result.skill_difference();
    println!("\nSkill difference: {diff}");
}
