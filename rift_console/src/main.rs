#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod display;
mod riot;
mod roster;

use std::io::Read;
use std::{env, fs, io};

use anyhow::{bail, Context};
use clap::{arg, Command};
use rift_balance::generation::TeamGenerator;
use rift_balance::lookup::{self, RosterEntry};
use rift_balance::partition::Policy;
use rift_balance::rank::DefaultRank;
use riot::RiotClient;


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Rift Balance")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Custom game balancer: fetches ranked stats and splits a lobby into two fair teams")
        .arg(arg!(<roster_file>
            "Roster file, one player per line: name#tag,ROLE1,ROLE2,... ('-' reads stdin)"))
        .arg(
            arg!(-p --policy <policy> "Balancing policy")
                .value_parser(["fully-random", "balanced", "full-balance"])
                .default_value("fully-random"),
        )
        .arg(arg!(-r --"assign-roles" "Assign a role to every player (needs at least 6 players)"))
        .arg(
            arg!(-d --"default-rank" <rank> "Rank assumed for unranked players, e.g. gold3")
                .default_value("iron1"),
        )
        .arg(
            arg!(--rerolls <n> "Print this many extra rolls from the same fetched data")
                .value_parser(0..=10)
                .default_value("0"),
        )
        .get_matches();

    let policy: Policy =
        matches.get_one::<String>("policy").unwrap().parse().unwrap_or_default();
    let default_rank: DefaultRank = matches
        .get_one::<String>("default-rank")
        .unwrap()
        .parse()
        .map_err(|err: String| anyhow::anyhow!(err))?;
    let assign_roles = matches.get_flag("assign-roles");
    let rerolls = *matches.get_one::<i64>("rerolls").unwrap();

    let roster_file = matches.get_one::<String>("roster_file").unwrap();
    let roster_text = if roster_file == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("reading roster from stdin failed")?;
        text
    } else {
        fs::read_to_string(roster_file)
            .with_context(|| format!("reading roster file '{roster_file}' failed"))?
    };
    let entries = roster::parse_roster(&roster_text);
    if entries.is_empty() {
        bail!("The roster is empty. Expected one 'name#tag,ROLE1,ROLE2,...' line per player.");
    }
    if assign_roles && entries.len() < 6 {
        bail!(
            "Role assignment requires at least 6 players, got {}. \
             Add more players or drop --assign-roles.",
            entries.len()
        );
    }

    let api_key =
        env::var("RIOT_API_KEY").context("Missing the RIOT_API_KEY environment variable.")?;
    let client = RiotClient::new(api_key);
    async_std::task::block_on(run(client, entries, default_rank, policy, assign_roles, rerolls))
}

async fn run(
    client: RiotClient, entries: Vec<RosterEntry>, default_rank: DefaultRank, policy: Policy,
    assign_roles: bool, rerolls: i64,
) -> anyhow::Result<()> {
    let requested = entries.len();
    let players = lookup::resolve_roster(&client, entries, default_rank).await;
    if players.len() < requested {
        log::warn!("{} of {requested} players could not be resolved", requested - players.len());
    }

    let mut generator = TeamGenerator::new();
    let result = generator
        .generate(players, policy, assign_roles)
        .map_err(|err| anyhow::anyhow!("{err}"))?;
    display::print_teams(&result);

    for i in 1..=rerolls {
        println!("\nReroll {i}:");
        let result =
            generator.reroll(policy, assign_roles).map_err(|err| anyhow::anyhow!("{err}"))?;
        display::print_teams(&result);
    }
    Ok(())
}
