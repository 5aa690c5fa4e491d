use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use rift_balance::generation::{GenerateError, TeamGenerator};
use rift_balance::partition::{partition_with_rng, PartitionError, Policy};
use rift_balance::player::Player;
use rift_balance::role::Role;
use rift_balance::test_util::{
    deterministic_rng, player_with_skill, sample_lobby, seeded_rng,
};


const ALL_POLICIES: [Policy; 3] =
    [Policy::Random, Policy::SemiRandomBalanced, Policy::FullBalance];

fn roster_of_size(n: usize) -> Vec<Player> {
    (0..n).map(|i| player_with_skill(&format!("p{i}#NA1"), 100 + (i as u32 * 37) % 900)).collect()
}

fn names(players: &[Player]) -> HashSet<String> {
    players.iter().map(|p| p.name.clone()).collect()
}

fn total_skill(players: &[Player]) -> u32 { players.iter().map(|p| p.skill_value).sum() }

#[test]
fn every_policy_splits_evenly_without_losing_players() {
    for n in [2, 4, 6, 8, 10] {
        let roster = roster_of_size(n);
        let roster_names = names(&roster);
        for policy in ALL_POLICIES {
            for seed in 0..20 {
                let result =
                    partition_with_rng(roster.clone(), policy, false, &mut seeded_rng(seed))
                        .unwrap();
                assert_eq!(result.blue_team.len(), n / 2, "{policy:?} n={n} seed={seed}");
                assert_eq!(result.red_team.len(), n / 2, "{policy:?} n={n} seed={seed}");
                let mut combined = names(&result.blue_team);
                combined.extend(names(&result.red_team));
                assert_eq!(combined, roster_names, "{policy:?} n={n} seed={seed}");
                assert_eq!(result.blue_total_skill, total_skill(&result.blue_team));
                assert_eq!(result.red_total_skill, total_skill(&result.red_team));
            }
        }
    }
}

#[test]
fn odd_roster_fails_for_every_policy() {
    for n in [1, 3, 5, 7, 9] {
        let roster = roster_of_size(n);
        for policy in ALL_POLICIES {
            let err = partition_with_rng(roster.clone(), policy, false, &mut deterministic_rng())
                .unwrap_err();
            assert_eq!(err, PartitionError::InvalidRosterSize(n));
        }
    }
}

#[test]
fn empty_roster_is_an_invalid_size() {
    let err =
        partition_with_rng(Vec::new(), Policy::Random, false, &mut deterministic_rng()).unwrap_err();
    assert_eq!(err, PartitionError::InvalidRosterSize(0));
}

#[test]
fn full_balance_finds_the_minimal_split() {
    // [100, 100, 900, 900] must split as {100, 900} vs {100, 900}, not
    // {100, 100} vs {900, 900}.
    let roster = vec![
        player_with_skill("a#1", 100),
        player_with_skill("b#1", 100),
        player_with_skill("c#1", 900),
        player_with_skill("d#1", 900),
    ];
    let result =
        partition_with_rng(roster, Policy::FullBalance, false, &mut deterministic_rng()).unwrap();
    assert_eq!(result.blue_total_skill, 1000);
    assert_eq!(result.red_total_skill, 1000);
    assert_eq!(result.skill_difference(), 0);
}

#[test]
fn full_balance_is_deterministic_and_optimal() {
    let roster = sample_lobby();
    let first =
        partition_with_rng(roster.clone(), Policy::FullBalance, false, &mut seeded_rng(1)).unwrap();
    let second =
        partition_with_rng(roster.clone(), Policy::FullBalance, false, &mut seeded_rng(99))
            .unwrap();
    // The RNG plays no part in the exhaustive policy.
    assert_eq!(names(&first.blue_team), names(&second.blue_team));

    // No random split may beat the exhaustive optimum.
    for seed in 0..50 {
        let random =
            partition_with_rng(roster.clone(), Policy::Random, false, &mut seeded_rng(seed))
                .unwrap();
        assert!(first.skill_difference() <= random.skill_difference());
    }
}

#[test]
fn semi_random_keeps_sizes_equal_for_every_seed() {
    let roster = sample_lobby();
    for seed in 0..100 {
        let result = partition_with_rng(
            roster.clone(),
            Policy::SemiRandomBalanced,
            false,
            &mut seeded_rng(seed),
        )
        .unwrap();
        assert_eq!(result.blue_team.len(), 5, "seed={seed}");
        assert_eq!(result.red_team.len(), 5, "seed={seed}");
    }
}

#[test]
fn requested_roles_are_assigned_on_both_teams() {
    let result =
        partition_with_rng(sample_lobby(), Policy::SemiRandomBalanced, true, &mut seeded_rng(7))
            .unwrap();
    for team in [&result.blue_team, &result.red_team] {
        let assigned: HashSet<Role> = team.iter().filter_map(|p| p.assigned_role).collect();
        assert_eq!(
            assigned,
            HashSet::from([Role::Top, Role::Jgl, Role::Mid, Role::Bot, Role::Sup])
        );
    }
}

#[test]
fn unsupported_combined_size_skips_role_assignment() {
    // 4 players: no required-role set, partition still succeeds.
    let result =
        partition_with_rng(roster_of_size(4), Policy::Random, true, &mut deterministic_rng())
            .unwrap();
    assert!(result.blue_team.iter().chain(&result.red_team).all(|p| p.assigned_role.is_none()));
}

#[test]
fn stale_roles_do_not_leak_into_the_next_cycle() {
    let with_roles =
        partition_with_rng(sample_lobby(), Policy::Random, true, &mut seeded_rng(3)).unwrap();
    let mut recycled = with_roles.blue_team;
    recycled.extend(with_roles.red_team);
    assert!(recycled.iter().any(|p| p.assigned_role.is_some()));

    let without_roles =
        partition_with_rng(recycled, Policy::Random, false, &mut seeded_rng(4)).unwrap();
    assert!(without_roles
        .blue_team
        .iter()
        .chain(&without_roles.red_team)
        .all(|p| p.assigned_role.is_none()));
}

#[test]
fn cooldown_rejects_then_allows() {
    let mut generator = TeamGenerator::with_cooldown(Duration::from_millis(500));
    generator.generate_with_rng(roster_of_size(4), Policy::Random, false, &mut seeded_rng(0))
        .unwrap();
    let err = generator
        .generate_with_rng(roster_of_size(4), Policy::Random, false, &mut seeded_rng(1))
        .unwrap_err();
    assert_eq!(err, GenerateError::RateLimited { remaining_secs: 1 });

    thread::sleep(Duration::from_millis(600));
    generator.generate_with_rng(roster_of_size(4), Policy::Random, false, &mut seeded_rng(2))
        .unwrap();
}

#[test]
fn cooldown_reports_remaining_whole_seconds() {
    let mut generator = TeamGenerator::with_cooldown(Duration::from_secs(30));
    assert_eq!(generator.remaining_cooldown_secs(), None);
    generator.generate_with_rng(roster_of_size(2), Policy::Random, false, &mut seeded_rng(0))
        .unwrap();
    let remaining = generator.remaining_cooldown_secs().unwrap();
    assert!((29..=30).contains(&remaining), "{remaining}");
    match generator
        .generate_with_rng(roster_of_size(2), Policy::Random, false, &mut seeded_rng(1))
        .unwrap_err()
    {
        GenerateError::RateLimited { remaining_secs } => {
            assert!((29..=30).contains(&remaining_secs), "{remaining_secs}")
        }
        err => panic!("expected RateLimited, got {err:?}"),
    }
}

#[test]
fn failed_generation_leaves_prior_state_untouched() {
    let mut generator = TeamGenerator::with_cooldown(Duration::ZERO);
    let first_roster = roster_of_size(4);
    let first_names = names(&first_roster);
    generator.generate_with_rng(first_roster, Policy::Random, false, &mut seeded_rng(0)).unwrap();

    let err = generator
        .generate_with_rng(roster_of_size(3), Policy::Random, false, &mut seeded_rng(1))
        .unwrap_err();
    assert_eq!(err, GenerateError::InvalidRosterSize(3));

    // The reroll still works off the last successful roster.
    let reroll = generator.reroll_with_rng(Policy::Random, false, &mut seeded_rng(2)).unwrap();
    let mut combined = names(&reroll.blue_team);
    combined.extend(names(&reroll.red_team));
    assert_eq!(combined, first_names);
}

#[test]
fn reroll_before_any_generation_is_rejected() {
    let mut generator = TeamGenerator::new();
    let err = generator.reroll_with_rng(Policy::Random, false, &mut seeded_rng(0)).unwrap_err();
    assert_eq!(err, GenerateError::NothingToReroll);
}

#[test]
fn reroll_ignores_and_does_not_restart_the_cooldown() {
    let mut generator = TeamGenerator::with_cooldown(Duration::from_secs(30));
    generator
        .generate_with_rng(sample_lobby(), Policy::SemiRandomBalanced, true, &mut seeded_rng(0))
        .unwrap();
    assert!(generator.remaining_cooldown_secs().is_some());

    // Reroll works during the cooldown, with a different policy if desired.
    generator.reroll_with_rng(Policy::FullBalance, true, &mut seeded_rng(1)).unwrap();
    generator.reroll_with_rng(Policy::Random, false, &mut seeded_rng(2)).unwrap();

    // And a direct generate is still rate-limited afterwards.
    let err = generator
        .generate_with_rng(sample_lobby(), Policy::Random, false, &mut seeded_rng(3))
        .unwrap_err();
    assert!(matches!(err, GenerateError::RateLimited { .. }));
}

#[test]
fn empty_roster_is_rejected_before_partitioning() {
    let mut generator = TeamGenerator::new();
    let err = generator
        .generate_with_rng(Vec::new(), Policy::Random, false, &mut seeded_rng(0))
        .unwrap_err();
    assert_eq!(err, GenerateError::EmptyRoster);
}

#[test]
fn role_assignment_needs_at_least_six_players() {
    let mut generator = TeamGenerator::new();
    let err = generator
        .generate_with_rng(roster_of_size(4), Policy::Random, true, &mut seeded_rng(0))
        .unwrap_err();
    assert_eq!(err, GenerateError::InsufficientForRoles(4));

    // The same roster is fine without role assignment.
    let mut generator = TeamGenerator::new();
    generator.generate_with_rng(roster_of_size(4), Policy::Random, false, &mut seeded_rng(0))
        .unwrap();
}
