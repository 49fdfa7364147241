use super::*;

use super::super::{paths, residual, search};

#[test]
fn duplicate_exits_collapse_to_one_path() {
    // Collection dedupes on the canonical path string, so a repeated exit
    // entry cannot produce a repeated path.
    let mut colony = colony(2, "A", "D", &[("A", "B"), ("B", "C"), ("C", "D")]);
    assert!(search::shortest_augmenting_path(&mut colony));
    residual::commit_path(&mut colony);
    assert_eq!(colony.exits.len(), 1);

    let exit = colony.exits[0];
    colony.exits.push(exit);
    let set = paths::collect(&colony);
    assert_eq!(set.path_count(), 1);
    assert_eq!(path_strings(&colony, &set), vec!["A->B->C->D"]);
}

#[test]
fn failed_search_reports_no_augmenting_path() {
    let mut colony = colony(1, "A", "B", &[("A", "x"), ("y", "B")]);
    assert!(!search::shortest_augmenting_path(&mut colony));
}

#[test]
fn second_search_respects_committed_rooms() {
    // Only one route exists even though a spur touches it: the spur cannot
    // pass through the committed room, so the second search must fail and
    // the plan stays a single path.
    let mut colony = colony(
        3,
        "S",
        "E",
        &[("S", "A"), ("A", "E"), ("S", "B"), ("B", "A")],
    );
    let set = solve(&mut colony).unwrap();
    assert_eq!(set.path_count(), 1);
    assert_eq!(path_strings(&colony, &set), vec!["S->A->E"]);
    assert_eq!(set.turns, 4);
}

#[test]
fn unrelated_rooms_do_not_disturb_routing() {
    let mut colony = colony(
        2,
        "S",
        "E",
        &[("S", "A"), ("A", "E"), ("X", "Y"), ("Y", "Z")],
    );
    let set = solve(&mut colony).unwrap();
    assert_eq!(set.path_count(), 1);
    let text = trace(&colony, &set);
    assert_valid_trace(&colony, &text);
}

#[test]
fn long_chain_two_ants() {
    let tunnels: Vec<(String, String)> = (0..9)
        .map(|i| (format!("r{i}"), format!("r{}", i + 1)))
        .collect();
    let tunnels: Vec<(&str, &str)> = tunnels
        .iter()
        .map(|(a, b)| (a.as_str(), b.as_str()))
        .collect();
    let mut colony = colony(2, "r0", "r9", &tunnels);
    let set = solve(&mut colony).unwrap();
    assert_eq!(set.turns, 9 + 2 - 1);
    let text = trace(&colony, &set);
    assert_eq!(text.lines().count() as i64, set.turns);
    assert_valid_trace(&colony, &text);
}

#[test]
fn duplicate_tunnels_collapse_in_the_colony() {
    use crate::parser::FarmFile;

    let farm = FarmFile {
        ants: 1,
        start: "A".to_string(),
        end: "B".to_string(),
        rooms: Vec::new(),
        tunnels: vec![
            ("A".to_string(), "mid".to_string()),
            ("mid".to_string(), "A".to_string()),
            ("mid".to_string(), "B".to_string()),
        ],
    };
    let colony = Colony::from_farm(&farm);
    let a = colony.id("A").unwrap();
    assert_eq!(colony.neighbors(a).len(), 1);
}

#[test]
fn prices_survive_between_passes() {
    // After the first pass every reachable room carries its distance as a
    // price, which is what keeps the second pass's reduced costs
    // non-negative. Spot-check the mechanism on a two-corridor farm.
    let mut colony = colony(
        2,
        "S",
        "E",
        &[("S", "a"), ("a", "E"), ("S", "b"), ("b", "E")],
    );
    assert!(search::shortest_augmenting_path(&mut colony));
    let s = colony.id("S").unwrap();
    let e = colony.id("E").unwrap();
    assert_eq!(colony.rooms[s].price_in, 0);
    assert_eq!(colony.rooms[e].price_in, 2);
}
