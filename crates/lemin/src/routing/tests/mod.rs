mod edge_cases;

use std::collections::{HashMap, HashSet};

use crate::parser::FarmFile;

use super::colony::{Colony, RoomId};
use super::paths::PathSet;
use super::{schedule, serialize, solve};

/// Build a colony straight from tunnel pairs.
fn colony(ants: i64, start: &str, end: &str, tunnels: &[(&str, &str)]) -> Colony {
    let farm = FarmFile {
        ants,
        start: start.to_string(),
        end: end.to_string(),
        rooms: Vec::new(),
        tunnels: tunnels
            .iter()
            .map(|&(a, b)| (a.to_string(), b.to_string()))
            .collect(),
    };
    Colony::from_farm(&farm)
}

/// Canonical string of every path in the set, shortest first.
fn path_strings(colony: &Colony, set: &PathSet) -> Vec<String> {
    set.paths
        .iter()
        .map(|p| serialize::path_to_string(colony, p))
        .collect()
}

/// Render the full trace as a string.
fn trace(colony: &Colony, set: &PathSet) -> String {
    let mut buf = Vec::new();
    schedule::write_trace(&mut buf, colony, set).unwrap();
    String::from_utf8(buf).unwrap()
}

/// No two paths may share an intermediate room.
fn assert_disjoint_intermediates(colony: &Colony, set: &PathSet) {
    let mut seen: HashSet<RoomId> = HashSet::new();
    for path in &set.paths {
        for &room in &path[1..path.len() - 1] {
            assert!(
                seen.insert(room),
                "room {} appears on two paths",
                colony.name(room)
            );
        }
    }
}

/// Every consecutive pair of rooms on a path must be joined by a tunnel.
fn assert_paths_connected(colony: &Colony, set: &PathSet) {
    for path in &set.paths {
        for pair in path.windows(2) {
            assert!(
                colony.has_tunnel(pair[0], pair[1]),
                "no tunnel {}-{}",
                colony.name(pair[0]),
                colony.name(pair[1])
            );
        }
    }
}

/// Replay a trace line by line, asserting the movement rules: ids ascend
/// within a turn, every hop crosses a real tunnel, no tunnel carries two
/// ants in one turn, no intermediate room ever holds two ants, and in the
/// end every ant has both launched and arrived.
fn assert_valid_trace(colony: &Colony, text: &str) {
    let mut at: HashMap<i64, RoomId> = HashMap::new();
    for (turn, line) in text.lines().enumerate() {
        let mut used: HashSet<(RoomId, RoomId)> = HashSet::new();
        let mut prev_id = 0;
        for token in line.split_whitespace() {
            let body = token.strip_prefix('L').expect("token must start with L");
            let (id, room) = body.split_once('-').expect("token must be L<id>-<room>");
            let id: i64 = id.parse().expect("ant id");
            let room = colony.id(room).expect("known room");
            assert!(id > prev_id, "ids must ascend within turn {}", turn + 1);
            prev_id = id;

            let from = at.get(&id).copied().unwrap_or(colony.start);
            assert!(
                colony.has_tunnel(from, room),
                "no tunnel {}-{}",
                colony.name(from),
                colony.name(room)
            );
            let key = (from.min(room), from.max(room));
            assert!(
                used.insert(key),
                "tunnel {}-{} carries two ants in turn {}",
                colony.name(from),
                colony.name(room),
                turn + 1
            );
            at.insert(id, room);
        }
        let mut occupied = HashSet::new();
        for &room in at.values() {
            if room != colony.start && room != colony.end {
                assert!(
                    occupied.insert(room),
                    "room {} holds two ants after turn {}",
                    colony.name(room),
                    turn + 1
                );
            }
        }
    }
    assert_eq!(at.len() as i64, colony.ants, "every ant must launch");
    assert!(
        at.values().all(|&r| r == colony.end),
        "every ant must arrive at the end room"
    );
}
