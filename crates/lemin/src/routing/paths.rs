use std::collections::HashSet;

use super::colony::{Colony, RoomId};
use super::serialize::path_to_string;

/// A set of room-disjoint start→end paths, shortest first, scored with the
/// turn count for the colony's ant population.
#[derive(Debug, Clone)]
pub struct PathSet {
    /// Room sequences from start to end, sorted by ascending length.
    pub paths: Vec<Vec<RoomId>>,
    /// Turns needed to move every ant through these paths.
    pub turns: i64,
}

impl PathSet {
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Tunnels crossed by path `i` (one fewer than its rooms).
    fn hops(&self, i: usize) -> i64 {
        self.paths[i].len() as i64 - 1
    }

    /// How many ants each path receives.
    ///
    /// Each path first absorbs the length gap to the longest path, then the
    /// leftover ants spread evenly with the remainder going to the shortest
    /// paths. Shares of paths too long to be useful come out zero or
    /// negative — the scheduler launches nothing for those — and the signed
    /// shares always sum to the ant count. The split must be Euclidean:
    /// `ants - slack` can go negative when the set is wider than the
    /// population, and a truncating `/` and `%` would leak or invent ants
    /// there.
    pub fn assignments(&self, ants: i64) -> Vec<i64> {
        let p = self.paths.len() as i64;
        let longest = self.hops(self.paths.len() - 1);
        let slack: i64 = (0..self.paths.len()).map(|i| longest - self.hops(i)).sum();
        let share = (ants - slack).div_euclid(p);
        let mut remainder = (ants - slack).rem_euclid(p);
        let mut shares = Vec::with_capacity(self.paths.len());
        for i in 0..self.paths.len() {
            let mut ants_here = longest - self.hops(i) + share;
            if remainder > 0 {
                ants_here += 1;
                remainder -= 1;
            }
            shares.push(ants_here);
        }
        shares
    }
}

/// Rebuild the committed path set from the residual graph and score it.
///
/// Each recorded exit unrolls into one path by following `prev` toward
/// start. Re-routed searches can leave several exits unrolling to the same
/// path, so duplicates collapse on their canonical string form; the sort is
/// stable, so equal-length paths keep discovery order and repeated runs
/// stay identical.
pub(super) fn collect(colony: &Colony) -> PathSet {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();
    for &exit in &colony.exits {
        let path = unroll(colony, exit);
        if seen.insert(path_to_string(colony, &path)) {
            paths.push(path);
        }
    }
    paths.sort_by_key(Vec::len);
    let turns = turn_count(&paths, colony.ants);
    PathSet { paths, turns }
}

fn unroll(colony: &Colony, exit: RoomId) -> Vec<RoomId> {
    let mut rooms = vec![colony.end];
    let mut v = exit;
    while v != colony.start {
        rooms.push(v);
        v = match colony.rooms[v].prev {
            Some(prev) => prev,
            None => break,
        };
    }
    rooms.push(colony.start);
    rooms.reverse();
    rooms
}

/// Closed-form turn count for `ants` ants over a sorted path set.
///
/// With paths sorted by hop count ℓ₁ ≤ … ≤ ℓₚ, shorter paths absorb
/// `slack = Σ(ℓₚ − ℓᵢ)` ants before the longest path's latency binds; the
/// remaining ants spread evenly and any remainder costs one extra turn.
/// The last ant launched on path i needs ℓᵢ − 1 further turns, hence the
/// trailing −1.
fn turn_count(paths: &[Vec<RoomId>], ants: i64) -> i64 {
    let p = paths.len() as i64;
    let shortest = paths[0].len() as i64 - 1;
    let longest = paths[paths.len() - 1].len() as i64 - 1;
    let slack: i64 = paths
        .iter()
        .map(|path| longest - (path.len() as i64 - 1))
        .sum();
    let mut bonus = longest - shortest + (ants - slack) / p;
    if (ants - slack) % p > 0 {
        bonus += 1;
    }
    shortest + bonus - 1
}
