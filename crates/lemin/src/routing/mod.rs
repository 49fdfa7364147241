pub mod colony;
pub mod paths;
pub mod schedule;
pub mod serialize;

mod residual;
mod search;

#[cfg(test)]
mod tests;

use colony::Colony;
use paths::PathSet;

/// Compute the best path set for the colony.
///
/// Runs successive augmenting searches, folding each result into the
/// residual graph and scoring the rebuilt path set; the set with the
/// strictly lowest turn count wins. Iteration is bounded by the ant count
/// and stops early once no augmenting path remains. Returns `None` when no
/// start→end path exists at all.
pub fn solve(colony: &mut Colony) -> Option<PathSet> {
    solve_observed(colony, |_| {})
}

/// Like [`solve`], reporting every candidate set to `observe` as it is
/// scored. The CLI's verbose diagnostics hang off this.
pub fn solve_observed<F>(colony: &mut Colony, mut observe: F) -> Option<PathSet>
where
    F: FnMut(&PathSet),
{
    // A tunnel joining start directly to end short-circuits everything:
    // the end room absorbs ants without limit, so the whole population
    // crosses in a single turn and no other plan can compete.
    if colony.has_tunnel(colony.start, colony.end) {
        return Some(PathSet {
            paths: vec![vec![colony.start, colony.end]],
            turns: 1,
        });
    }

    let mut best = next_path_set(colony)?;
    observe(&best);
    let mut found = 1;
    while found < colony.ants {
        let Some(candidate) = next_path_set(colony) else {
            break;
        };
        observe(&candidate);
        if candidate.turns < best.turns {
            best = candidate;
        }
        found += 1;
    }
    Some(best)
}

/// One driver iteration: search, commit, rebuild.
fn next_path_set(colony: &mut Colony) -> Option<PathSet> {
    if !search::shortest_augmenting_path(colony) {
        return None;
    }
    residual::commit_path(colony);
    Some(paths::collect(colony))
}
