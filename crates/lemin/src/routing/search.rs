use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::colony::{Colony, RoomId, INFINITY};

/// Entry in the search frontier.
/// BinaryHeap is a max-heap, so the ordering is reversed (lowest cost =
/// highest priority); equal costs fall back to room id so pops are
/// deterministic across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueEntry {
    cost: i64,
    room: RoomId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then(other.room.cmp(&self.room))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One pass of the modified Dijkstra over the residual graph.
///
/// On return the room table carries the pass's final costs; if an
/// augmenting path exists, its residual predecessors are encoded in the
/// `edge_in`/`edge_out` fields and `true` is returned. Prices are refreshed
/// from the final costs either way, so the next pass again faces only
/// non-negative reduced costs.
pub(super) fn shortest_augmenting_path(colony: &mut Colony) -> bool {
    reset(colony);
    let mut frontier = BinaryHeap::with_capacity(colony.room_count());
    frontier.push(QueueEntry {
        cost: 0,
        room: colony.start,
    });

    // Stale entries are left in the heap; the relaxation guards reject
    // anything the current costs cannot improve, so re-popping is harmless.
    while let Some(entry) = frontier.pop() {
        let v = entry.room;
        for i in 0..colony.neighbors(v).len() {
            let w = colony.neighbors(v)[i];
            relax_edge(colony, &mut frontier, v, w);
        }
    }

    set_prices(colony);
    colony.rooms[colony.end].edge_in.is_some()
}

fn reset(colony: &mut Colony) {
    for room in &mut colony.rooms {
        room.edge_in = None;
        room.edge_out = None;
        room.cost_in = INFINITY;
        room.cost_out = INFINITY;
    }
    let start = colony.start;
    colony.rooms[start].cost_in = 0;
    colony.rooms[start].cost_out = 0;
}

/// Relax the tunnel v → w under the residual rules.
///
/// Forbidden outright: leaving the end room, entering the start room, and
/// re-walking a committed edge in its committed direction. Otherwise the
/// move is either a reverse residual (v's committed predecessor is w, so
/// walking back refunds that edge's unit cost and lands on w's out side) or
/// a plain forward hop onto w's in side. Both compare in reduced costs.
fn relax_edge(
    colony: &mut Colony,
    frontier: &mut BinaryHeap<QueueEntry>,
    v: RoomId,
    w: RoomId,
) {
    if v == colony.end || w == colony.start || colony.rooms[w].prev == Some(v) {
        return;
    }
    let from = colony.rooms[v];
    if from.prev == Some(w) {
        if from.cost_in >= INFINITY {
            return;
        }
        let relaxed = from.cost_in - 1 + from.price_in - colony.rooms[w].price_out;
        if relaxed < colony.rooms[w].cost_out {
            let to = &mut colony.rooms[w];
            to.edge_out = Some(v);
            to.cost_out = relaxed;
            frontier.push(QueueEntry {
                cost: relaxed,
                room: w,
            });
            relax_hidden_edge(colony, frontier, w);
        }
    } else {
        if from.cost_out >= INFINITY {
            return;
        }
        let to = &mut colony.rooms[w];
        if from.cost_out + from.price_out + 1 < to.cost_in + to.price_in {
            let relaxed = from.cost_out + 1 + from.price_out - to.price_in;
            to.edge_in = Some(v);
            to.cost_in = relaxed;
            frontier.push(QueueEntry {
                cost: relaxed,
                room: w,
            });
            relax_hidden_edge(colony, frontier, w);
        }
    }
}

/// Relax the zero-cost internal edge of w.
///
/// A split room lets cost flow out→in only (its forward interior belongs to
/// the committed path); an unsplit room lets it flow in→out, modelling a
/// free pass through the room.
fn relax_hidden_edge(colony: &mut Colony, frontier: &mut BinaryHeap<QueueEntry>, w: RoomId) {
    let (start, end) = (colony.start, colony.end);
    let room = &mut colony.rooms[w];
    if room.split && w != start && room.cost_in > room.cost_out + room.price_out - room.price_in {
        room.edge_in = room.edge_out;
        room.cost_in = room.cost_out + room.price_out - room.price_in;
        if room.cost_in != room.cost_out {
            frontier.push(QueueEntry {
                cost: room.cost_in,
                room: w,
            });
        }
    }
    if !room.split && w != end && room.cost_out > room.cost_in + room.price_in - room.price_out {
        room.edge_out = room.edge_in;
        room.cost_out = room.cost_in + room.price_in - room.price_out;
        if room.cost_in != room.cost_out {
            frontier.push(QueueEntry {
                cost: room.cost_out,
                room: w,
            });
        }
    }
}

/// Carry this pass's final costs into the next pass's potentials.
fn set_prices(colony: &mut Colony) {
    for room in &mut colony.rooms {
        room.price_in = room.cost_in;
        room.price_out = room.cost_out;
    }
}
