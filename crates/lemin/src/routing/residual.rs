use super::colony::{Colony, RoomId};

/// Fold the freshly found augmenting path into the committed set.
///
/// Walks the residual predecessors from end back to start. A forward hop
/// claims its room (points `prev` at the predecessor and splits it); a
/// reverse hop cancels a previously committed edge, and a run of two or
/// more reverse hops releases the rooms strung between them. The room
/// adjacent to end is recorded as this search's exit.
pub(super) fn commit_path(colony: &mut Colony) {
    let Some(first) = colony.rooms[colony.end].edge_in else {
        return;
    };
    colony.exits.push(first);

    let start = colony.start;
    let mut w = colony.end;
    let mut v = first;
    let mut cancelling = false;
    while w != start {
        if colony.rooms[v].prev == Some(w) {
            // v→w undoes the committed edge w→v.
            if cancelling {
                release(colony, w);
            }
            cancelling = true;
            w = v;
            v = match colony.rooms[w].edge_in {
                Some(next) => next,
                None => break,
            };
        } else {
            colony.rooms[w].prev = Some(v);
            claim(colony, w);
            cancelling = false;
            w = v;
            v = match colony.rooms[w].edge_out {
                Some(next) => next,
                None => break,
            };
        }
    }
}

/// Mark w as occupied by a committed path. Start and end are never split.
fn claim(colony: &mut Colony, w: RoomId) {
    if w != colony.start && w != colony.end {
        colony.rooms[w].split = true;
    }
}

/// Return w to the free pool once its committed edges cancelled out.
fn release(colony: &mut Colony, w: RoomId) {
    colony.rooms[w].split = false;
    colony.rooms[w].prev = None;
}
