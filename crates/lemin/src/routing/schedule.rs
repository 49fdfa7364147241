use std::io::{self, Write};

use super::colony::Colony;
use super::paths::PathSet;

/// Position of a launched ant: the path it rides and the index of the next
/// room it will enter. Cleared once the ant reaches the end.
#[derive(Clone, Copy)]
struct Cursor {
    path: usize,
    next: usize,
}

/// Emit the turn-by-turn movement trace: exactly `set.turns` lines, each a
/// space-separated run of `L<id>-<room>` tokens naming where each moving
/// ant ends the turn.
///
/// Within a turn, ants already in transit move first in ascending id order,
/// then new ants launch in path order — one per path per turn, except a
/// direct start→end path, which drains its whole quota at once since the
/// end room absorbs any number of ants.
pub fn write_trace<W: Write>(out: &mut W, colony: &Colony, set: &PathSet) -> io::Result<()> {
    let ants = colony.ants as usize;
    let mut quotas = set.assignments(colony.ants);
    let mut cursors: Vec<Option<Cursor>> = Vec::new();
    let mut first_moving = 0;

    for _ in 0..set.turns {
        let mut tokens: Vec<String> = Vec::new();

        while first_moving < cursors.len() && cursors[first_moving].is_none() {
            first_moving += 1;
        }
        for id in first_moving..cursors.len() {
            let Some(cursor) = cursors[id] else { continue };
            let rooms = &set.paths[cursor.path];
            tokens.push(format!("L{}-{}", id + 1, colony.name(rooms[cursor.next])));
            cursors[id] = if cursor.next + 1 < rooms.len() {
                Some(Cursor {
                    path: cursor.path,
                    next: cursor.next + 1,
                })
            } else {
                None
            };
        }

        for (i, rooms) in set.paths.iter().enumerate() {
            if cursors.len() >= ants {
                break;
            }
            while quotas[i] > 0 && cursors.len() < ants {
                quotas[i] -= 1;
                let id = cursors.len() + 1;
                tokens.push(format!("L{}-{}", id, colony.name(rooms[1])));
                if rooms.len() > 2 {
                    cursors.push(Some(Cursor { path: i, next: 2 }));
                    break;
                }
                // Stepped straight into the end room.
                cursors.push(None);
            }
        }

        writeln!(out, "{}", tokens.join(" "))?;
    }
    Ok(())
}
