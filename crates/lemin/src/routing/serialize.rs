use serde::Serialize;

use super::colony::{Colony, RoomId};
use super::paths::PathSet;

/// Canonical string form of a path: room names joined by `->`.
///
/// Path-set deduplication keys on this form, and the tests assert on it.
pub fn path_to_string(colony: &Colony, path: &[RoomId]) -> String {
    path.iter()
        .map(|&id| colony.name(id))
        .collect::<Vec<_>>()
        .join("->")
}

/// JSON-facing view of a computed plan, consumed by external visualisers.
#[derive(Debug, Serialize)]
pub struct PlanDump {
    pub ants: i64,
    pub turns: i64,
    pub paths: Vec<PathDump>,
}

#[derive(Debug, Serialize)]
pub struct PathDump {
    pub rooms: Vec<RoomDump>,
    pub ants: i64,
}

#[derive(Debug, Serialize)]
pub struct RoomDump {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

/// Flatten a plan for JSON output, pairing each path with its ant share and
/// each room with the coordinates its declaration carried (if any).
pub fn dump_plan(colony: &Colony, set: &PathSet) -> PlanDump {
    let shares = set.assignments(colony.ants);
    PlanDump {
        ants: colony.ants,
        turns: set.turns,
        paths: set
            .paths
            .iter()
            .zip(shares)
            .map(|(path, ants)| PathDump {
                rooms: path
                    .iter()
                    .map(|&id| RoomDump {
                        name: colony.name(id).to_string(),
                        x: colony.coords(id).map(|c| c.0),
                        y: colony.coords(id).map(|c| c.1),
                    })
                    .collect(),
                ants,
            })
            .collect(),
    }
}
