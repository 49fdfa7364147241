use std::collections::HashMap;

use crate::parser::FarmFile;

/// Index of a room in the colony's dense room table.
pub type RoomId = usize;

/// Cost treated as unreachable. Large enough that the sum of any two cost
/// or price values still fits an i64.
pub(crate) const INFINITY: i64 = 1 << 60;

/// Per-room routing state, mutated by the search and the residual updater.
///
/// `cost_*` and `edge_*` belong to the current search pass and are reset
/// before each one; `prev`, `split` and the prices persist across passes
/// and encode the committed path set and its potentials.
#[derive(Debug, Clone, Copy)]
pub struct Room {
    /// Predecessor on a committed path, pointing toward start.
    pub prev: Option<RoomId>,
    /// Predecessor of the best inbound residual edge found this pass.
    pub edge_in: Option<RoomId>,
    /// Predecessor of the best outbound residual edge found this pass.
    pub edge_out: Option<RoomId>,
    pub cost_in: i64,
    pub cost_out: i64,
    /// Potentials carried over from the previous pass; they keep every
    /// residual edge at a non-negative reduced cost.
    pub price_in: i64,
    pub price_out: i64,
    /// True while the room lies on a committed path and is treated as an
    /// in-half and an out-half joined by a zero-cost forward-only edge.
    pub split: bool,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            prev: None,
            edge_in: None,
            edge_out: None,
            cost_in: INFINITY,
            cost_out: INFINITY,
            price_in: 0,
            price_out: 0,
            split: false,
        }
    }
}

/// The farm graph: rooms in a dense arena addressed by [`RoomId`], with the
/// name↔id mapping used only at the parser and output boundaries.
pub struct Colony {
    names: Vec<String>,
    index: HashMap<String, RoomId>,
    adjacency: Vec<Vec<RoomId>>,
    coords: Vec<Option<(i64, i64)>>,
    pub(crate) rooms: Vec<Room>,
    pub start: RoomId,
    pub end: RoomId,
    pub ants: i64,
    /// Rooms adjacent to end that terminate committed paths; one entry per
    /// successful search, duplicates possible until path collection.
    pub(crate) exits: Vec<RoomId>,
}

impl Colony {
    /// Build the arena from a parsed farm file.
    ///
    /// Rooms are interned in first-appearance order (declarations first,
    /// then tunnel endpoints), so ids are stable for a given input.
    pub fn from_farm(farm: &FarmFile) -> Self {
        let mut colony = Self {
            names: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            coords: Vec::new(),
            rooms: Vec::new(),
            start: 0,
            end: 0,
            ants: farm.ants,
            exits: Vec::new(),
        };
        for decl in &farm.rooms {
            let id = colony.intern(&decl.name);
            colony.coords[id] = Some((decl.x, decl.y));
        }
        for (a, b) in &farm.tunnels {
            let a = colony.intern(a);
            let b = colony.intern(b);
            if a != b {
                colony.add_tunnel(a, b);
            }
        }
        colony.start = colony.intern(&farm.start);
        colony.end = colony.intern(&farm.end);
        colony
    }

    fn intern(&mut self, name: &str) -> RoomId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.rooms.len();
        self.index.insert(name.to_string(), id);
        self.names.push(name.to_string());
        self.adjacency.push(Vec::new());
        self.coords.push(None);
        self.rooms.push(Room::default());
        id
    }

    fn add_tunnel(&mut self, a: RoomId, b: RoomId) {
        if !self.adjacency[a].contains(&b) {
            self.adjacency[a].push(b);
            self.adjacency[b].push(a);
        }
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn name(&self, id: RoomId) -> &str {
        &self.names[id]
    }

    pub fn id(&self, name: &str) -> Option<RoomId> {
        self.index.get(name).copied()
    }

    pub fn neighbors(&self, id: RoomId) -> &[RoomId] {
        &self.adjacency[id]
    }

    pub fn has_tunnel(&self, a: RoomId, b: RoomId) -> bool {
        self.adjacency[a].contains(&b)
    }

    /// Declared coordinates of a room, if the input declared any.
    pub fn coords(&self, id: RoomId) -> Option<(i64, i64)> {
        self.coords[id]
    }
}
