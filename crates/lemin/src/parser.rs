use std::collections::HashSet;

use thiserror::Error;

/// Everything read from a farm description file.
#[derive(Debug, Clone, PartialEq)]
pub struct FarmFile {
    pub ants: i64,
    pub start: String,
    pub end: String,
    /// Rooms declared with coordinates. Tunnels may also name rooms that
    /// were never declared; those exist without coordinates.
    pub rooms: Vec<RoomDecl>,
    pub tunnels: Vec<(String, String)>,
}

/// A declared room with the coordinates visualisers use.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDecl {
    pub name: String,
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("error reading the ant count: the first line must be a positive integer")]
    AntCount,
    #[error("can't have more than one ##{0} directive")]
    DuplicateDirective(&'static str),
    #[error("{0} room is missing after its directive")]
    MissingEndpoint(&'static str),
    #[error("{0} room declaration is not correctly formatted")]
    MalformedEndpoint(&'static str),
    #[error("room names can't begin with 'L': {0:?}")]
    ReservedName(String),
    #[error("line {0} is not a room, a tunnel, or a comment")]
    MalformedLine(usize),
    #[error("wrong start/end room: they must name two distinct rooms")]
    IdenticalEndpoints,
    #[error("can't find linked rooms")]
    NoTunnels,
    #[error("{0} room isn't linked to any tunnel")]
    UnlinkedEndpoint(&'static str),
}

/// Parse a farm description.
///
/// Line 1 is the ant count. After that, room declarations (`name x y`),
/// `##start`/`##end` directives (each naming the next non-comment room
/// declaration), `#` comments and blank lines may appear in any order until
/// tunnel lines (`a-b`) take over; in practice the kinds may interleave.
/// Self-loop tunnels are dropped and duplicate tunnels collapse to one.
pub fn parse(input: &str) -> Result<FarmFile, ParseError> {
    let lines: Vec<&str> = input.trim().lines().map(str::trim).collect();
    let Some((&first, rest)) = lines.split_first() else {
        return Err(ParseError::AntCount);
    };
    let ants: i64 = first.parse().map_err(|_| ParseError::AntCount)?;
    if ants < 1 {
        return Err(ParseError::AntCount);
    }

    let mut start: Option<String> = None;
    let mut end: Option<String> = None;
    let mut rooms: Vec<RoomDecl> = Vec::new();
    let mut tunnels: Vec<(String, String)> = Vec::new();
    let mut seen_tunnels: HashSet<(String, String)> = HashSet::new();

    let mut i = 0;
    while i < rest.len() {
        let line = rest[i];
        // 1-based position in the file; the ant count occupies line 1.
        let line_no = i + 2;
        i += 1;

        if line == "##start" || line == "##end" {
            let which = if line == "##start" { "start" } else { "end" };
            let slot = if which == "start" { &mut start } else { &mut end };
            if slot.is_some() {
                return Err(ParseError::DuplicateDirective(which));
            }
            let decl = endpoint_decl(which, rest, &mut i)?;
            *slot = Some(decl.name.clone());
            rooms.push(decl);
            continue;
        }
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with('L') {
            let name = line.split(['-', ' ', '\t']).next().unwrap_or(line);
            return Err(ParseError::ReservedName(name.to_string()));
        }
        if let Some(decl) = room_decl(line) {
            rooms.push(decl);
            continue;
        }
        if let Some((a, b)) = tunnel_decl(line) {
            if a == b {
                continue;
            }
            let key = if a < b {
                (a.clone(), b.clone())
            } else {
                (b.clone(), a.clone())
            };
            if seen_tunnels.insert(key) {
                tunnels.push((a, b));
            }
            continue;
        }
        return Err(ParseError::MalformedLine(line_no));
    }

    let Some(start) = start else {
        return Err(ParseError::MissingEndpoint("start"));
    };
    let Some(end) = end else {
        return Err(ParseError::MissingEndpoint("end"));
    };
    if start == end {
        return Err(ParseError::IdenticalEndpoints);
    }
    if tunnels.is_empty() {
        return Err(ParseError::NoTunnels);
    }
    for (which, room) in [("start", &start), ("end", &end)] {
        if !tunnels.iter().any(|(a, b)| a == room || b == room) {
            return Err(ParseError::UnlinkedEndpoint(which));
        }
    }

    Ok(FarmFile {
        ants,
        start,
        end,
        rooms,
        tunnels,
    })
}

/// Read the room declaration that a `##start`/`##end` directive names: the
/// next line that is neither blank nor a comment. Advances the cursor past
/// the consumed declaration.
fn endpoint_decl(
    which: &'static str,
    lines: &[&str],
    i: &mut usize,
) -> Result<RoomDecl, ParseError> {
    while *i < lines.len() {
        let line = lines[*i];
        if line.is_empty() || (line.starts_with('#') && line != "##start" && line != "##end") {
            *i += 1;
            continue;
        }
        *i += 1;
        if line.starts_with('L') {
            return Err(ParseError::ReservedName(
                line.split_whitespace().next().unwrap_or(line).to_string(),
            ));
        }
        return room_decl(line).ok_or(ParseError::MalformedEndpoint(which));
    }
    Err(ParseError::MissingEndpoint(which))
}

/// Parse `name x y`; `None` when the line has a different shape.
fn room_decl(line: &str) -> Option<RoomDecl> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [name, x, y] = fields.as_slice() else {
        return None;
    };
    Some(RoomDecl {
        name: name.to_string(),
        x: x.parse().ok()?,
        y: y.parse().ok()?,
    })
}

/// Parse `a-b`; `None` when the line is not exactly two names joined by `-`.
fn tunnel_decl(line: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = line.split('-').collect();
    let [a, b] = parts.as_slice() else {
        return None;
    };
    if a.is_empty() || b.is_empty() || a.contains(char::is_whitespace) || b.contains(char::is_whitespace) {
        return None;
    }
    Some((a.to_string(), b.to_string()))
}
