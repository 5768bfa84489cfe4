pub mod array;
pub mod edge_list;
pub mod inc_mat;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinates;
use array::ArrayGraph;
use edge_list::EdgeListGraph;
use inc_mat::IncMatGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// (row, column) step, rows grow southwards
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The neighbouring position, `None` past the edge of the `i32` range
    #[inline]
    pub fn step(self, from: Coordinates) -> Option<Coordinates> {
        let (d_row, d_col) = self.delta();
        from.offset(d_row, d_col)
    }
}

/// Undirected graph over grid cells where every edge carries a wall flag.
///
/// `true` means the wall is up and the passage is blocked, `false` means the
/// passage is open. Edges only ever join grid-adjacent vertices that are both
/// present, and every mutation is applied to both directions of the edge.
pub trait Graph {
    /// Adds the vertex, does nothing if it is already present.
    fn add_vertex(&mut self, label: Coordinates);

    fn add_vertices(&mut self, labels: &[Coordinates]) {
        for label in labels {
            self.add_vertex(*label);
        }
    }

    /// Returns false if either vertex is missing, they aren't adjacent, or the
    /// edge already exists. An existing edge is never overwritten.
    fn add_edge(&mut self, one: Coordinates, two: Coordinates, add_wall: bool) -> bool;

    /// Returns false when there is no edge between the two vertices.
    fn update_wall(&mut self, one: Coordinates, two: Coordinates, wall_status: bool) -> bool;

    /// Returns false when there is no edge between the two vertices.
    fn remove_edge(&mut self, one: Coordinates, two: Coordinates) -> bool;

    fn has_vertex(&self, label: Coordinates) -> bool;

    fn has_edge(&self, one: Coordinates, two: Coordinates) -> bool;

    /// Wall flag of the edge, `false` if there is no edge at all. Check
    /// `has_edge` first when "no edge" and "open" need telling apart.
    fn get_wall_status(&self, one: Coordinates, two: Coordinates) -> bool;

    /// Every vertex joined to `label` by an edge, walled or not.
    fn neighbours(&self, label: Coordinates) -> Vec<Coordinates>;

    fn vertex_count(&self) -> usize;

    fn vertices(&self) -> Vec<Coordinates>;

    /// Each undirected edge once, smaller endpoint first.
    fn edges(&self) -> Vec<(Coordinates, Coordinates, bool)> {
        let mut edges = Vec::new();
        for vertex in self.vertices() {
            for neighbour in self.neighbours(vertex) {
                if vertex < neighbour {
                    edges.push((vertex, neighbour, self.get_wall_status(vertex, neighbour)));
                }
            }
        }

        edges
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphKind {
    #[serde(rename = "array")]
    Array,
    #[serde(rename = "edge-list")]
    EdgeList,
    #[serde(rename = "inc-mat")]
    IncMat,
}

impl GraphKind {
    pub const ALL: [GraphKind; 3] = [GraphKind::Array, GraphKind::EdgeList, GraphKind::IncMat];

    pub fn tag(&self) -> &'static str {
        match self {
            GraphKind::Array => "array",
            GraphKind::EdgeList => "edge-list",
            GraphKind::IncMat => "inc-mat",
        }
    }

    /// Builds an empty graph. Only the array backend uses the extents.
    pub fn build(&self, rows: usize, columns: usize) -> Box<dyn Graph> {
        match self {
            GraphKind::Array => Box::new(ArrayGraph::with_dims(rows, columns)),
            GraphKind::EdgeList => Box::new(EdgeListGraph::new()),
            GraphKind::IncMat => Box::new(IncMatGraph::new()),
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for GraphKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GraphKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| ParseKindError::new("data structure", s))
    }
}

/// An unknown backend or generator tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    what: &'static str,
    tag: String,
}

impl ParseKindError {
    pub fn new(what: &'static str, tag: &str) -> Self {
        Self {
            what,
            tag: tag.to_string(),
        }
    }
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} approach `{}`", self.what, self.tag)
    }
}

impl std::error::Error for ParseKindError {}
