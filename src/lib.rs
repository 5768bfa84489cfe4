//! Grid mazes stored as wall graphs.
//!
//! A [`Maze`](maze::Maze) keeps its cells in one of three interchangeable
//! [`Graph`](graphs::Graph) backends, picked by [`GraphKind`](graphs::GraphKind):
//! a fixed size bit array, an adjacency list, or a growable adjacency matrix.
//! Generators only talk to the graph through the trait, so the same seed
//! carves the same maze whichever backend is active.

pub mod config;
pub mod coordinates;
pub mod generators;
pub mod graphs;
pub mod maze;
pub mod record;
pub mod renderer;

pub use coordinates::Coordinates;
pub use generators::{GeneratorKind, MazeGenerator};
pub use graphs::{Graph, GraphKind};
pub use maze::{Maze, MazeError};
