pub mod recur_back;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coordinates::Coordinates;
use crate::graphs::ParseKindError;
use crate::maze::Maze;
use recur_back::RecurBackGenerator;

pub trait MazeGenerator {
    /// Advances generation by one carve or backtrack.
    fn step_generation(&mut self, maze: &mut Maze);

    fn generate_maze(&mut self, maze: &mut Maze) {
        loop {
            self.step_generation(maze);
            if self.is_done() {
                break;
            }
        }
    }

    fn is_done(&self) -> bool;

    /// Knocks down the outer wall at every entrance of the maze.
    fn add_entrances(&self, maze: &mut Maze) {
        let entrances = maze.entrances().to_vec();
        open_boundary(maze, &entrances);
    }

    /// Knocks down the outer wall at every exit of the maze.
    fn add_exits(&self, maze: &mut Maze) {
        let exits = maze.exits().to_vec();
        open_boundary(maze, &exits);
    }
}

fn open_boundary(maze: &mut Maze, openings: &[Coordinates]) {
    for coords in openings {
        match maze.boundary_opening(*coords) {
            Some((outside, inside)) => {
                if !maze.remove_wall(outside, inside) {
                    log::warn!("no boundary edge {} - {} to open", outside, inside);
                }
            }
            None => log::warn!("{} is not a boundary opening", coords),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
    #[serde(rename = "recur")]
    RecurBack,
}

impl GeneratorKind {
    pub fn tag(&self) -> &'static str {
        match self {
            GeneratorKind::RecurBack => "recur",
        }
    }

    pub fn build(&self, seed: Option<u64>) -> Box<dyn MazeGenerator> {
        match self {
            GeneratorKind::RecurBack => Box::new(match seed {
                Some(seed) => RecurBackGenerator::with_seed(seed),
                None => RecurBackGenerator::new(),
            }),
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for GeneratorKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recur" => Ok(GeneratorKind::RecurBack),
            _ => Err(ParseKindError::new("generator", s)),
        }
    }
}
