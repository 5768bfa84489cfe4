use crate::coordinates::Coordinates;
use crate::generators::MazeGenerator;
use crate::maze::Maze;
use rand::prelude::*;

/// Recursive backtracker, driven by an explicit stack so that large grids
/// can't overflow the call stack.
///
/// The first step walls off every cell and picks the start cell. Every step
/// after that either carves into a random unvisited neighbour of the cell on
/// top of the stack, or pops that cell when it has none left. Generation is
/// done once every cell has been visited, at which point the open passages
/// form a spanning tree over the grid.
pub struct RecurBackGenerator {
    rng: StdRng,
    start: Option<Coordinates>,

    stack: Vec<Coordinates>,
    visited: Vec<bool>,
    visited_count: usize,
    columns: usize,

    started: bool,
    done: bool,
}

impl RecurBackGenerator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Same seed, same maze, whichever graph backend the maze uses.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            start: None,
            stack: Vec::new(),
            visited: Vec::new(),
            visited_count: 0,
            columns: 0,
            started: false,
            done: false,
        }
    }

    /// Starts carving from `start` instead of a random cell. Ignored when the
    /// cell is outside the maze.
    pub fn with_start(mut self, start: Coordinates) -> Self {
        self.start = Some(start);
        self
    }

    #[inline]
    fn index_of(&self, coords: Coordinates) -> usize {
        coords.row() as usize * self.columns + coords.col() as usize
    }

    fn visit(&mut self, coords: Coordinates) {
        let index = self.index_of(coords);
        self.visited[index] = true;
        self.visited_count += 1;
        self.stack.push(coords);
    }

    fn begin(&mut self, maze: &mut Maze) {
        self.started = true;
        maze.init_cells(true);

        let cells = maze.cell_count();
        self.columns = maze.columns();
        self.visited = vec![false; cells];
        self.visited_count = 0;
        self.stack = Vec::with_capacity(cells);

        if cells == 0 {
            self.done = true;
            return;
        }

        let start = match self.start.filter(|start| maze.is_in_grid(*start)) {
            Some(start) => start,
            None => Coordinates::new(
                self.rng.gen_range(0, maze.rows()) as i32,
                self.rng.gen_range(0, maze.columns()) as i32,
            ),
        };
        log::debug!("carving {}x{} maze from {}", maze.rows(), maze.columns(), start);

        self.visit(start);
        self.done = self.visited_count == cells;
    }
}

impl Default for RecurBackGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MazeGenerator for RecurBackGenerator {
    fn step_generation(&mut self, maze: &mut Maze) {
        if self.done {
            return;
        }
        if !self.started {
            self.begin(maze);
            return;
        }

        let current = match self.stack.last() {
            Some(current) => *current,
            None => {
                self.done = true;
                return;
            }
        };

        let mut unvisited: Vec<Coordinates> = maze
            .neighbours(current)
            .into_iter()
            .filter(|neighbour| maze.is_in_grid(*neighbour))
            .filter(|neighbour| !self.visited[self.index_of(*neighbour)])
            .collect();
        // backends list neighbours in different orders
        unvisited.sort();

        match unvisited.choose(&mut self.rng).copied() {
            Some(next) => {
                maze.remove_wall(current, next);
                self.visit(next);

                if self.visited_count == self.visited.len() {
                    log::debug!("carved all {} cells", self.visited_count);
                    self.done = true;
                }
            }
            None => {
                self.stack.pop();
            }
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod test_recur_back {
    use super::*;
    use crate::graphs::GraphKind;

    #[test]
    fn single_cell_finishes_on_first_step() {
        let mut maze = Maze::new(1, 1, GraphKind::IncMat);
        let mut generator = RecurBackGenerator::with_seed(7);

        generator.step_generation(&mut maze);

        assert!(generator.is_done());
        assert_eq!(maze.graph().vertex_count(), 5);
        assert_eq!(maze.all_walls().len(), 4);
    }

    #[test]
    fn each_step_carves_or_backtracks() {
        let mut maze = Maze::new(3, 3, GraphKind::EdgeList);
        let mut generator = RecurBackGenerator::with_seed(11).with_start(Coordinates::new(1, 1));

        generator.step_generation(&mut maze);
        assert_eq!(generator.stack, vec![Coordinates::new(1, 1)]);
        assert_eq!(generator.visited_count, 1);

        let mut steps = 1;
        while !generator.is_done() {
            let before = (generator.stack.len(), generator.visited_count);
            generator.step_generation(&mut maze);
            let after = (generator.stack.len(), generator.visited_count);

            let carved = after == (before.0 + 1, before.1 + 1);
            let backtracked = after == (before.0 - 1, before.1);
            assert!(carved || backtracked);
            steps += 1;
        }

        assert_eq!(generator.visited_count, 9);
        assert!(steps >= 9);
    }

    #[test]
    fn first_carve_direction_depends_on_the_seed() {
        let start = Coordinates::new(1, 1);
        let mut firsts = Vec::new();

        for seed in 0..20 {
            let mut maze = Maze::new(3, 3, GraphKind::Array);
            let mut generator = RecurBackGenerator::with_seed(seed).with_start(start);
            generator.step_generation(&mut maze);
            generator.step_generation(&mut maze);

            let first = generator.stack[1];
            assert!(start.is_adjacent(&first));
            if !firsts.contains(&first) {
                firsts.push(first);
            }
        }

        assert!(firsts.len() > 1, "always carved towards {:?}", firsts);
    }

    #[test]
    fn start_outside_grid_falls_back_to_random_cell() {
        let mut maze = Maze::new(2, 3, GraphKind::Array);
        let mut generator = RecurBackGenerator::with_seed(3).with_start(Coordinates::new(-1, 0));

        generator.step_generation(&mut maze);

        let start = generator.stack[0];
        assert!(maze.is_in_grid(start));
    }
}
