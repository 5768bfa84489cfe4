use std::convert::TryFrom;
use std::fmt;

use crate::coordinates::Coordinates;
use crate::graphs::{Dimensions, Direction, Graph, GraphKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Entrances and exits have to sit on the outermost cells of the grid or
    /// one step outside of them, corners excluded.
    NotOnBoundary {
        coords: Coordinates,
        rows: usize,
        columns: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::NotOnBoundary {
                coords,
                rows,
                columns,
            } => write!(
                f,
                "{} is not on the boundary of a {}x{} maze",
                coords, rows, columns
            ),
        }
    }
}

impl std::error::Error for MazeError {}

/// A rows x columns grid of cells, stored as a wall graph.
///
/// Besides the cells themselves the graph holds a ring of vertices just
/// outside the grid, so an opening in the outer wall is simply an open edge
/// between a boundary cell and the ring.
pub struct Maze {
    dims: Dimensions,
    kind: GraphKind,

    // graph edges represent adjacency, their flag whether a wall stands there
    graph: Box<dyn Graph>,

    entrances: Vec<Coordinates>,
    exits: Vec<Coordinates>,
}

impl Maze {
    /// Creates the maze with an empty graph, cells are only populated by
    /// [`Maze::init_cells`].
    ///
    /// # Panics
    ///
    /// If `rows` or `columns` is past `i32::MAX`, the ring one step outside
    /// the grid would not be addressable.
    pub fn new(rows: usize, columns: usize, kind: GraphKind) -> Self {
        assert!(
            i32::try_from(rows).is_ok() && i32::try_from(columns).is_ok(),
            "a {}x{} maze does not fit i32 coordinates",
            rows,
            columns
        );

        Self {
            dims: Dimensions { rows, columns },
            kind,
            graph: kind.build(rows, columns),
            entrances: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// Adds every cell and the boundary ring, then joins each cell to its four
    /// neighbours with `add_wall` as the wall flag. Existing edges get their
    /// flag reset.
    pub fn init_cells(&mut self, add_wall: bool) {
        let (rows, columns) = self.extents();

        let cells: Vec<Coordinates> = (0..rows)
            .flat_map(|row| (0..columns).map(move |col| Coordinates::new(row, col)))
            .collect();
        self.graph.add_vertices(&cells);

        let mut ring = Vec::with_capacity(2 * (self.dims.rows + self.dims.columns));
        for col in 0..columns {
            ring.push(Coordinates::new(-1, col));
            ring.push(Coordinates::new(rows, col));
        }
        for row in 0..rows {
            ring.push(Coordinates::new(row, -1));
            ring.push(Coordinates::new(row, columns));
        }
        self.graph.add_vertices(&ring);

        for cell in cells.iter().copied() {
            for neighbour in Direction::ALL.iter().filter_map(|dir| dir.step(cell)) {
                if !self.graph.add_edge(cell, neighbour, add_wall) {
                    self.graph.update_wall(cell, neighbour, add_wall);
                }
            }
        }

        log::debug!(
            "initialised {}x{} {} maze, {} vertices",
            rows,
            columns,
            self.kind,
            self.graph.vertex_count()
        );
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.dims.columns
    }

    /// Rows and columns as coordinate values, checked in [`Maze::new`].
    #[inline]
    pub(crate) fn extents(&self) -> (i32, i32) {
        (self.dims.rows as i32, self.dims.columns as i32)
    }

    #[inline]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.dims.rows * self.dims.columns
    }

    pub fn graph(&self) -> &dyn Graph {
        self.graph.as_ref()
    }

    #[inline]
    pub fn is_in_grid(&self, coords: Coordinates) -> bool {
        coords.row() >= 0
            && coords.col() >= 0
            && (coords.row() as usize) < self.dims.rows
            && (coords.col() as usize) < self.dims.columns
    }

    /// True for the outermost cells of the grid and for the ring one step
    /// outside it, corners of the ring excluded.
    pub fn is_boundary(&self, coords: Coordinates) -> bool {
        self.boundary_opening(coords).is_some()
    }

    /// The (outside, inside) pair whose shared edge opens the outer wall at
    /// `coords`. Inside corner cells open north or south.
    pub fn boundary_opening(&self, coords: Coordinates) -> Option<(Coordinates, Coordinates)> {
        if self.is_in_grid(coords) {
            return Direction::ALL
                .iter()
                .filter_map(|dir| dir.step(coords))
                .find(|outside| !self.is_in_grid(*outside))
                .map(|outside| (outside, coords));
        }

        Direction::ALL
            .iter()
            .filter_map(|dir| dir.step(coords))
            .find(|inside| self.is_in_grid(*inside))
            .map(|inside| (coords, inside))
    }

    pub fn add_entrance(&mut self, coords: Coordinates) -> Result<(), MazeError> {
        self.check_boundary(coords)?;
        if !self.entrances.contains(&coords) {
            self.entrances.push(coords);
        }

        Ok(())
    }

    pub fn add_exit(&mut self, coords: Coordinates) -> Result<(), MazeError> {
        self.check_boundary(coords)?;
        if !self.exits.contains(&coords) {
            self.exits.push(coords);
        }

        Ok(())
    }

    fn check_boundary(&self, coords: Coordinates) -> Result<(), MazeError> {
        if self.is_boundary(coords) {
            Ok(())
        } else {
            Err(MazeError::NotOnBoundary {
                coords,
                rows: self.dims.rows,
                columns: self.dims.columns,
            })
        }
    }

    pub fn entrances(&self) -> &[Coordinates] {
        &self.entrances
    }

    pub fn exits(&self) -> &[Coordinates] {
        &self.exits
    }

    pub fn add_wall(&mut self, one: Coordinates, two: Coordinates) -> bool {
        self.graph.update_wall(one, two, true)
    }

    pub fn remove_wall(&mut self, one: Coordinates, two: Coordinates) -> bool {
        self.graph.update_wall(one, two, false)
    }

    /// A missing edge counts as a wall here, nothing can pass through it.
    pub fn has_wall(&self, one: Coordinates, two: Coordinates) -> bool {
        !self.graph.has_edge(one, two) || self.graph.get_wall_status(one, two)
    }

    pub fn neighbours(&self, coords: Coordinates) -> Vec<Coordinates> {
        self.graph.neighbours(coords)
    }

    pub fn all_walls(&self) -> Vec<(Coordinates, Coordinates)> {
        self.graph
            .edges()
            .into_iter()
            .filter(|(_, _, wall)| *wall)
            .map(|(one, two, _)| (one, two))
            .collect()
    }
}
