use std::collections::HashMap;

use crate::coordinates::Coordinates;
use crate::graphs::Graph;

/// `None` is no edge, `Some(wall)` is an edge carrying its wall flag
type EdgeCell = Option<bool>;

/// Dense adjacency matrix over an insertion ordered vertex list.
///
/// Adding a vertex widens every existing row by one cell and appends a fresh
/// row, so building a graph of `n` vertices costs O(n²). The matrix is grown
/// one vertex at a time on purpose; it is the cost the list backend avoids.
#[derive(Debug, Default, Clone)]
pub struct IncMatGraph {
    vertex_list: Vec<Coordinates>,
    vertex_index: HashMap<Coordinates, usize>,
    edge_matrix: Vec<Vec<EdgeCell>>,
}

impl IncMatGraph {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn indices_of(&self, one: Coordinates, two: Coordinates) -> Option<(usize, usize)> {
        let i = *self.vertex_index.get(&one)?;
        let j = *self.vertex_index.get(&two)?;
        Some((i, j))
    }

    #[inline]
    fn cell(&self, one: Coordinates, two: Coordinates) -> EdgeCell {
        self.indices_of(one, two)
            .and_then(|(i, j)| self.edge_matrix[i][j])
    }

    #[inline]
    fn set_cell(&mut self, i: usize, j: usize, cell: EdgeCell) {
        self.edge_matrix[i][j] = cell;
        self.edge_matrix[j][i] = cell;
    }
}

impl Graph for IncMatGraph {
    fn add_vertex(&mut self, label: Coordinates) {
        if self.vertex_index.contains_key(&label) {
            return;
        }

        self.vertex_index.insert(label, self.vertex_list.len());
        self.vertex_list.push(label);

        let n_vertices = self.vertex_list.len();
        for row in self.edge_matrix.iter_mut() {
            row.push(None);
        }
        self.edge_matrix.push(vec![None; n_vertices]);
    }

    fn add_edge(&mut self, one: Coordinates, two: Coordinates, add_wall: bool) -> bool {
        if !one.is_adjacent(&two) {
            log::trace!("rejected edge {} - {}", one, two);
            return false;
        }

        match self.indices_of(one, two) {
            Some((i, j)) if self.edge_matrix[i][j].is_none() => {
                self.set_cell(i, j, Some(add_wall));
                true
            }
            _ => false,
        }
    }

    fn update_wall(&mut self, one: Coordinates, two: Coordinates, wall_status: bool) -> bool {
        match self.indices_of(one, two) {
            Some((i, j)) if self.edge_matrix[i][j].is_some() => {
                self.set_cell(i, j, Some(wall_status));
                true
            }
            _ => false,
        }
    }

    fn remove_edge(&mut self, one: Coordinates, two: Coordinates) -> bool {
        match self.indices_of(one, two) {
            Some((i, j)) if self.edge_matrix[i][j].is_some() => {
                self.set_cell(i, j, None);
                true
            }
            _ => false,
        }
    }

    fn has_vertex(&self, label: Coordinates) -> bool {
        self.vertex_index.contains_key(&label)
    }

    fn has_edge(&self, one: Coordinates, two: Coordinates) -> bool {
        self.cell(one, two).is_some()
    }

    fn get_wall_status(&self, one: Coordinates, two: Coordinates) -> bool {
        self.cell(one, two).unwrap_or(false)
    }

    /// Scans the whole row, O(n) whatever the degree.
    fn neighbours(&self, label: Coordinates) -> Vec<Coordinates> {
        let index = match self.vertex_index.get(&label) {
            Some(index) => *index,
            None => return Vec::new(),
        };

        self.edge_matrix[index]
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(j, _)| self.vertex_list[j])
            .collect()
    }

    fn vertex_count(&self) -> usize {
        self.vertex_list.len()
    }

    fn vertices(&self) -> Vec<Coordinates> {
        self.vertex_list.clone()
    }
}
