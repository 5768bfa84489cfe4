use std::collections::{HashMap, HashSet};

use crate::coordinates::Coordinates;
use crate::graphs::Graph;

/// Adjacency list: each vertex maps its neighbours to the wall flag of the
/// shared edge. Storage grows with the number of edges, never with the square
/// of the vertex count.
#[derive(Debug, Default, Clone)]
pub struct EdgeListGraph {
    vertices: HashSet<Coordinates>,
    edges: HashMap<Coordinates, HashMap<Coordinates, bool>>,
}

impl EdgeListGraph {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn wall_of(&self, one: Coordinates, two: Coordinates) -> Option<bool> {
        self.edges
            .get(&one)
            .and_then(|neighbours| neighbours.get(&two))
            .copied()
    }
}

impl Graph for EdgeListGraph {
    fn add_vertex(&mut self, label: Coordinates) {
        if self.vertices.insert(label) {
            self.edges.insert(label, HashMap::new());
        }
    }

    fn add_edge(&mut self, one: Coordinates, two: Coordinates, add_wall: bool) -> bool {
        if !self.has_vertex(one) || !self.has_vertex(two) || !one.is_adjacent(&two) {
            log::trace!("rejected edge {} - {}", one, two);
            return false;
        }
        if self.has_edge(one, two) {
            return false;
        }

        // both vertices are present, so both neighbour maps exist
        if let Some(neighbours) = self.edges.get_mut(&one) {
            neighbours.insert(two, add_wall);
        }
        if let Some(neighbours) = self.edges.get_mut(&two) {
            neighbours.insert(one, add_wall);
        }

        true
    }

    fn update_wall(&mut self, one: Coordinates, two: Coordinates, wall_status: bool) -> bool {
        if !self.has_edge(one, two) {
            return false;
        }

        for (from, to) in [(one, two), (two, one)].iter() {
            if let Some(wall) = self.edges.get_mut(from).and_then(|n| n.get_mut(to)) {
                *wall = wall_status;
            }
        }

        true
    }

    fn remove_edge(&mut self, one: Coordinates, two: Coordinates) -> bool {
        if !self.has_edge(one, two) {
            return false;
        }

        if let Some(neighbours) = self.edges.get_mut(&one) {
            neighbours.remove(&two);
        }
        if let Some(neighbours) = self.edges.get_mut(&two) {
            neighbours.remove(&one);
        }

        true
    }

    fn has_vertex(&self, label: Coordinates) -> bool {
        self.vertices.contains(&label)
    }

    fn has_edge(&self, one: Coordinates, two: Coordinates) -> bool {
        self.wall_of(one, two).is_some()
    }

    fn get_wall_status(&self, one: Coordinates, two: Coordinates) -> bool {
        self.wall_of(one, two).unwrap_or(false)
    }

    fn neighbours(&self, label: Coordinates) -> Vec<Coordinates> {
        match self.edges.get(&label) {
            Some(neighbours) => neighbours.keys().copied().collect(),
            None => Vec::new(),
        }
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Vec<Coordinates> {
        self.vertices.iter().copied().collect()
    }
}

#[cfg(test)]
mod test_edge_list {
    use super::*;

    fn c(row: i32, col: i32) -> Coordinates {
        Coordinates::new(row, col)
    }

    #[test]
    fn it_works() {
        let mut graph = EdgeListGraph::new();
        graph.add_vertices(&[c(0, 0), c(0, 1), c(1, 0), c(1, 1)]);

        assert!(graph.add_edge(c(0, 0), c(0, 1), true));
        assert!(graph.add_edge(c(0, 0), c(1, 0), false));

        // duplicate, non adjacent, missing vertex
        assert!(!graph.add_edge(c(0, 1), c(0, 0), false));
        assert!(!graph.add_edge(c(0, 0), c(1, 1), false));
        assert!(!graph.add_edge(c(0, 0), c(-1, 0), false));

        // duplicate add left the wall alone
        assert!(graph.get_wall_status(c(0, 1), c(0, 0)));

        assert!(graph.update_wall(c(0, 1), c(0, 0), false));
        assert!(!graph.get_wall_status(c(0, 0), c(0, 1)));
        assert!(!graph.update_wall(c(1, 1), c(0, 1), true));

        let mut neighbours = graph.neighbours(c(0, 0));
        neighbours.sort();
        assert_eq!(neighbours, vec![c(0, 1), c(1, 0)]);

        assert!(graph.remove_edge(c(1, 0), c(0, 0)));
        assert!(!graph.remove_edge(c(1, 0), c(0, 0)));
        assert!(!graph.has_edge(c(0, 0), c(1, 0)));
        assert!(graph.neighbours(c(1, 0)).is_empty());
    }

    #[test]
    fn queries_on_missing_vertices() {
        let graph = EdgeListGraph::new();

        assert!(!graph.has_vertex(c(0, 0)));
        assert!(!graph.has_edge(c(0, 0), c(0, 1)));
        assert!(!graph.get_wall_status(c(0, 0), c(0, 1)));
        assert!(graph.neighbours(c(0, 0)).is_empty());
    }

    #[test]
    fn re_adding_vertex_keeps_edges() {
        let mut graph = EdgeListGraph::new();
        graph.add_vertices(&[c(3, 3), c(3, 4)]);
        assert!(graph.add_edge(c(3, 3), c(3, 4), true));

        graph.add_vertex(c(3, 3));

        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.has_edge(c(3, 4), c(3, 3)));
        assert!(graph.get_wall_status(c(3, 3), c(3, 4)));
    }
}
