const WORD_BYTES: usize = std::mem::size_of::<usize>();
const WORD_BITS: usize = WORD_BYTES * 8;

use std::convert::TryFrom;

use crate::coordinates::Coordinates;
use crate::graphs::{Dimensions, Direction, Graph};

/// Packs one flag per slot into words
#[derive(Debug, Clone)]
struct Bits {
    words: Vec<usize>,
}

impl Bits {
    fn with_len(len: usize) -> Self {
        Self {
            words: vec![0; len / WORD_BITS + 1],
        }
    }

    #[inline]
    fn is_set(&self, index: usize) -> bool {
        get_bit(self.words[index / WORD_BITS], index % WORD_BITS)
    }

    #[inline]
    fn set(&mut self, index: usize, on: bool) {
        let word = &mut self.words[index / WORD_BITS];
        *word = if on {
            set_bit(*word, index % WORD_BITS)
        } else {
            unset_bit(*word, index % WORD_BITS)
        };
    }

    fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }
}

/// Which of a slot's two outgoing edges an edge is stored in
#[derive(Debug, Clone, Copy)]
enum Side {
    South,
    East,
}

/// Fixed size grid store covering the maze plus its one cell boundary ring,
/// rows `-1..=rows` and columns `-1..=columns`.
///
/// Every slot owns the edge to its south and east neighbour, so an edge is
/// kept once, in the slot of its north/west endpoint. Coordinates outside the
/// extents can never be vertices.
#[derive(Debug, Clone)]
pub struct ArrayGraph {
    dims: Dimensions,

    present: Bits,
    south_edge: Bits,
    south_wall: Bits,
    east_edge: Bits,
    east_wall: Bits,
}

impl ArrayGraph {
    pub fn with_dims(rows: usize, columns: usize) -> Self {
        let slots = (rows + 2) * (columns + 2);
        Self {
            dims: Dimensions { rows, columns },
            present: Bits::with_len(slots),
            south_edge: Bits::with_len(slots),
            south_wall: Bits::with_len(slots),
            east_edge: Bits::with_len(slots),
            east_wall: Bits::with_len(slots),
        }
    }

    #[inline]
    fn index_of(&self, label: Coordinates) -> Option<usize> {
        let row = label.row().checked_add(1)?;
        let col = label.col().checked_add(1)?;
        if row < 0 || col < 0 {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        if row >= self.dims.rows + 2 || col >= self.dims.columns + 2 {
            return None;
        }

        Some(row * (self.dims.columns + 2) + col)
    }

    /// Slot and side holding the edge between two vertices
    fn edge_slot(&self, one: Coordinates, two: Coordinates) -> Option<(usize, Side)> {
        if !one.is_adjacent(&two) || !self.has_vertex(one) || !self.has_vertex(two) {
            return None;
        }

        let (first, second) = if one < two { (one, two) } else { (two, one) };
        let side = if second.row() > first.row() {
            Side::South
        } else {
            Side::East
        };

        self.index_of(first).map(|index| (index, side))
    }

    #[inline]
    fn edge_bits(&self, side: Side) -> (&Bits, &Bits) {
        match side {
            Side::South => (&self.south_edge, &self.south_wall),
            Side::East => (&self.east_edge, &self.east_wall),
        }
    }

    #[inline]
    fn edge_bits_mut(&mut self, side: Side) -> (&mut Bits, &mut Bits) {
        match side {
            Side::South => (&mut self.south_edge, &mut self.south_wall),
            Side::East => (&mut self.east_edge, &mut self.east_wall),
        }
    }

    fn edge_state(&self, one: Coordinates, two: Coordinates) -> Option<bool> {
        let (index, side) = self.edge_slot(one, two)?;
        let (edge, wall) = self.edge_bits(side);
        if edge.is_set(index) {
            Some(wall.is_set(index))
        } else {
            None
        }
    }
}

impl Graph for ArrayGraph {
    fn add_vertex(&mut self, label: Coordinates) {
        match self.index_of(label) {
            Some(index) => self.present.set(index, true),
            None => log::warn!(
                "{} lies outside the {}x{} array, ignoring",
                label,
                self.dims.rows,
                self.dims.columns
            ),
        }
    }

    fn add_edge(&mut self, one: Coordinates, two: Coordinates, add_wall: bool) -> bool {
        let (index, side) = match self.edge_slot(one, two) {
            Some(slot) => slot,
            None => {
                log::trace!("rejected edge {} - {}", one, two);
                return false;
            }
        };

        let (edge, wall) = self.edge_bits_mut(side);
        if edge.is_set(index) {
            return false;
        }
        edge.set(index, true);
        wall.set(index, add_wall);

        true
    }

    fn update_wall(&mut self, one: Coordinates, two: Coordinates, wall_status: bool) -> bool {
        let (index, side) = match self.edge_slot(one, two) {
            Some(slot) => slot,
            None => return false,
        };

        let (edge, wall) = self.edge_bits_mut(side);
        if !edge.is_set(index) {
            return false;
        }
        wall.set(index, wall_status);

        true
    }

    fn remove_edge(&mut self, one: Coordinates, two: Coordinates) -> bool {
        let (index, side) = match self.edge_slot(one, two) {
            Some(slot) => slot,
            None => return false,
        };

        let (edge, wall) = self.edge_bits_mut(side);
        if !edge.is_set(index) {
            return false;
        }
        edge.set(index, false);
        wall.set(index, false);

        true
    }

    fn has_vertex(&self, label: Coordinates) -> bool {
        self.index_of(label)
            .map_or(false, |index| self.present.is_set(index))
    }

    fn has_edge(&self, one: Coordinates, two: Coordinates) -> bool {
        self.edge_state(one, two).is_some()
    }

    fn get_wall_status(&self, one: Coordinates, two: Coordinates) -> bool {
        self.edge_state(one, two).unwrap_or(false)
    }

    fn neighbours(&self, label: Coordinates) -> Vec<Coordinates> {
        Direction::ALL
            .iter()
            .filter_map(|dir| dir.step(label))
            .filter(|neighbour| self.has_edge(label, *neighbour))
            .collect()
    }

    fn vertex_count(&self) -> usize {
        self.present.count_ones()
    }

    fn vertices(&self) -> Vec<Coordinates> {
        let rows = i32::try_from(self.dims.rows).unwrap_or(i32::MAX);
        let columns = i32::try_from(self.dims.columns).unwrap_or(i32::MAX);

        let mut vertices = Vec::new();
        for row in -1..=rows {
            for col in -1..=columns {
                let label = Coordinates::new(row, col);
                if self.has_vertex(label) {
                    vertices.push(label);
                }
            }
        }

        vertices
    }
}

#[inline(always)]
fn get_bit(n: usize, k: usize) -> bool {
    (n >> k) & 1 != 0
}

#[inline(always)]
fn set_bit(n: usize, k: usize) -> usize {
    n | (1 << k)
}

#[inline(always)]
fn unset_bit(n: usize, k: usize) -> usize {
    n & !(1 << k)
}

#[cfg(test)]
mod test_array {
    use super::*;

    fn c(row: i32, col: i32) -> Coordinates {
        Coordinates::new(row, col)
    }

    #[test]
    fn it_works() {
        let mut graph = ArrayGraph::with_dims(2, 2);
        graph.add_vertices(&[c(0, 0), c(0, 1), c(1, 0), c(1, 1)]);

        assert!(graph.add_edge(c(0, 0), c(0, 1), true));
        assert!(graph.add_edge(c(1, 0), c(0, 0), false));

        assert!(!graph.add_edge(c(0, 1), c(0, 0), false));
        assert!(!graph.add_edge(c(0, 0), c(1, 1), false));
        assert!(!graph.add_edge(c(0, 0), c(-1, 0), false));

        assert!(graph.get_wall_status(c(0, 1), c(0, 0)));
        assert!(graph.update_wall(c(0, 1), c(0, 0), false));
        assert!(!graph.get_wall_status(c(0, 0), c(0, 1)));
        assert!(!graph.update_wall(c(1, 1), c(0, 1), true));

        // south before east
        assert_eq!(graph.neighbours(c(0, 0)), vec![c(1, 0), c(0, 1)]);

        assert!(graph.remove_edge(c(1, 0), c(0, 0)));
        assert!(!graph.remove_edge(c(1, 0), c(0, 0)));
        assert!(!graph.has_edge(c(0, 0), c(1, 0)));
    }

    #[test]
    fn boundary_ring_is_addressable() {
        let mut graph = ArrayGraph::with_dims(3, 4);
        graph.add_vertices(&[c(-1, 0), c(0, 0), c(3, 3), c(2, 3), c(1, 4), c(1, 3)]);

        assert_eq!(graph.vertex_count(), 6);
        assert!(graph.add_edge(c(-1, 0), c(0, 0), true));
        assert!(graph.add_edge(c(2, 3), c(3, 3), true));
        assert!(graph.add_edge(c(1, 4), c(1, 3), false));
        assert!(graph.get_wall_status(c(3, 3), c(2, 3)));
        assert!(!graph.get_wall_status(c(1, 3), c(1, 4)));
    }

    #[test]
    fn out_of_extent_vertices_are_ignored() {
        let mut graph = ArrayGraph::with_dims(2, 2);
        graph.add_vertex(c(-2, 0));
        graph.add_vertex(c(0, 3));
        graph.add_vertex(c(5, 5));

        assert_eq!(graph.vertex_count(), 0);
        assert!(!graph.has_vertex(c(-2, 0)));
        assert!(graph.neighbours(c(5, 5)).is_empty());
    }

    #[test]
    fn extreme_coordinates_are_outside_the_extents() {
        let mut graph = ArrayGraph::with_dims(2, 2);
        graph.add_vertices(&[c(0, 0), c(1, 0)]);

        for label in [c(i32::MAX, 0), c(0, i32::MAX), c(i32::MIN, i32::MIN)].iter() {
            assert_eq!(graph.index_of(*label), None);
            graph.add_vertex(*label);
            assert!(!graph.has_vertex(*label));
            assert!(graph.neighbours(*label).is_empty());
        }
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.vertices(), vec![c(0, 0), c(1, 0)]);
    }

    #[test]
    fn bits_span_words() {
        let mut bits = Bits::with_len(200);
        bits.set(0, true);
        bits.set(WORD_BITS - 1, true);
        bits.set(WORD_BITS, true);
        bits.set(199, true);

        assert!(bits.is_set(WORD_BITS - 1));
        assert!(bits.is_set(WORD_BITS));
        assert!(!bits.is_set(WORD_BITS + 1));
        assert_eq!(bits.count_ones(), 4);

        bits.set(WORD_BITS, false);
        assert!(!bits.is_set(WORD_BITS));
        assert_eq!(bits.count_ones(), 3);
    }
}
