use std::fmt;

/// A cell position in the maze. Rows and columns may be negative so that
/// the ring of cells just outside the grid can be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    row: i32,
    col: i32,
}

impl Coordinates {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.col
    }

    /// Four-directional adjacency, i.e. manhattan distance of exactly one.
    #[inline]
    pub fn is_adjacent(&self, other: &Coordinates) -> bool {
        let d_row = (i64::from(self.row) - i64::from(other.row)).abs();
        let d_col = (i64::from(self.col) - i64::from(other.col)).abs();
        d_row + d_col == 1
    }

    /// `None` when the step leaves the `i32` range.
    #[inline]
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Coordinates> {
        Some(Coordinates::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from((row, col): (i32, i32)) -> Self {
        Coordinates::new(row, col)
    }
}

impl From<[i32; 2]> for Coordinates {
    fn from([row, col]: [i32; 2]) -> Self {
        Coordinates::new(row, col)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
