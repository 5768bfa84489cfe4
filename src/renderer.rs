use crate::coordinates::Coordinates;
use crate::maze::Maze;

const CORNER: char = '+';
const H_WALL: &str = "---";
const H_GAP: &str = "   ";
const V_WALL: char = '|';
const V_GAP: char = ' ';

/// Draws a maze as ascii art. Each cell is `3 * cell_size` characters wide
/// and `cell_size` lines tall, openings in the outer wall show up as gaps.
pub struct TextRenderer {
    cell_size: usize,
}

impl TextRenderer {
    pub fn new(cell_size: usize) -> Self {
        Self {
            cell_size: cell_size.max(1),
        }
    }

    pub fn render(&self, maze: &Maze) -> String {
        let (rows, columns) = maze.extents();
        let mut out = String::new();

        for row in 0..=rows {
            // wall line above `row`
            for col in 0..columns {
                out.push(CORNER);
                let above = Coordinates::new(row - 1, col);
                let below = Coordinates::new(row, col);
                let segment = if maze.has_wall(above, below) {
                    H_WALL
                } else {
                    H_GAP
                };
                for _ in 0..self.cell_size {
                    out.push_str(segment);
                }
            }
            out.push(CORNER);
            out.push('\n');

            if row == rows {
                break;
            }

            let mut line = String::new();
            for col in 0..=columns {
                let left = Coordinates::new(row, col - 1);
                let right = Coordinates::new(row, col);
                line.push(if maze.has_wall(left, right) {
                    V_WALL
                } else {
                    V_GAP
                });
                if col < columns {
                    for _ in 0..self.cell_size {
                        line.push_str(H_GAP);
                    }
                }
            }
            for _ in 0..self.cell_size {
                out.push_str(&line);
                out.push('\n');
            }
        }

        out
    }
}
