use smallvec::SmallVec;

/// A grid cell, 0-indexed from the top left corner of the maze.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    pub fn new(row: usize, column: usize) -> Cell {
        Cell {
            row: row,
            column: column,
        }
    }

    /// Creates a new `Cell` offset 1 cell away in the given direction.
    /// Returns None if the cell would have a negative row or column. The upper bounds are
    /// not known here, the maze dimensions decide those.
    pub fn offset(&self, direction: Direction) -> Option<Cell> {
        let (row, column) = (self.row, self.column);
        match direction {
            Direction::Up => {
                if row > 0 {
                    Some(Cell { row: row - 1, ..*self })
                } else {
                    None
                }
            }
            Direction::Right => Some(Cell { column: column + 1, ..*self }),
            Direction::Down => Some(Cell { row: row + 1, ..*self }),
            Direction::Left => {
                if column > 0 {
                    Some(Cell { column: column - 1, ..*self })
                } else {
                    None
                }
            }
        }
    }
}

pub type CellSmallVec = SmallVec<[Cell; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// Neighbour candidates are always enumerated in this order before any shuffling.
pub const DIRECTIONS: [Direction; 4] = [Direction::Up,
                                        Direction::Right,
                                        Direction::Down,
                                        Direction::Left];
