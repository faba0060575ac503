use std::convert::TryFrom;

use crate::cells::{Cell, CellSmallVec, Direction, DIRECTIONS};
use crate::errors::MazeError;
use crate::random::RandomSource;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};


/// The validated size of a rectangular maze grid: at least one row and one column.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MazeDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl MazeDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<MazeDimensions, MazeError> {

        let RowsCount(row_count) = rows;
        let ColumnsCount(column_count) = columns;
        let cells_fit = row_count.checked_mul(column_count).is_some();

        if row_count == 0 || column_count == 0 || !cells_fit {
            return Err(MazeError::InvalidDimensions {
                rows: i64::try_from(row_count).unwrap_or(i64::max_value()),
                columns: i64::try_from(column_count).unwrap_or(i64::max_value()),
            });
        }

        Ok(MazeDimensions {
            rows: rows,
            columns: columns,
        })
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline(always)]
    pub fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    /// Cell count and the number of openings a perfect maze on this grid has.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        (cells_count, EdgesCount(cells_count.0 - 1))
    }

    /// The cell diagonally opposite the top left corner.
    #[inline]
    pub fn last_cell(&self) -> Cell {
        Cell::new(self.rows.0 - 1, self.columns.0 - 1)
    }

    #[inline]
    pub fn is_valid_cell(&self, cell: Cell) -> bool {
        cell.row < self.rows.0 && cell.column < self.columns.0
    }

    /// Convert a cell to a one dimensional row major index in the range 0..size().
    /// Returns None if the cell is outside the grid.
    #[inline]
    pub fn cell_to_index(&self, cell: Cell) -> Option<usize> {
        if self.is_valid_cell(cell) {
            Some(cell.row * self.columns.0 + cell.column)
        } else {
            None
        }
    }

    #[inline]
    pub fn cell_from_index(&self, index: usize) -> Cell {
        Cell::new(index / self.columns.0, index % self.columns.0)
    }

    /// Uniformly chosen cell: the row is drawn first, then the column.
    pub fn random_cell<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Cell {
        let row = rng.below(self.rows.0);
        let column = rng.below(self.columns.0);
        Cell::new(row, column)
    }

    /// The adjacent cell in `direction`, if it is inside the grid.
    pub fn neighbour_at_direction(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.offset(direction).filter(|neighbour| self.is_valid_cell(*neighbour))
    }

    /// Cells that are up, right, down or left of a particular cell, but not necessarily linked
    /// by an opening.
    pub fn neighbours(&self, cell: Cell) -> CellSmallVec {
        DIRECTIONS.iter()
            .filter_map(|dir| self.neighbour_at_direction(cell, *dir))
            .collect()
    }

    /// All cells in row major order.
    pub fn iter(&self) -> CellIter {
        CellIter {
            current_cell_number: 0,
            cells_count: self.size().0,
            columns: self.columns.0,
        }
    }
}

/// Signed sizes, e.g. straight from user input. Anything below 1 is rejected.
impl TryFrom<(i64, i64)> for MazeDimensions {
    type Error = MazeError;

    fn try_from(rows_columns: (i64, i64)) -> Result<MazeDimensions, MazeError> {
        let (rows, columns) = rows_columns;
        let invalid = MazeError::InvalidDimensions {
            rows: rows,
            columns: columns,
        };
        let row_count = usize::try_from(rows).map_err(|_| invalid)?;
        let column_count = usize::try_from(columns).map_err(|_| invalid)?;
        MazeDimensions::new(RowsCount(row_count), ColumnsCount(column_count))
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    cells_count: usize,
    columns: usize,
}

impl Iterator for CellIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let n = self.current_cell_number;
            self.current_cell_number += 1;
            Some(Cell::new(n / self.columns, n % self.columns))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
impl ExactSizeIterator for CellIter {} // default impl using size_hint()


#[cfg(test)]
mod tests {

    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dims(rows: usize, columns: usize) -> MazeDimensions {
        MazeDimensions::new(RowsCount(rows), ColumnsCount(columns)).expect("valid dimensions")
    }

    #[test]
    fn zero_sized_grids_are_rejected() {
        assert_eq!(MazeDimensions::new(RowsCount(0), ColumnsCount(5)),
                   Err(MazeError::InvalidDimensions { rows: 0, columns: 5 }));
        assert_eq!(MazeDimensions::new(RowsCount(5), ColumnsCount(0)),
                   Err(MazeError::InvalidDimensions { rows: 5, columns: 0 }));
    }

    #[test]
    fn overflowing_grids_are_rejected() {
        let huge = MazeDimensions::new(RowsCount(usize::max_value()), ColumnsCount(2));
        assert!(huge.is_err());
    }

    #[test]
    fn negative_sizes_are_rejected() {
        assert_eq!(MazeDimensions::try_from((3i64, -1i64)),
                   Err(MazeError::InvalidDimensions { rows: 3, columns: -1 }));
        assert_eq!(MazeDimensions::try_from((0i64, 5i64)),
                   Err(MazeError::InvalidDimensions { rows: 0, columns: 5 }));
        assert_eq!(MazeDimensions::try_from((2i64, 3i64)), Ok(dims(2, 3)));
    }

    #[test]
    fn sizes() {
        let d = dims(3, 5);
        assert_eq!(d.rows(), RowsCount(3));
        assert_eq!(d.columns(), ColumnsCount(5));
        assert_eq!(d.size(), NodesCount(15));
        assert_eq!(d.graph_size(), (NodesCount(15), EdgesCount(14)));
        assert_eq!(d.last_cell(), Cell::new(2, 4));
    }

    #[test]
    fn cell_index_conversion() {
        let d = dims(3, 4);
        for (i, cell) in d.iter().enumerate() {
            assert_eq!(d.cell_to_index(cell), Some(i));
            assert_eq!(d.cell_from_index(i), cell);
        }
        assert_eq!(d.cell_to_index(Cell::new(3, 0)), None);
        assert_eq!(d.cell_to_index(Cell::new(0, 4)), None);
    }

    #[test]
    fn cell_iter_is_row_major() {
        let d = dims(2, 3);
        assert_eq!(d.iter().len(), 6);
        assert_eq!(d.iter().collect::<Vec<Cell>>(),
                   &[Cell::new(0, 0),
                     Cell::new(0, 1),
                     Cell::new(0, 2),
                     Cell::new(1, 0),
                     Cell::new(1, 1),
                     Cell::new(1, 2)]);
    }

    #[test]
    fn neighbour_cells() {
        let d = dims(10, 10);

        let check_expected_neighbours = |cell, expected_neighbours: &[Cell]| {
            let neighbours: Vec<Cell> = d.neighbours(cell).iter().cloned().sorted().collect();
            let expected: Vec<Cell> = expected_neighbours.iter().cloned().sorted().collect();
            assert_eq!(neighbours, expected);
        };
        let c = |r, col| Cell::new(r, col);

        // corners
        check_expected_neighbours(c(0, 0), &[c(0, 1), c(1, 0)]);
        check_expected_neighbours(c(0, 9), &[c(0, 8), c(1, 9)]);
        check_expected_neighbours(c(9, 0), &[c(8, 0), c(9, 1)]);
        check_expected_neighbours(c(9, 9), &[c(9, 8), c(8, 9)]);

        // sides
        check_expected_neighbours(c(0, 1), &[c(0, 0), c(1, 1), c(0, 2)]);
        check_expected_neighbours(c(8, 9), &[c(7, 9), c(9, 9), c(8, 8)]);

        check_expected_neighbours(c(1, 1), &[c(0, 1), c(1, 0), c(2, 1), c(1, 2)]);
    }

    #[test]
    fn neighbour_at_dir() {
        let d = dims(2, 2);
        assert_eq!(d.neighbour_at_direction(Cell::new(0, 0), Direction::Up), None);
        assert_eq!(d.neighbour_at_direction(Cell::new(0, 0), Direction::Left), None);
        assert_eq!(d.neighbour_at_direction(Cell::new(0, 0), Direction::Down),
                   Some(Cell::new(1, 0)));
        assert_eq!(d.neighbour_at_direction(Cell::new(1, 1), Direction::Right), None);
        assert_eq!(d.neighbour_at_direction(Cell::new(1, 1), Direction::Down), None);
        assert_eq!(d.neighbour_at_direction(Cell::new(1, 1), Direction::Up),
                   Some(Cell::new(0, 1)));
    }

    #[test]
    fn random_cell() {
        let d = dims(4, 7);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(d.is_valid_cell(d.random_cell(&mut rng)));
        }
    }
}
