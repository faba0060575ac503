use petgraph::graph::{NodeIndex, UnGraph};

use crate::bool_matrix::BoolMatrix;
use crate::cells::{Cell, CellSmallVec, Direction, DIRECTIONS};
use crate::dimensions::MazeDimensions;
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};


/// Which opening matrix a wall lives in.
///
/// A `Horizontal` wall separates a cell from the one below it, a `Vertical` wall separates a
/// cell from the one to its right.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One inner wall of the grid, addressed by its entry in the matching opening matrix.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Wall {
    pub orientation: Orientation,
    pub row: usize,
    pub column: usize,
}

impl Wall {
    /// The wall between `cell` and its neighbour in `direction`.
    ///
    /// None on the outer boundary of the grid (a negative index) - the caller still has to check
    /// the upper bounds against the opening matrices.
    pub fn between(cell: Cell, direction: Direction) -> Option<Wall> {
        let (row, column) = (cell.row, cell.column);
        match direction {
            Direction::Up if row > 0 => Some(Wall::horizontal(row - 1, column)),
            Direction::Down => Some(Wall::horizontal(row, column)),
            Direction::Left if column > 0 => Some(Wall::vertical(row, column - 1)),
            Direction::Right => Some(Wall::vertical(row, column)),
            _ => None,
        }
    }

    fn horizontal(row: usize, column: usize) -> Wall {
        Wall {
            orientation: Orientation::Horizontal,
            row: row,
            column: column,
        }
    }

    fn vertical(row: usize, column: usize) -> Wall {
        Wall {
            orientation: Orientation::Vertical,
            row: row,
            column: column,
        }
    }

    /// The two cells this wall separates: above/below or left/right.
    pub fn cells(&self) -> (Cell, Cell) {
        let first = Cell::new(self.row, self.column);
        match self.orientation {
            Orientation::Horizontal => (first, Cell::new(self.row + 1, self.column)),
            Orientation::Vertical => (first, Cell::new(self.row, self.column + 1)),
        }
    }
}


/// A finished maze: which cells the carving reached and which inner walls it removed.
///
/// * `visited` is `rows x columns`.
/// * `horizontal_openings` is `(rows - 1) x columns`, `[r][c]` opens `(r, c)` to `(r + 1, c)`.
/// * `vertical_openings` is `rows x (columns - 1)`, `[r][c]` opens `(r, c)` to `(r, c + 1)`.
///
/// Nothing can change a `Maze` after the generator hands it over.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Maze {
    dimensions: MazeDimensions,
    seed_cell: Cell,
    visited: BoolMatrix,
    horizontal_openings: BoolMatrix,
    vertical_openings: BoolMatrix,
}

impl Maze {
    #[inline]
    pub fn dimensions(&self) -> &MazeDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    /// The cell the carving started from. It only shapes the corridors, see `start_cell`.
    #[inline]
    pub fn seed_cell(&self) -> Cell {
        self.seed_cell
    }

    #[inline]
    pub fn visited(&self) -> &BoolMatrix {
        &self.visited
    }

    #[inline]
    pub fn horizontal_openings(&self) -> &BoolMatrix {
        &self.horizontal_openings
    }

    #[inline]
    pub fn vertical_openings(&self) -> &BoolMatrix {
        &self.vertical_openings
    }

    /// Where the player starts: always the top left cell.
    #[inline]
    pub fn start_cell(&self) -> Cell {
        Cell::new(0, 0)
    }

    /// Where the goal sits: always the bottom right cell.
    #[inline]
    pub fn goal_cell(&self) -> Cell {
        self.dimensions.last_cell()
    }

    #[inline]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.get(cell.row, cell.column)
    }

    /// Is there an opening from `cell` in `direction`? Always false on the outer boundary.
    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        self.dimensions.is_valid_cell(cell) &&
        Wall::between(cell, direction).map_or(false, |wall| self.is_wall_open(wall))
    }

    pub fn is_wall_open(&self, wall: Wall) -> bool {
        match wall.orientation {
            Orientation::Horizontal => self.horizontal_openings.get(wall.row, wall.column),
            Orientation::Vertical => self.vertical_openings.get(wall.row, wall.column),
        }
    }

    /// Are two cells joined by an opening?
    pub fn is_linked(&self, a: Cell, b: Cell) -> bool {
        DIRECTIONS.iter()
            .any(|dir| a.offset(*dir) == Some(b) && self.is_open(a, *dir))
    }

    /// Cells reachable from a particular cell through one opening.
    pub fn links(&self, cell: Cell) -> CellSmallVec {
        DIRECTIONS.iter()
            .filter(|dir| self.is_open(cell, **dir))
            .filter_map(|dir| cell.offset(*dir))
            .collect()
    }

    /// Total opened walls. A perfect maze has `size() - 1`.
    pub fn openings_count(&self) -> usize {
        self.horizontal_openings.count_true() + self.vertical_openings.count_true()
    }

    /// Every opening as the pair of cells it joins, horizontal openings first.
    pub fn iter_links<'a>(&'a self) -> impl Iterator<Item = (Cell, Cell)> + 'a {
        self.walls()
            .filter(move |wall| self.is_wall_open(*wall))
            .map(|wall| wall.cells())
    }

    /// Every wall still standing. Each of these becomes one obstacle in the puzzle world, the
    /// outer boundary is not included.
    pub fn closed_walls<'a>(&'a self) -> impl Iterator<Item = Wall> + 'a {
        self.walls().filter(move |wall| !self.is_wall_open(*wall))
    }

    fn walls<'a>(&'a self) -> impl Iterator<Item = Wall> + 'a {
        let horizontals = self.horizontal_openings
            .iter()
            .map(|(row, column, _)| Wall::horizontal(row, column));
        let verticals = self.vertical_openings
            .iter()
            .map(|(row, column, _)| Wall::vertical(row, column));
        horizontals.chain(verticals)
    }

    /// The maze as an undirected graph: one node per cell in row major order (the node index is
    /// the cell's row major index) and one edge per opening.
    pub fn to_graph(&self) -> UnGraph<Cell, ()> {
        let (NodesCount(nodes), EdgesCount(edges)) = self.dimensions.graph_size();
        let mut graph = UnGraph::with_capacity(nodes, edges);
        for cell in self.dimensions.iter() {
            let _ = graph.add_node(cell);
        }
        for (a, b) in self.iter_links() {
            if let (Some(a_index), Some(b_index)) = (self.dimensions.cell_to_index(a),
                                                     self.dimensions.cell_to_index(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }
}


/// Mutable maze state, exclusively owned by one generator run until `build` freezes it.
#[derive(Debug)]
pub(crate) struct MazeBuilder {
    dimensions: MazeDimensions,
    seed_cell: Cell,
    visited: BoolMatrix,
    horizontal_openings: BoolMatrix,
    vertical_openings: BoolMatrix,
}

impl MazeBuilder {
    pub fn new(dimensions: MazeDimensions, seed_cell: Cell) -> MazeBuilder {
        let RowsCount(rows) = dimensions.rows();
        let ColumnsCount(columns) = dimensions.columns();
        MazeBuilder {
            dimensions: dimensions,
            seed_cell: seed_cell,
            visited: BoolMatrix::new(rows, columns),
            horizontal_openings: BoolMatrix::new(rows - 1, columns),
            vertical_openings: BoolMatrix::new(rows, columns - 1),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &MazeDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.get(cell.row, cell.column)
    }

    /// Returns false if the cell had already been visited.
    #[inline]
    pub fn visit(&mut self, cell: Cell) -> bool {
        self.visited.set(cell.row, cell.column)
    }

    /// Remove the wall between `cell` and its neighbour in `direction`.
    ///
    /// Panics if there is no such inner wall.
    pub fn open(&mut self, cell: Cell, direction: Direction) {
        let wall = Wall::between(cell, direction)
            .unwrap_or_else(|| panic!("No wall {:?} of {:?} to open", direction, cell));
        let _ = match wall.orientation {
            Orientation::Horizontal => self.horizontal_openings.set(wall.row, wall.column),
            Orientation::Vertical => self.vertical_openings.set(wall.row, wall.column),
        };
    }

    pub fn build(self) -> Maze {
        Maze {
            dimensions: self.dimensions,
            seed_cell: self.seed_cell,
            visited: self.visited,
            horizontal_openings: self.horizontal_openings,
            vertical_openings: self.vertical_openings,
        }
    }
}
