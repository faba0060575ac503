use std::fmt;

use fnv::FnvHashSet;

use crate::cells::{Cell, Direction};
use crate::maze::Maze;
use crate::pathing::Distances;


/// Decides what goes inside each cell when a maze is drawn as text.
pub trait MazeDisplay {
    /// Render the contents of a maze cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cell) -> String {
        String::from("   ")
    }
}

impl MazeDisplay for Distances {
    fn render_cell_body(&self, cell: Cell) -> String {
        if let Some(d) = self.distance_from_start_to(cell) {
            // centre align, padding 3, lowercase hexadecimal
            format!("{:^3x}", d)
        } else {
            String::from("   ")
        }
    }
}

/// Marks the player's start cell with `S` and the goal cell with `E`.
#[derive(Debug)]
pub struct StartGoalDisplay {
    start: Cell,
    goal: Cell,
}
impl StartGoalDisplay {
    pub fn new(maze: &Maze) -> StartGoalDisplay {
        StartGoalDisplay {
            start: maze.start_cell(),
            goal: maze.goal_cell(),
        }
    }
}
impl MazeDisplay for StartGoalDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        if cell == self.start {
            String::from(" S ")
        } else if cell == self.goal {
            String::from(" E ")
        } else {
            String::from("   ")
        }
    }
}

/// Start and goal markers plus a dot in every other cell along a path.
#[derive(Debug)]
pub struct PathDisplay {
    end_points: StartGoalDisplay,
    on_path_cells: FnvHashSet<Cell>,
}
impl PathDisplay {
    pub fn new(maze: &Maze, path: &[Cell]) -> PathDisplay {
        let on_path_cells = path.iter().cloned().collect::<FnvHashSet<_>>();
        PathDisplay {
            end_points: StartGoalDisplay::new(maze),
            on_path_cells: on_path_cells,
        }
    }
}
impl MazeDisplay for PathDisplay {
    fn render_cell_body(&self, cell: Cell) -> String {
        let marker = self.end_points.render_cell_body(cell);
        if marker.trim().is_empty() && self.on_path_cells.contains(&cell) {
            String::from(" . ")
        } else {
            marker
        }
    }
}

/// A maze drawn with box drawing characters, optionally with something inside the cells.
pub struct MazeView<'a> {
    maze: &'a Maze,
    display: Option<&'a dyn MazeDisplay>,
}

impl<'a> MazeView<'a> {
    pub fn new(maze: &'a Maze) -> MazeView<'a> {
        MazeView {
            maze: maze,
            display: None,
        }
    }

    pub fn with_display(maze: &'a Maze, display: &'a dyn MazeDisplay) -> MazeView<'a> {
        MazeView {
            maze: maze,
            display: Some(display),
        }
    }

    fn cell_body(&self, cell: Cell) -> String {
        self.display.map_or_else(|| String::from("   "), |d| d.render_cell_body(cell))
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", MazeView::new(self))
    }
}

impl<'a> fmt::Display for MazeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const WALL_L: &str = "╴";
        const WALL_R: &str = "╶";
        const WALL_U: &str = "╵";
        const WALL_D: &str = "╷";
        const WALL_LR_3: &str = "───";
        const WALL_LR: &str = "─";
        const WALL_UD: &str = "│";
        const WALL_LD: &str = "┐";
        const WALL_RU: &str = "└";
        const WALL_LU: &str = "┘";
        const WALL_RD: &str = "┌";
        const WALL_LRU: &str = "┴";
        const WALL_LRD: &str = "┬";
        const WALL_LRUD: &str = "┼";
        const WALL_RUD: &str = "├";
        const WALL_LUD: &str = "┤";

        let maze = self.maze;
        let rows_count = maze.rows().0;
        let columns_count = maze.columns().0;

        // Start by special case rendering the text for the top boundary
        let mut output = String::from(WALL_RD);
        for column in 0..columns_count {
            output.push_str(WALL_LR_3);
            let is_right_open = maze.is_open(Cell::new(0, column), Direction::Right);
            if is_right_open {
                output.push_str(WALL_LR);
            } else if column == columns_count - 1 {
                output.push_str(WALL_LD);
            } else {
                output.push_str(WALL_LRD);
            }
        }
        output.push('\n');

        for row in 0..rows_count {

            let is_last_row = row == rows_count - 1;

            // The top section of each cell is the bottom section of the row above.
            let mut row_middle_section_render = String::from(WALL_UD);
            let mut row_bottom_section_render = String::new();

            for column in 0..columns_count {

                let cell = Cell::new(row, column);
                let is_last_column = column == columns_count - 1;
                let right_open = maze.is_open(cell, Direction::Right);
                let down_open = maze.is_open(cell, Direction::Down);

                row_middle_section_render.push_str(&self.cell_body(cell));
                row_middle_section_render.push_str(if right_open { " " } else { WALL_UD });

                if column == 0 {
                    row_bottom_section_render = if is_last_row {
                        String::from(WALL_RU)
                    } else if down_open {
                        String::from(WALL_UD)
                    } else {
                        String::from(WALL_RUD)
                    };
                }
                row_bottom_section_render.push_str(if down_open { "   " } else { WALL_LR_3 });

                let corner = match (is_last_row, is_last_column) {
                    (true, true) => WALL_LU,
                    (true, false) => if right_open { WALL_LR } else { WALL_LRU },
                    (false, true) => if down_open { WALL_UD } else { WALL_LUD },
                    (false, false) => {
                        // The four wall sections meeting at the bottom right corner of the cell
                        let show_left_section = !down_open;
                        let show_right_section =
                            !maze.is_open(Cell::new(row, column + 1), Direction::Down);
                        let show_up_section = !right_open;
                        let show_down_section =
                            !maze.is_open(Cell::new(row + 1, column), Direction::Right);

                        match (show_left_section,
                               show_right_section,
                               show_up_section,
                               show_down_section) {
                            (true, true, true, true) => WALL_LRUD,
                            (true, true, true, false) => WALL_LRU,
                            (true, true, false, true) => WALL_LRD,
                            (true, false, true, true) => WALL_LUD,
                            (false, true, true, true) => WALL_RUD,
                            (true, true, false, false) => WALL_LR,
                            (false, false, true, true) => WALL_UD,
                            (false, true, true, false) => WALL_RU,
                            (true, false, false, true) => WALL_LD,
                            (true, false, true, false) => WALL_LU,
                            (false, true, false, true) => WALL_RD,
                            (true, false, false, false) => WALL_L,
                            (false, true, false, false) => WALL_R,
                            (false, false, true, false) => WALL_U,
                            (false, false, false, true) => WALL_D,
                            (false, false, false, false) => " ",
                        }
                    }
                };
                row_bottom_section_render.push_str(corner);
            }

            output.push_str(&row_middle_section_render);
            output.push('\n');
            output.push_str(&row_bottom_section_render);
            output.push('\n');
        }

        write!(f, "{}", output)
    }
}
