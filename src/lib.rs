//! **perfect_mazes** carves perfect mazes - exactly one route between any two cells - on a
//! rectangular grid with a randomized depth first backtracker, and answers the questions a maze
//! puzzle asks of the result: which walls still stand, where the player starts, where the goal
//! is and how to get there.

pub mod bool_matrix;
pub mod cells;
pub mod dimensions;
pub mod errors;
pub mod generators;
pub mod maze;
pub mod maze_display;
pub mod pathing;
pub mod random;
pub mod units;
