use std::convert::TryFrom;

use log::{debug, trace};

use crate::cells::{Cell, Direction, DIRECTIONS};
use crate::dimensions::MazeDimensions;
use crate::errors::MazeError;
use crate::maze::{Maze, MazeBuilder};
use crate::random::{shuffle, RandomSource};

/// Validate the requested size and carve a maze on it with `recursive_backtracker`.
///
/// Sizes below 1 are rejected with `MazeError::InvalidDimensions` before any random draw is
/// made, there is never a partially carved maze.
pub fn generate<R>(rows: i64, columns: i64, rng: &mut R) -> Result<Maze, MazeError>
    where R: RandomSource + ?Sized
{
    let dimensions = MazeDimensions::try_from((rows, columns))?;
    Ok(recursive_backtracker(&dimensions, rng))
}

/// Apply the recursive backtracker maze generation algorithm to a fresh grid.
///
/// A depth first walk from a random cell: every cell visited shuffles its four neighbours and
/// carves a passage into each one that is inside the grid and still unvisited, finishing the
/// whole walk from that neighbour before trying the next. Walls into visited cells are never
/// opened, so the openings form a spanning tree of the grid - a perfect maze with long twisting
/// corridors.
///
/// Random draws, in order: the seed cell row, the seed cell column, then one shuffle of the
/// up/right/down/left candidates per cell as it is first visited (four draws). The same draws
/// always give the same maze.
///
/// The walk keeps its own stack of pending cells rather than recursing, so grid size is only
/// limited by memory. The carving order is exactly that of the recursive formulation.
pub fn recursive_backtracker<R>(dimensions: &MazeDimensions, rng: &mut R) -> Maze
    where R: RandomSource + ?Sized
{
    let seed_cell = dimensions.random_cell(rng);
    debug!("Carving a {}x{} maze from seed cell {:?}",
           dimensions.rows().0,
           dimensions.columns().0,
           seed_cell);

    let mut builder = MazeBuilder::new(*dimensions, seed_cell);
    let mut stack: Vec<Frame> = vec![];
    stack.extend(Frame::enter(&mut builder, seed_cell, rng));

    while let Some(frame) = stack.last_mut() {

        let direction = match frame.next_candidate() {
            Some(dir) => dir,
            None => {
                // All four candidates tried, backtrack.
                let _ = stack.pop();
                continue;
            }
        };
        let cell = frame.cell;

        let unvisited_neighbour = builder.dimensions()
            .neighbour_at_direction(cell, direction)
            .filter(|neighbour| !builder.is_visited(*neighbour));

        if let Some(neighbour) = unvisited_neighbour {
            builder.open(cell, direction);
            trace!("Opened {:?} -> {:?}", cell, neighbour);
            stack.extend(Frame::enter(&mut builder, neighbour, rng));
        }
    }

    let maze = builder.build();
    debug!("Carved {} openings across {} cells", maze.openings_count(), maze.size());
    maze
}

/// A cell whose neighbours are still being walked.
#[derive(Debug)]
struct Frame {
    cell: Cell,
    candidates: [Direction; 4],
    next: usize,
}

impl Frame {
    /// Visit `cell`. None if it had already been visited: nothing more to do there.
    fn enter<R>(builder: &mut MazeBuilder, cell: Cell, rng: &mut R) -> Option<Frame>
        where R: RandomSource + ?Sized
    {
        if !builder.visit(cell) {
            return None;
        }

        let mut candidates = DIRECTIONS;
        shuffle(&mut candidates, rng);
        Some(Frame {
            cell: cell,
            candidates: candidates,
            next: 0,
        })
    }

    fn next_candidate(&mut self) -> Option<Direction> {
        let candidate = self.candidates.get(self.next).cloned();
        self.next += 1;
        candidate
    }
}
