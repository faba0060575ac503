use fnv::FnvHashMap;
use smallvec::SmallVec;

use crate::cells::Cell;
use crate::maze::Maze;


/// Steps from a start cell to every cell reachable through the maze's openings.
#[derive(Debug, Clone)]
pub struct Distances {
    start_cell: Cell,
    distances: FnvHashMap<Cell, u32>,
    max_distance: u32,
}

impl Distances {
    /// Flood fill (breadth first) from `start_cell`.
    ///
    /// Returns None if `start_cell` is not on the maze.
    pub fn new(maze: &Maze, start_cell: Cell) -> Option<Distances> {

        if !maze.dimensions().is_valid_cell(start_cell) {
            return None;
        }

        let mut max = 0;
        let mut distances = FnvHashMap::with_capacity_and_hasher(maze.size(), Default::default());
        distances.insert(start_cell, 0);

        // Every link is one step so the first distance recorded for a cell is already the
        // shortest: the map doubles as the visited set.
        let mut frontier = vec![start_cell];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell in &frontier {

                let distance_to_cell = distances[cell];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for link in maze.links(*cell).iter() {
                    if !distances.contains_key(link) {
                        distances.insert(*link, distance_to_cell + 1);
                        new_frontier.push(*link);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_cell: start_cell,
            distances: distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> Cell {
        self.start_cell
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    /// None if the cell cannot be reached, or is not on the maze.
    #[inline(always)]
    pub fn distance_from_start_to(&self, cell: Cell) -> Option<u32> {
        self.distances.get(&cell).cloned()
    }

    /// How many cells were reached, including the start.
    #[inline]
    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }

    /// The cells furthest from the start, in row major order.
    pub fn furthest_cells(&self) -> SmallVec<[Cell; 8]> {
        let furthest_distance = self.max();
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(cell, _)| *cell)
            .collect::<SmallVec<[Cell; 8]>>();
        furthest.sort();
        furthest
    }
}

/// The route from the start of `distances_from_start` to `end_cell`, both ends included.
///
/// None if the end is unreachable. In a perfect maze this is the only route.
pub fn shortest_path(maze: &Maze,
                     distances_from_start: &Distances,
                     end_cell: Cell)
                     -> Option<Vec<Cell>> {

    let mut distance_to_current = distances_from_start.distance_from_start_to(end_cell)?;
    let start = distances_from_start.start();
    let mut path = vec![end_cell];
    let mut current_cell = end_cell;

    while current_cell != start {
        // Step back to any linked cell one closer to the start.
        let previous = maze.links(current_cell)
            .iter()
            .cloned()
            .find(|link| {
                distances_from_start.distance_from_start_to(*link) ==
                Some(distance_to_current - 1)
            })?;
        path.push(previous);
        current_cell = previous;
        distance_to_current -= 1;
    }

    path.reverse();
    Some(path)
}

/// The route the puzzle asks for: from the player's start cell to the goal cell.
pub fn start_to_goal_path(maze: &Maze) -> Option<Vec<Cell>> {
    let distances = Distances::new(maze, maze.start_cell())?;
    shortest_path(maze, &distances, maze.goal_cell())
}

/// One of the longest routes through the maze.
///
/// The furthest cell from anywhere is an end of a longest path in a tree, so two flood fills
/// find it: one from an arbitrary cell and one back from the furthest cell found.
pub fn longest_path(maze: &Maze) -> Option<Vec<Cell>> {
    let from_start = Distances::new(maze, maze.start_cell())?;
    let path_start = *from_start.furthest_cells().first()?;
    let from_path_start = Distances::new(maze, path_start)?;
    let path_end = *from_path_start.furthest_cells().first()?;
    shortest_path(maze, &from_path_start, path_end)
}
