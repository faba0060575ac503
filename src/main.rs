use docopt::Docopt;
use log::info;
use perfect_mazes::{
    generators,
    maze::Maze,
    maze_display::{MazeView, PathDisplay, StartGoalDisplay},
    pathing,
};
use rand::{rngs::StdRng, SeedableRng};
use serde_derive::Deserialize;
use std::{
    io,
    io::prelude::*,
    fs::File,
};

const USAGE: &str = "Perfect mazes

Usage:
    maze_driver -h | --help
    maze_driver [--rows=<n>] [--columns=<n>] [--seed=<s>] [--show-path | --show-distances] [--text-out=<path>] [--save-edges=<path>]

Options:
    -h --help              Show this screen.
    --rows=<n>             Number of cell rows in the maze [default: 8].
    --columns=<n>          Number of cell columns in the maze [default: 8].
    --seed=<s>             Seed the random number generator to reproduce a maze. Random when not given.
    --show-path            Show the route from the start (top left) to the goal (bottom right).
    --show-distances       Show the number of steps from the start to every cell, in hexadecimal.
    --text-out=<path>      Output file path for the textual rendering of the maze instead of the terminal.
    --save-edges=<path>    Serialize the maze to a text file: each line is a pair of numbers. Line 1: n(#vertices) m(#edges). Line 2+ edge between vertices. Uses 1-based row major vertex indices.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: i64,
    flag_columns: i64,
    flag_seed: Option<u64>,
    flag_show_path: bool,
    flag_show_distances: bool,
    flag_text_out: String,
    flag_save_edges: String,
}

// Create the Error, ErrorKind, ResultExt, and Result types with `error_chain!`.
// The foreign links give the From conversions that let `?` work for our `Error`.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            Io(::std::io::Error);
            InvalidMaze(::perfect_mazes::errors::MazeError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let maze = if let Some(seed) = args.flag_seed {
        generators::generate(args.flag_rows, args.flag_columns, &mut StdRng::seed_from_u64(seed))?
    } else {
        generators::generate(args.flag_rows, args.flag_columns, &mut rand::thread_rng())?
    };
    info!("Generated a {}x{} maze from seed cell {:?}, {} walls left standing",
          maze.rows().0,
          maze.columns().0,
          maze.seed_cell(),
          maze.closed_walls().count());

    if !args.flag_save_edges.is_empty() {

        save_maze_graph(&maze, &args.flag_save_edges)?;
    }

    let text = render_maze_text(&maze, &args)?;
    if args.flag_text_out.is_empty() {
        println!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

/// Text rendering of the maze with whatever the arguments asked to see inside the cells:
/// distances from the start, the route to the goal, or just the start and goal markers.
fn render_maze_text(maze: &Maze, maze_args: &MazeArgs) -> Result<String> {

    if maze_args.flag_show_distances {

        let distances = pathing::Distances::new(maze, maze.start_cell())
            .ok_or("The start cell is not on the maze.")?;
        Ok(format!("{}", MazeView::with_display(maze, &distances)))

    } else if maze_args.flag_show_path {

        let path = pathing::start_to_goal_path(maze)
            .ok_or("No route from the start to the goal, the maze is not perfect.")?;
        let display = PathDisplay::new(maze, &path);
        Ok(format!("{}", MazeView::with_display(maze, &display)))

    } else {

        let display = StartGoalDisplay::new(maze);
        Ok(format!("{}", MazeView::with_display(maze, &display)))
    }
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

fn save_maze_graph(maze: &Maze, file_path: &str) -> Result<()> {

    let mut graph_data = String::new();
    let vertices_count = maze.size();
    let edges_count = maze.openings_count();
    graph_data.push_str(vertices_count.to_string().as_ref());
    graph_data.push(' ');
    graph_data.push_str(edges_count.to_string().as_ref());
    graph_data.push('\n');

    for (src, dst) in maze.iter_links() {
        let index_a = maze.dimensions()
            .cell_to_index(src)
            .ok_or("Links iter should give valid cells")?;
        let index_b = maze.dimensions()
            .cell_to_index(dst)
            .ok_or("Links iter should give valid cells")?;
        let src_as_1_based_index = index_a + 1;
        let dst_as_1_based_index = index_b + 1;

        graph_data.push_str(src_as_1_based_index.to_string().as_ref());
        graph_data.push(' ');
        graph_data.push_str(dst_as_1_based_index.to_string().as_ref());
        graph_data.push('\n');
    }

    write_text_to_file(&graph_data, file_path)
        .chain_err(|| format!("Failed to write maze graph to text file {}", file_path))?;

    Ok(())
}
